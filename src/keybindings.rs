use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    LaunchNotes,
    CloseWindow,
    MinimizeWindow,
    ToggleMaximize,
    CycleNextWindow,
    CyclePrevWindow,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::LaunchNotes => "Open a notes window",
            Action::CloseWindow => "Close active window",
            Action::MinimizeWindow => "Minimize active window",
            Action::ToggleMaximize => "Maximize / restore active window",
            Action::CycleNextWindow => "Cycle next window",
            Action::CyclePrevWindow => "Cycle previous window",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Letters match case-insensitively so Alt+Shift+N still launches.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.eq_ignore_ascii_case(&b)
                    && key.modifiers.difference(KeyModifiers::SHIFT) == self.mods
            }
            _ => key.code == self.code && key.modifiers == self.mods,
        }
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desktop() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(
            LaunchNotes,
            KeyCombo::new(KeyCode::Char('n'), KeyModifiers::ALT),
        );
        kb.add(
            CloseWindow,
            KeyCombo::new(KeyCode::Char('w'), KeyModifiers::ALT),
        );
        kb.add(
            MinimizeWindow,
            KeyCombo::new(KeyCode::Char('m'), KeyModifiers::ALT),
        );
        kb.add(
            ToggleMaximize,
            KeyCombo::new(KeyCode::Char('x'), KeyModifiers::ALT),
        );
        kb.add(
            CycleNextWindow,
            KeyCombo::new(KeyCode::Right, KeyModifiers::ALT),
        );
        kb.add(
            CyclePrevWindow,
            KeyCombo::new(KeyCode::Left, KeyModifiers::ALT),
        );
        kb
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        if let Some(list) = self.map.get(&action) {
            list.iter().any(|c| c.matches(key))
        } else {
            false
        }
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (act, list) in &self.map {
            if list.iter().any(|c| c.matches(key)) {
                return Some(*act);
            }
        }
        None
    }

    /// Return the display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quit() {
        let kb = KeyBindings::desktop();
        let ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(kb.matches(Action::Quit, &ev));
        assert_eq!(kb.action_for_key(&ev), Some(Action::Quit));
    }

    #[test]
    fn plain_letters_are_not_bound() {
        let kb = KeyBindings::desktop();
        let ev = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&ev), None);
    }

    #[test]
    fn shifted_letter_still_matches() {
        let kb = KeyBindings::desktop();
        let ev = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::ALT | KeyModifiers::SHIFT);
        assert_eq!(kb.action_for_key(&ev), Some(Action::LaunchNotes));
        assert_eq!(kb.combos_for(Action::CyclePrevWindow), vec!["Alt+Left"]);
    }
}
