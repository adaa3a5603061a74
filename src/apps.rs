//! Content-provider registry.
//!
//! Windows refer to their content by an opaque app id. The catalog maps each
//! id to a zero-argument factory plus the title and icon used when the
//! window is created.

use thiserror::Error;

use crate::components::{
    AboutComponent, Component, LogViewComponent, NotesComponent, PowerComponent,
    SettingsComponent,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown app id: {0:?}")]
    UnknownApp(String),
}

pub type AppFactory = fn() -> Box<dyn Component>;

#[derive(Clone, Copy)]
pub struct AppEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    /// Receives session hooks when mounted.
    pub privileged: bool,
    pub factory: AppFactory,
}

impl std::fmt::Debug for AppEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEntry")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("privileged", &self.privileged)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
    entries: Vec<AppEntry>,
}

impl AppCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(AppEntry {
            id: "about",
            title: "About",
            icon: "i",
            privileged: false,
            factory: || Box::new(AboutComponent::new()),
        });
        catalog.register(AppEntry {
            id: "notes",
            title: "Notes",
            icon: "✎",
            privileged: false,
            factory: || Box::new(NotesComponent::new()),
        });
        catalog.register(AppEntry {
            id: "log",
            title: "Log",
            icon: "≡",
            privileged: false,
            factory: || Box::new(LogViewComponent::default()),
        });
        catalog.register(AppEntry {
            id: "settings",
            title: "Settings",
            icon: "⚙",
            privileged: false,
            factory: || Box::new(SettingsComponent::new()),
        });
        catalog.register(AppEntry {
            id: "power",
            title: "Power",
            icon: "⏻",
            privileged: true,
            factory: || Box::new(PowerComponent::new()),
        });
        catalog
    }

    /// Add `entry`, replacing any entry with the same id.
    pub fn register(&mut self, entry: AppEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn lookup(&self, id: &str) -> Result<&AppEntry, CatalogError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| CatalogError::UnknownApp(id.to_string()))
    }

    /// Build a fresh component for `id`.
    pub fn launch(&self, id: &str) -> Result<(&AppEntry, Box<dyn Component>), CatalogError> {
        let entry = self.lookup(id)?;
        Ok((entry, (entry.factory)()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }
}
