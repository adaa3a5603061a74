use std::io;
use std::time::Duration;

use clap::Parser;

use simdesk::apps::AppCatalog;
use simdesk::config::{Cli, ShellConfig};
use simdesk::drivers::{ConsoleInputDriver, ConsoleOutputDriver};
use simdesk::logging;
use simdesk::prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
use simdesk::shell::{self, Shell};
use simdesk::sound::{BellCuePlayer, CuePlayer, LogCuePlayer};

const POLL_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = ShellConfig::try_from(&cli).map_err(io::Error::other)?;
    logging::init(config.log_level, config.log_file.as_deref())?;

    let store: Box<dyn PreferenceStore> = match &config.prefs_path {
        Some(path) => Box::new(FilePreferences::open(path).map_err(io::Error::other)?),
        None => Box::new(MemoryPreferences::new()),
    };
    let cues: Box<dyn CuePlayer> = if config.sound {
        Box::new(BellCuePlayer::new(io::stdout()))
    } else {
        Box::new(LogCuePlayer)
    };

    let mut shell = Shell::new(
        AppCatalog::builtin(),
        store,
        cues,
        config.scale,
        config.initial_apps.clone(),
    );
    let mut output = ConsoleOutputDriver::new()?;
    shell::run(&mut shell, ConsoleInputDriver::new(), &mut output, POLL_INTERVAL)
}
