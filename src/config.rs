use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::ui::CellScale;

const CELL_RANGE: std::ops::RangeInclusive<i32> = 1..=64;

#[derive(Parser, Debug)]
#[command(
    name = "simdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiling desktop simulator for the terminal"
)]
pub struct Cli {
    /// Desktop pixels covered by one terminal column.
    #[arg(long, value_name = "PX", default_value_t = 10)]
    pub cell_width: i32,

    /// Desktop pixels covered by one terminal row.
    #[arg(long, value_name = "PX", default_value_t = 20)]
    pub cell_height: i32,

    /// Preferences file. Kept in memory only when omitted.
    #[arg(long, value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Also append log output to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value = "debug")]
    pub log_level: Level,

    /// Disable the terminal bell.
    #[arg(long)]
    pub no_sound: bool,

    /// Apps to open at start.
    #[arg(long = "open", value_name = "APP", num_args = 1.., default_values_t = [String::from("about")])]
    pub open: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub scale: CellScale,
    pub prefs_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
    pub sound: bool,
    pub initial_apps: Vec<String>,
}

impl TryFrom<&Cli> for ShellConfig {
    type Error = String;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if !CELL_RANGE.contains(&cli.cell_width) {
            return Err("cell width must be between 1 and 64 pixels".to_string());
        }
        if !CELL_RANGE.contains(&cli.cell_height) {
            return Err("cell height must be between 1 and 64 pixels".to_string());
        }
        Ok(Self {
            scale: CellScale::new(cli.cell_width, cli.cell_height),
            prefs_path: cli.prefs.clone(),
            log_file: cli.log_file.clone(),
            log_level: cli.log_level,
            sound: !cli.no_sound,
            initial_apps: cli.open.clone(),
        })
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            scale: CellScale::default(),
            prefs_path: None,
            log_file: None,
            log_level: Level::DEBUG,
            sound: true,
            initial_apps: vec!["about".to_string()],
        }
    }
}
