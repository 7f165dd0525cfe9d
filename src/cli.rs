use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::core::formatter::FormatterPreset;
use crate::core::roster::Roster;

#[derive(Parser, Debug)]
#[command(name = "lifepanel")]
#[command(about = "🕹️ Per-player lives panel for terminal arcade games")]
#[command(version)]
pub struct Cli {
    /// Number of generated players
    #[arg(short, long, default_value_t = 2)]
    pub players: usize,

    /// Starting lives for generated players
    #[arg(short, long, default_value_t = 3)]
    pub lives: u32,

    /// JSON roster file (overrides --players and --lives)
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// How life counts are written
    #[arg(short, long, value_enum, default_value_t = FormatterPreset::Default)]
    pub formatter: FormatterPreset,

    /// Directory for the log file; the terminal is taken by the UI
    #[arg(long, default_value = ".")]
    pub log_dir: PathBuf,

    /// Log file name inside --log-dir
    #[arg(long, default_value = "lifepanel.log")]
    pub log_file: String,
}

impl Cli {
    pub fn roster(&self) -> Result<Roster> {
        match &self.roster {
            Some(path) => Roster::load(path),
            None => Ok(Roster::generated(self.players, self.lives)),
        }
    }
}
