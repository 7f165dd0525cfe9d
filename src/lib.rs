pub mod cli;
pub mod core;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::formatter::{default_life_format, FormatterPreset, LifeFormatter};
pub use crate::core::life_panel::{LifePanel, LifeSlot};
pub use crate::core::player::{ArcadePlayer, Player};
pub use crate::core::roster::{PlayerSpec, Roster};
