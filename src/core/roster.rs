//! Player line-up for a session, from a JSON file or generated
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::player::ArcadePlayer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub lives: u32,
    #[serde(default = "alive_by_default")]
    pub alive: bool,
}

fn alive_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub players: Vec<PlayerSpec>,
}

impl Roster {
    /// `Player 1` .. `Player N`, all alive with the same number of lives.
    pub fn generated(count: usize, lives: u32) -> Self {
        let players = (1..=count)
            .map(|i| PlayerSpec { name: format!("Player {}", i), lives, alive: true })
            .collect();
        Self { players }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid roster JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read roster {}", path.display()))?;
        let roster = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), players = roster.players.len(), "roster loaded");
        Ok(roster)
    }

    pub fn into_players(self) -> Vec<Rc<ArcadePlayer>> {
        self.players
            .into_iter()
            .map(|spec| {
                let player = ArcadePlayer::new(spec.name, spec.lives);
                if !spec.alive {
                    player.kill();
                }
                Rc::new(player)
            })
            .collect()
    }
}
