//! Player capabilities read by the HUD widgets
use std::cell::Cell;

/// What a display panel needs to know about a player.
///
/// Panels only ever read through this trait; who mutates the player and when
/// is up to the host.
pub trait Player {
    fn is_alive(&self) -> bool;
    fn lives(&self) -> u32;
}

/// Host-side player model.
///
/// State lives in `Cell`s so the host can change it through the same `Rc`
/// handle the panel keeps.
#[derive(Debug)]
pub struct ArcadePlayer {
    name: String,
    lives: Cell<u32>,
    alive: Cell<bool>,
}

impl ArcadePlayer {
    pub fn new(name: impl Into<String>, lives: u32) -> Self {
        Self {
            name: name.into(),
            lives: Cell::new(lives),
            alive: Cell::new(true),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_lives(&self, lives: u32) {
        self.lives.set(lives);
    }

    pub fn add_life(&self) {
        self.lives.set(self.lives.get().saturating_add(1));
    }

    /// Takes one life away. Running out of lives kills the player.
    pub fn lose_life(&self) {
        let left = self.lives.get().saturating_sub(1);
        self.lives.set(left);
        if left == 0 && self.alive.get() {
            self.alive.set(false);
            tracing::debug!(player = %self.name, "out of lives");
        }
    }

    pub fn kill(&self) {
        self.alive.set(false);
    }

    pub fn revive(&self) {
        self.alive.set(true);
    }
}

impl Player for ArcadePlayer {
    fn is_alive(&self) -> bool {
        self.alive.get()
    }

    fn lives(&self) -> u32 {
        self.lives.get()
    }
}
