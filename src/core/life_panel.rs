//! Per-player "lives remaining" panel
//!
//! One column per player, two rows. The bottom row carries the life text and
//! the top row is reserved for a player caption and stays blank.
use std::rc::Rc;

use anyhow::{bail, Result};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Paragraph, Widget},
};

use crate::core::formatter::{default_life_format, LifeFormatter};
use crate::core::player::Player;

/// Shown in front of the life text once a player is dead.
pub const DEATH_NOTICE: &str = "You died.";

/// Text every slot holds until the first refresh.
pub const INITIAL_TEXT: &str = "0";

pub const GRID_ROWS: u32 = 2;

/// The visible text of one player's column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeSlot {
    text: String,
}

impl LifeSlot {
    fn new() -> Self {
        Self { text: INITIAL_TEXT.to_string() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

struct Entry<P> {
    player: Rc<P>,
    slot: LifeSlot,
}

pub struct LifePanel<P: Player> {
    entries: Vec<Entry<P>>,
    formatter: LifeFormatter<P>,
}

impl<P: Player + 'static> LifePanel<P> {
    /// Creates a panel with a column for each player, in the given order.
    ///
    /// Every handle must point at a different player.
    pub fn new(players: Vec<Rc<P>>) -> Result<Self> {
        for (i, player) in players.iter().enumerate() {
            if let Some(j) = players[i + 1..].iter().position(|other| Rc::ptr_eq(player, other)) {
                bail!("player at position {} is the same as the one at position {}", i + j + 1, i);
            }
        }

        let entries = players
            .into_iter()
            .map(|player| Entry { player, slot: LifeSlot::new() })
            .collect::<Vec<_>>();
        tracing::debug!(columns = entries.len(), "life panel created");

        Ok(Self {
            entries,
            formatter: Box::new(|p: &P| default_life_format(p)),
        })
    }

    /// Rewrites every slot from the current player state.
    pub fn refresh(&mut self) {
        for entry in &mut self.entries {
            let prefix = if entry.player.is_alive() { "" } else { DEATH_NOTICE };
            entry.slot.text = format!("{}{}", prefix, (self.formatter)(&*entry.player));
        }
        tracing::trace!(slots = self.entries.len(), "life panel refreshed");
    }

    /// Used from the next `refresh` on; text already shown is left alone.
    pub fn set_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(&P) -> String + 'static,
    {
        self.formatter = Box::new(formatter);
        tracing::debug!("life formatter replaced");
    }

    pub fn reset_formatter(&mut self) {
        self.set_formatter(|p: &P| default_life_format(p));
    }
}

impl<P: Player> LifePanel<P> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = &LifeSlot> {
        self.entries.iter().map(|e| &e.slot)
    }

    pub fn players(&self) -> impl Iterator<Item = &Rc<P>> {
        self.entries.iter().map(|e| &e.player)
    }

    pub fn slot_text(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.slot.text())
    }

    /// Looks a slot up by player identity, not by value.
    pub fn text_for(&self, player: &Rc<P>) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| Rc::ptr_eq(&e.player, player))
            .map(|e| e.slot.text())
    }
}

impl<P: Player> Widget for &LifePanel<P> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.entries.is_empty() {
            return;
        }

        let rows = Layout::vertical([Constraint::Ratio(1, GRID_ROWS); GRID_ROWS as usize]).split(area);
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, self.entries.len() as u32); self.entries.len()])
            .split(rows[1]);

        for (entry, column) in self.entries.iter().zip(columns.iter()) {
            Paragraph::new(entry.slot.text())
                .alignment(Alignment::Center)
                .render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::ArcadePlayer;

    fn players(lives: &[u32]) -> Vec<Rc<ArcadePlayer>> {
        lives
            .iter()
            .enumerate()
            .map(|(i, &l)| Rc::new(ArcadePlayer::new(format!("Player {}", i + 1), l)))
            .collect()
    }

    fn row(buf: &Buffer, y: u16, xs: std::ops::Range<u16>) -> String {
        xs.map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn slots_follow_input_order_and_start_at_zero() {
        let ps = players(&[1, 2, 3]);
        let panel = LifePanel::new(ps.clone()).unwrap();
        assert_eq!(panel.len(), 3);
        assert!(panel.slots().all(|s| s.text() == INITIAL_TEXT));
        for (a, b) in panel.players().zip(ps.iter()) {
            assert!(Rc::ptr_eq(a, b));
        }
    }

    #[test]
    fn alive_player_shows_only_lives() {
        let ps = players(&[42]);
        let mut panel = LifePanel::new(ps).unwrap();
        panel.refresh();
        assert_eq!(panel.slot_text(0), Some("Life:  42"));
    }

    #[test]
    fn dead_player_gets_notice() {
        let ps = players(&[0]);
        ps[0].kill();
        let mut panel = LifePanel::new(ps).unwrap();
        panel.refresh();
        assert_eq!(panel.slot_text(0), Some("You died.Life:   0"));
    }

    #[test]
    fn custom_formatter_applies_on_next_refresh() {
        let ps = players(&[5]);
        let mut panel = LifePanel::new(ps).unwrap();
        panel.refresh();
        panel.set_formatter(|p: &ArcadePlayer| format!("L={}", p.lives()));
        assert_eq!(panel.slot_text(0), Some("Life:   5"));
        panel.refresh();
        assert_eq!(panel.slot_text(0), Some("L=5"));

        panel.reset_formatter();
        panel.refresh();
        assert_eq!(panel.slot_text(0), Some("Life:   5"));
    }

    #[test]
    fn empty_panel_refreshes_fine() {
        let mut panel = LifePanel::<ArcadePlayer>::new(Vec::new()).unwrap();
        panel.refresh();
        assert!(panel.is_empty());
        assert_eq!(panel.slot_text(0), None);
    }

    #[test]
    fn duplicate_handle_is_rejected() {
        let p = Rc::new(ArcadePlayer::new("Pinky", 3));
        let err = LifePanel::new(vec![p.clone(), Rc::new(ArcadePlayer::new("Sue", 3)), p]).err().unwrap();
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn equal_looking_players_are_still_distinct() {
        let ps = vec![Rc::new(ArcadePlayer::new("Twin", 3)), Rc::new(ArcadePlayer::new("Twin", 3))];
        let mut panel = LifePanel::new(ps.clone()).unwrap();
        ps[1].kill();
        panel.refresh();
        assert_eq!(panel.text_for(&ps[0]), Some("Life:   3"));
        assert_eq!(panel.text_for(&ps[1]), Some("You died.Life:   3"));
        assert_eq!(panel.text_for(&Rc::new(ArcadePlayer::new("Twin", 3))), None);
    }

    #[test]
    fn refresh_is_idempotent() {
        let ps = players(&[2, 0]);
        ps[1].kill();
        let mut panel = LifePanel::new(ps).unwrap();
        panel.refresh();
        let first: Vec<_> = panel.slots().cloned().collect();
        panel.refresh();
        let second: Vec<_> = panel.slots().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn renders_bottom_row_per_column() {
        let ps = players(&[3, 11]);
        let mut panel = LifePanel::new(ps).unwrap();
        panel.refresh();

        let area = Rect::new(0, 0, 24, 2);
        let mut buf = Buffer::empty(area);
        (&panel).render(area, &mut buf);

        assert_eq!(row(&buf, 0, 0..24).trim(), "");
        assert_eq!(row(&buf, 1, 0..12).trim(), "Life:   3");
        assert_eq!(row(&buf, 1, 12..24).trim(), "Life:  11");
    }

    #[test]
    fn empty_panel_renders_nothing() {
        let panel = LifePanel::<ArcadePlayer>::new(Vec::new()).unwrap();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        (&panel).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
