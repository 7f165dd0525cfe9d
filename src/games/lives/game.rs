use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};

use crate::core::formatter::FormatterPreset;
use crate::core::life_panel::LifePanel;
use crate::core::player::{ArcadePlayer, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    Continue,
    Quit,
}

/// Hosts a `LifePanel` and lets the keyboard poke at player state.
pub struct LivesDemo {
    players: Vec<Rc<ArcadePlayer>>,
    panel: LifePanel<ArcadePlayer>,
    selected: usize,
    preset: FormatterPreset,
}

impl LivesDemo {
    pub fn new(players: Vec<Rc<ArcadePlayer>>, preset: FormatterPreset) -> Result<Self> {
        let mut panel = LifePanel::new(players.clone())?;
        panel.set_formatter(preset.build::<ArcadePlayer>());
        panel.refresh();
        Ok(Self { players, panel, selected: 0, preset })
    }

    pub fn panel(&self) -> &LifePanel<ArcadePlayer> {
        &self.panel
    }

    pub fn selected(&self) -> Option<&Rc<ArcadePlayer>> {
        self.players.get(self.selected)
    }

    pub fn preset(&self) -> FormatterPreset {
        self.preset
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_key(key) == DemoAction::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DemoAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return DemoAction::Quit,
            KeyCode::Left => self.selected = self.selected.saturating_sub(1),
            KeyCode::Right => {
                self.selected = (self.selected + 1).min(self.players.len().saturating_sub(1))
            }
            KeyCode::Char('f') => {
                self.preset = self.preset.next();
                self.panel.set_formatter(self.preset.build::<ArcadePlayer>());
                tracing::info!(formatter = self.preset.label(), "formatter switched");
            }
            code => {
                let Some(player) = self.players.get(self.selected) else {
                    return DemoAction::Continue;
                };
                match code {
                    KeyCode::Char('-') | KeyCode::Char('k') => player.lose_life(),
                    KeyCode::Char('+') | KeyCode::Char('=') => player.add_life(),
                    KeyCode::Char('d') => player.kill(),
                    KeyCode::Char('r') => player.revive(),
                    _ => return DemoAction::Continue,
                }
                tracing::info!(
                    player = player.name(),
                    lives = player.lives(),
                    alive = player.is_alive(),
                    "player changed"
                );
            }
        }

        self.panel.refresh();
        DemoAction::Continue
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Min(4), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" LIFEPANEL ")
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let block = Block::default()
            .title(format!(" LIVES [{}] ", self.preset.label()))
            .borders(Borders::ALL);
        let inner = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);
        f.render_widget(&self.panel, inner);

        let selected = self.selected().map(|p| p.name()).unwrap_or("-");
        f.render_widget(
            Paragraph::new(format!(
                "{}  [←/→] Select  [-] Lose  [+] Gain  [D] Kill  [R] Revive  [F] Format  [Q] Quit",
                selected
            ))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
            chunks[2],
        );
    }
}
