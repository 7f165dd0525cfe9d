//! Text formatting strategies for the life panel
use crate::core::player::Player;

/// Turns a player's state into the text shown in its slot.
pub type LifeFormatter<P> = Box<dyn Fn(&P) -> String>;

const MAX_HEARTS: u32 = 10;

/// `"Life: "` followed by the life count right-aligned in three columns.
pub fn default_life_format<P: Player + ?Sized>(player: &P) -> String {
    format!("Life: {:>3}", player.lives())
}

/// Built-in formatters the host can cycle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FormatterPreset {
    #[default]
    Default,
    Hearts,
    Compact,
}

impl FormatterPreset {
    pub fn next(self) -> Self {
        match self {
            FormatterPreset::Default => FormatterPreset::Hearts,
            FormatterPreset::Hearts => FormatterPreset::Compact,
            FormatterPreset::Compact => FormatterPreset::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatterPreset::Default => "default",
            FormatterPreset::Hearts => "hearts",
            FormatterPreset::Compact => "compact",
        }
    }

    pub fn build<P: Player + 'static>(self) -> LifeFormatter<P> {
        match self {
            FormatterPreset::Default => Box::new(|p: &P| default_life_format(p)),
            FormatterPreset::Hearts => Box::new(|p: &P| {
                let lives = p.lives();
                let shown = lives.min(MAX_HEARTS);
                let mut text = "♥".repeat(shown as usize);
                if lives > MAX_HEARTS {
                    text.push_str(&format!("+{}", lives - MAX_HEARTS));
                }
                text
            }),
            FormatterPreset::Compact => Box::new(|p: &P| format!("L={}", p.lives())),
        }
    }
}
