pub mod formatter;
pub mod life_panel;
pub mod player;
pub mod roster;  // Player line-up config
