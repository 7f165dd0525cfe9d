pub mod game;

pub use game::{DemoAction, LivesDemo};
