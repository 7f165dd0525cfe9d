pub mod lives;

pub use lives::{DemoAction, LivesDemo};
