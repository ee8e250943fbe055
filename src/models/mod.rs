pub mod game;
pub mod progress;

pub use game::*;
pub use progress::*;
