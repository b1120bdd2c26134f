pub mod game;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

pub use game::GameState;
pub use snake::{Direction, Snake};

/// Signed so the out-of-bounds check on the left/top edge stays a plain
/// comparison instead of an underflow dance.
pub type GridInt = i16;
pub type Coords = (GridInt, GridInt);
