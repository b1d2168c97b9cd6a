pub mod bots;
pub mod error;
pub mod grid;
pub mod replay;
pub mod runner;
pub mod snapshot;
pub mod util;

pub use error::SnapshotError;
pub use grid::{Entity, Move, Position};
pub use snapshot::{TickSnapshot, World};
