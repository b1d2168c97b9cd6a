use core::fmt;

/// Validation failures for a raw tick snapshot. A malformed snapshot aborts
/// the tick's decision; it is never coerced into a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    ArenaLengthNotPositive {
        arena_length: i32,
    },
    SelfOutOfBounds {
        x: i32,
        y: i32,
        arena_length: i32,
    },
    FoeOutOfBounds {
        index: usize,
        x: i32,
        y: i32,
        arena_length: i32,
    },
    CoinOutOfBounds {
        index: usize,
        x: i32,
        y: i32,
        arena_length: i32,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArenaLengthNotPositive { arena_length } => {
                write!(f, "arena length must be positive: got {arena_length}")
            }
            Self::SelfOutOfBounds { x, y, arena_length } => write!(
                f,
                "self position ({x}, {y}) outside {arena_length}x{arena_length} arena"
            ),
            Self::FoeOutOfBounds {
                index,
                x,
                y,
                arena_length,
            } => write!(
                f,
                "foe #{index} at ({x}, {y}) outside {arena_length}x{arena_length} arena"
            ),
            Self::CoinOutOfBounds {
                index,
                x,
                y,
                arena_length,
            } => write!(
                f,
                "coin #{index} at ({x}, {y}) outside {arena_length}x{arena_length} arena"
            ),
        }
    }
}

impl std::error::Error for SnapshotError {}
