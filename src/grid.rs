//! Grid value types and geometry primitives.
//!
//! Everything here is integer math on a square arena. Distances come in two
//! flavors: taxicab for all ranking and adjacency decisions, and a squared
//! Euclidean score used only as a tie-breaker (ordering is all that matters,
//! so the square root is never taken).

use serde::{Deserialize, Serialize};

/// A coordinate pair on the arena grid. May sit outside the arena (candidate
/// tiles at the edge do); use [`Position::is_in_bounds`] before acting on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Taxicab (Manhattan) distance: the grid-native movement cost.
    pub fn taxicab_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Squared Euclidean distance. Preserves the ordering of the true
    /// Euclidean distance, which is all any caller compares against.
    pub fn proximity_score(self, other: Position) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// One step apart on the grid (diagonals are two steps).
    pub fn is_adjacent_to(self, other: Position) -> bool {
        self.taxicab_distance(other) == 1
    }

    /// Both axes within `[0, arena_length)`.
    pub fn is_in_bounds(self, arena_length: i32) -> bool {
        0 <= self.x && self.x < arena_length && 0 <= self.y && self.y < arena_length
    }

    /// The five tiles reachable this tick, in the fixed order
    /// {self, north, south, east, west}. The order is load-bearing: it is
    /// the tie-break preference for move selection, paired 1:1 with
    /// [`Move::ALL`].
    pub fn adjacent_tiles(self) -> [Position; 5] {
        [
            self,
            Position::new(self.x, self.y - 1),
            Position::new(self.x, self.y + 1),
            Position::new(self.x + 1, self.y),
            Position::new(self.x - 1, self.y),
        ]
    }
}

/// A positioned thing with a strength: a bot (strength = held coins) or a
/// coin (strength = face value). Rebuilt fresh from the snapshot every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub pos: Position,
    pub strength: u32,
}

impl Entity {
    pub fn new(strength: u32, x: i32, y: i32) -> Self {
        Self {
            pos: Position::new(x, y),
            strength,
        }
    }
}

/// Strict kill predicate: the defender dies iff it is strictly weaker.
/// Equal strength is a mutual loss and counts as dangerous for both sides.
pub fn can_kill(attacker_strength: u32, defender_strength: u32) -> bool {
    defender_strength < attacker_strength
}

/// Entities sorted ascending by taxicab distance to `origin`. The sort is
/// stable, so equally distant entities keep their input order.
pub fn rank_by_proximity(origin: Position, entities: &[Entity]) -> Vec<Entity> {
    let mut ranked = entities.to_vec();
    ranked.sort_by_key(|entity| origin.taxicab_distance(entity.pos));
    ranked
}

/// One of the five discrete per-tick moves. Declaration order doubles as the
/// tie-break order everywhere moves are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    None,
    North,
    South,
    East,
    West,
}

impl Move {
    /// All moves in tie-break order, paired 1:1 with
    /// [`Position::adjacent_tiles`].
    pub const ALL: [Move; 5] = [Move::None, Move::North, Move::South, Move::East, Move::West];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Move::None => (0, 0),
            Move::North => (0, -1),
            Move::South => (0, 1),
            Move::East => (1, 0),
            Move::West => (-1, 0),
        }
    }

    pub fn apply(self, from: Position) -> Position {
        let (dx, dy) = self.offset();
        Position::new(from.x + dx, from.y + dy)
    }

    /// The label the game host expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Move::None => "none",
            Move::North => "north",
            Move::South => "south",
            Move::East => "east",
            Move::West => "west",
        }
    }
}
