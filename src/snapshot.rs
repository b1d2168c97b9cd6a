//! Raw tick input from the game host and its validated form.
//!
//! The host boundary carries JSON: one [`TickSnapshot`] per tick. Nothing in
//! it is trusted until [`TickSnapshot::validate`] turns it into a [`World`]
//! of typed entities. Bots only ever see a `World`.

use crate::error::SnapshotError;
use crate::grid::{Entity, Position};
use serde::{Deserialize, Serialize};

/// Face value of the distinguished first coin in each tick's input.
pub const GOLD_COIN_VALUE: u32 = 5;
/// Face value of every other coin.
pub const NORMAL_COIN_VALUE: u32 = 2;

/// The controlled agent's slice of the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfSnapshot {
    pub strength: u32,
    pub x: i32,
    pub y: i32,
    pub arena_length: i32,
}

/// One full observable tick as the host hands it over. `others` entries are
/// (strength, x, y) triples; `coins` entries are (x, y) pairs, gold first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSnapshot {
    #[serde(rename = "self")]
    pub agent: SelfSnapshot,
    #[serde(default)]
    pub others: Vec<(u32, i32, i32)>,
    #[serde(default)]
    pub coins: Vec<(i32, i32)>,
}

/// A validated tick: typed entities, in-bounds by construction. Ephemeral,
/// rebuilt every tick, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    pub arena_length: i32,
    pub me: Entity,
    pub foes: Vec<Entity>,
    pub coins: Vec<Entity>,
}

impl TickSnapshot {
    /// Checks the snapshot against the arena and wraps everything into typed
    /// entities. Coin values are assigned here: the first coin is gold, the
    /// rest are normal. Strengths cannot be negative by construction (serde
    /// rejects negative numbers for `u32` fields).
    pub fn validate(&self) -> Result<World, SnapshotError> {
        let arena_length = self.agent.arena_length;
        if arena_length <= 0 {
            return Err(SnapshotError::ArenaLengthNotPositive { arena_length });
        }

        let me = Entity::new(self.agent.strength, self.agent.x, self.agent.y);
        if !me.pos.is_in_bounds(arena_length) {
            return Err(SnapshotError::SelfOutOfBounds {
                x: self.agent.x,
                y: self.agent.y,
                arena_length,
            });
        }

        let mut foes = Vec::with_capacity(self.others.len());
        for (index, &(strength, x, y)) in self.others.iter().enumerate() {
            let foe = Entity::new(strength, x, y);
            if !foe.pos.is_in_bounds(arena_length) {
                return Err(SnapshotError::FoeOutOfBounds {
                    index,
                    x,
                    y,
                    arena_length,
                });
            }
            foes.push(foe);
        }

        let mut coins = Vec::with_capacity(self.coins.len());
        for (index, &(x, y)) in self.coins.iter().enumerate() {
            let value = if index == 0 {
                GOLD_COIN_VALUE
            } else {
                NORMAL_COIN_VALUE
            };
            let coin = Entity::new(value, x, y);
            if !coin.pos.is_in_bounds(arena_length) {
                return Err(SnapshotError::CoinOutOfBounds {
                    index,
                    x,
                    y,
                    arena_length,
                });
            }
            coins.push(coin);
        }

        Ok(World {
            arena_length,
            me,
            foes,
            coins,
        })
    }
}

impl World {
    /// Every agent on the board, self first. The order matters: proximity
    /// ranking is stable, so listing self first makes self win distance ties
    /// in the competitive coin ranking.
    pub fn agents(&self) -> Vec<Entity> {
        let mut agents = Vec::with_capacity(1 + self.foes.len());
        agents.push(self.me);
        agents.extend_from_slice(&self.foes);
        agents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(arena: i32, x: i32, y: i32) -> TickSnapshot {
        TickSnapshot {
            agent: SelfSnapshot {
                strength: 0,
                x,
                y,
                arena_length: arena,
            },
            others: Vec::new(),
            coins: Vec::new(),
        }
    }

    #[test]
    fn parses_host_json_with_defaults() {
        let raw = r#"{"self":{"strength":3,"x":1,"y":2,"arena_length":5}}"#;
        let tick: TickSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(tick.agent.strength, 3);
        assert!(tick.others.is_empty());
        assert!(tick.coins.is_empty());
    }

    #[test]
    fn rejects_negative_strength_at_the_serde_boundary() {
        let raw = r#"{"self":{"strength":-1,"x":1,"y":2,"arena_length":5}}"#;
        assert!(serde_json::from_str::<TickSnapshot>(raw).is_err());
    }

    #[test]
    fn gold_is_first_coin_only() {
        let mut tick = snapshot(5, 2, 2);
        tick.coins = vec![(0, 0), (1, 1), (2, 3)];
        let world = tick.validate().unwrap();
        assert_eq!(world.coins[0].strength, GOLD_COIN_VALUE);
        assert_eq!(world.coins[1].strength, NORMAL_COIN_VALUE);
        assert_eq!(world.coins[2].strength, NORMAL_COIN_VALUE);
    }

    #[test]
    fn validation_rejects_bad_arena_and_positions() {
        assert_eq!(
            snapshot(0, 0, 0).validate(),
            Err(SnapshotError::ArenaLengthNotPositive { arena_length: 0 })
        );
        assert_eq!(
            snapshot(5, 5, 2).validate(),
            Err(SnapshotError::SelfOutOfBounds {
                x: 5,
                y: 2,
                arena_length: 5
            })
        );

        let mut tick = snapshot(5, 2, 2);
        tick.others = vec![(1, 2, -1)];
        assert_eq!(
            tick.validate(),
            Err(SnapshotError::FoeOutOfBounds {
                index: 0,
                x: 2,
                y: -1,
                arena_length: 5
            })
        );

        let mut tick = snapshot(5, 2, 2);
        tick.coins = vec![(0, 0), (5, 5)];
        assert_eq!(
            tick.validate(),
            Err(SnapshotError::CoinOutOfBounds {
                index: 1,
                x: 5,
                y: 5,
                arena_length: 5
            })
        );
    }

    #[test]
    fn agents_lists_self_first() {
        let mut tick = snapshot(5, 2, 2);
        tick.others = vec![(4, 0, 0), (1, 4, 4)];
        let world = tick.validate().unwrap();
        let agents = world.agents();
        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0], world.me);
    }
}
