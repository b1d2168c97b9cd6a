//! Shared decision stages used by every bot in the roster.
//!
//! The per-tick pipeline is: enumerate candidate moves, classify nearby foes,
//! filter candidates for safety, rank coins by how winnable the race to each
//! one is, then pick. Bots differ in how they compose these stages, not in
//! the stages themselves.

use crate::grid::{can_kill, rank_by_proximity, Entity, Move, Position};
use crate::snapshot::World;
use std::cmp::Reverse;

/// Foes at taxicab distance >= this can neither reach us nor be reached
/// within the one-step lookahead horizon and are ignored entirely.
pub const THREAT_RADIUS: i32 = 3;

/// A move label paired with the tile it lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOption {
    pub mv: Move,
    pub tile: Position,
}

/// Nearby foes split by what a collision would mean for us.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThreatReport {
    /// Foes a collision with is lethal or a mutual loss. Unordered.
    pub predators: Vec<Entity>,
    /// Foes we kill on collision, sorted descending by strength (richer
    /// prey first; ties keep input order).
    pub prey: Vec<Entity>,
}

/// The in-bounds subset of this tick's five candidate moves, in the fixed
/// tie-break order {none, north, south, east, west}.
pub fn move_options(me: Position, arena_length: i32) -> Vec<MoveOption> {
    Move::ALL
        .iter()
        .zip(me.adjacent_tiles())
        .filter(|(_, tile)| tile.is_in_bounds(arena_length))
        .map(|(&mv, tile)| MoveOption { mv, tile })
        .collect()
}

/// Partitions foes within [`THREAT_RADIUS`] into predators and prey.
/// Equal strength is never prey: a collision destroys both bots.
pub fn classify_foes(me: Entity, foes: &[Entity]) -> ThreatReport {
    let mut report = ThreatReport::default();
    for foe in foes {
        if me.pos.taxicab_distance(foe.pos) >= THREAT_RADIUS {
            continue;
        }
        if can_kill(me.strength, foe.strength) {
            report.prey.push(*foe);
        } else {
            report.predators.push(*foe);
        }
    }
    report.prey.sort_by_key(|foe| Reverse(foe.strength));
    report
}

/// Drops every option a predator could collide with next tick: tiles a
/// predator occupies or could step onto.
///
/// If that leaves nothing, the rule is relaxed to allow tiles a predator
/// currently occupies: if both bots step toward each other they pass through
/// harmlessly, since only co-location after both moves resolve counts as a
/// collision. Tiles merely adjacent to a predator stay excluded. The result
/// may still be empty; callers fall back to [`Move::None`].
pub fn safe_options(options: &[MoveOption], predators: &[Entity]) -> Vec<MoveOption> {
    let strict: Vec<MoveOption> = options
        .iter()
        .filter(|option| {
            predators.iter().all(|predator| {
                option.tile != predator.pos && !option.tile.is_adjacent_to(predator.pos)
            })
        })
        .copied()
        .collect();
    if !strict.is_empty() {
        return strict;
    }

    options
        .iter()
        .filter(|option| {
            predators
                .iter()
                .all(|predator| !option.tile.is_adjacent_to(predator.pos))
        })
        .copied()
        .collect()
}

/// How many agents are at least as close to `coin` as we are: our 0-indexed
/// position in the proximity ranking of all agents around the coin. Self is
/// listed first and the ranking is stable, so we win exact distance ties.
pub fn competitive_rank(coin: Position, world: &World) -> usize {
    let ranked = rank_by_proximity(coin, &world.agents());
    ranked
        .iter()
        .position(|agent| agent.pos == world.me.pos)
        .unwrap_or(ranked.len())
}

/// Coins ordered by how winnable the race to each one is: ascending
/// competitive rank, then higher face value (gold beats normal), then
/// smaller taxicab distance from us. Stable throughout, so the order is
/// fully deterministic. Index 0 is the current target; the list may be
/// empty.
pub fn rank_coins(world: &World) -> Vec<Entity> {
    let mut keyed: Vec<(usize, Entity)> = world
        .coins
        .iter()
        .map(|&coin| (competitive_rank(coin.pos, world), coin))
        .collect();
    keyed.sort_by_key(|&(rank, coin)| {
        (
            rank,
            Reverse(coin.strength),
            world.me.pos.taxicab_distance(coin.pos),
        )
    });
    keyed.into_iter().map(|(_, coin)| coin).collect()
}

/// The safe option that moves us closest to `target`: minimum taxicab
/// distance, ties broken by the squared-Euclidean score for more natural
/// diagonal-ish approach, remaining ties by option order (first wins).
pub fn approach(options: &[MoveOption], target: Position) -> Option<Move> {
    let mut best: Option<(i32, i64, Move)> = None;
    for option in options {
        let distance = option.tile.taxicab_distance(target);
        let score = option.tile.proximity_score(target);
        let better = match best {
            None => true,
            Some((best_distance, best_score, _)) => {
                distance < best_distance || (distance == best_distance && score < best_score)
            }
        };
        if better {
            best = Some((distance, score, option.mv));
        }
    }
    best.map(|(_, _, mv)| mv)
}
