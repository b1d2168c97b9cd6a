//! p1000-pouncer: the canonical brain.
//!
//! Priority chain per tick:
//! - Step onto the top-ranked coin if a safe option lands on it
//! - Else pounce: step next to the richest killable foe in range
//! - Else advance toward the top-ranked coin through safe tiles
//! - Else hold the first safe option (pure survival when no coins exist)

use crate::bots::common::{approach, classify_foes, move_options, rank_coins, safe_options};
use crate::bots::CoinBot;
use crate::grid::Move;
use crate::snapshot::World;

pub struct PouncerBot;

impl PouncerBot {
    pub fn new() -> Self {
        Self
    }
}

impl CoinBot for PouncerBot {
    fn id(&self) -> &'static str {
        "p1000-pouncer"
    }

    fn description(&self) -> &'static str {
        "Competitive coin chaser that ambushes weaker bots along the way."
    }

    fn next_move(&self, world: &World) -> Move {
        let options = move_options(world.me.pos, world.arena_length);
        let threats = classify_foes(world.me, &world.foes);
        let safe = safe_options(&options, &threats.predators);
        if safe.is_empty() {
            // Even the relaxed filter found nothing: hold position.
            return Move::None;
        }

        let coins = rank_coins(world);
        if let Some(target) = coins.first() {
            if let Some(option) = safe.iter().find(|option| option.tile == target.pos) {
                return option.mv;
            }
        }

        // Prey are richest-first; option order prefers an ambush (staying
        // adjacent) over walking around to the far side.
        for prey in &threats.prey {
            if let Some(option) = safe
                .iter()
                .find(|option| option.tile.is_adjacent_to(prey.pos))
            {
                return option.mv;
            }
        }

        if let Some(target) = coins.first() {
            if let Some(mv) = approach(&safe, target.pos) {
                return mv;
            }
        }

        safe.first().map(|option| option.mv).unwrap_or(Move::None)
    }
}
