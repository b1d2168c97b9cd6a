//! p1000-forager: prey-blind coin racer.
//!
//! Same safety filter as the pouncer, but weaker bots are scenery: the
//! forager never spends a tick circling a kill, it just races coins. Useful
//! as a baseline for how much the pounce step is actually worth.

use crate::bots::common::{approach, classify_foes, move_options, rank_coins, safe_options};
use crate::bots::CoinBot;
use crate::grid::Move;
use crate::snapshot::World;

pub struct ForagerBot;

impl ForagerBot {
    pub fn new() -> Self {
        Self
    }
}

impl CoinBot for ForagerBot {
    fn id(&self) -> &'static str {
        "p1000-forager"
    }

    fn description(&self) -> &'static str {
        "Pure coin racer: dodges predators, never detours for a kill."
    }

    fn next_move(&self, world: &World) -> Move {
        let options = move_options(world.me.pos, world.arena_length);
        let threats = classify_foes(world.me, &world.foes);
        let safe = safe_options(&options, &threats.predators);
        if safe.is_empty() {
            return Move::None;
        }

        let coins = rank_coins(world);
        if let Some(target) = coins.first() {
            if let Some(option) = safe.iter().find(|option| option.tile == target.pos) {
                return option.mv;
            }
            if let Some(mv) = approach(&safe, target.pos) {
                return mv;
            }
        }

        safe.first().map(|option| option.mv).unwrap_or(Move::None)
    }
}
