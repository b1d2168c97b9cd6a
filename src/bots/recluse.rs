//! p1000-recluse: maximum-caution survivor.
//!
//! Treats every foe inside the threat radius as a predator, killable or not.
//! A "prey" that looks free today is still a bot that can pick up a gold
//! coin mid-step and flip the strength comparison; the recluse refuses that
//! bet and only races coins through tiles no other bot can contest.

use crate::bots::common::{approach, move_options, rank_coins, safe_options, THREAT_RADIUS};
use crate::bots::CoinBot;
use crate::grid::{Entity, Move};
use crate::snapshot::World;

pub struct RecluseBot;

impl RecluseBot {
    pub fn new() -> Self {
        Self
    }

    fn nearby_foes(world: &World) -> Vec<Entity> {
        world
            .foes
            .iter()
            .filter(|foe| world.me.pos.taxicab_distance(foe.pos) < THREAT_RADIUS)
            .copied()
            .collect()
    }
}

impl CoinBot for RecluseBot {
    fn id(&self) -> &'static str {
        "p1000-recluse"
    }

    fn description(&self) -> &'static str {
        "Maximum-caution survivor that gives every nearby bot a wide berth."
    }

    fn next_move(&self, world: &World) -> Move {
        let options = move_options(world.me.pos, world.arena_length);
        let avoid = Self::nearby_foes(world);
        let safe = safe_options(&options, &avoid);
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
