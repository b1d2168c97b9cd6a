pub mod common;
pub mod forager;
pub mod pouncer;
pub mod recluse;

use crate::grid::Move;
use crate::snapshot::World;

/// One decision brain. Implementations are stateless: `next_move` is a pure
/// function of the tick's validated snapshot, so two calls with the same
/// world always return the same move.
pub trait CoinBot {
    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn next_move(&self, world: &World) -> Move;
}

pub fn bot_ids() -> Vec<&'static str> {
    vec!["p1000-pouncer", "p1000-forager", "p1000-recluse"]
}

pub fn describe_bots() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "p1000-pouncer",
            "Competitive coin chaser that ambushes weaker bots along the way.",
        ),
        (
            "p1000-forager",
            "Pure coin racer: dodges predators, never detours for a kill.",
        ),
        (
            "p1000-recluse",
            "Maximum-caution survivor that gives every nearby bot a wide berth.",
        ),
    ]
}

pub fn create_bot(id: &str) -> Option<Box<dyn CoinBot>> {
    match id {
        "p1000-pouncer" => Some(Box::new(pouncer::PouncerBot::new())),
        "p1000-forager" => Some(Box::new(forager::ForagerBot::new())),
        "p1000-recluse" => Some(Box::new(recluse::RecluseBot::new())),
        _ => None,
    }
}
