use crate::bots::{create_bot, CoinBot};
use crate::grid::Move;
use crate::snapshot::TickSnapshot;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Per-run move accounting for one bot over one tick log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunMetrics {
    pub bot_id: String,
    pub tick_count: usize,
    pub idle_ticks: usize,
    pub north_ticks: usize,
    pub south_ticks: usize,
    pub east_ticks: usize,
    pub west_ticks: usize,
}

impl RunMetrics {
    fn from_moves(bot_id: &str, moves: &[Move]) -> Self {
        let count = |wanted: Move| moves.iter().filter(|mv| **mv == wanted).count();
        Self {
            bot_id: bot_id.to_string(),
            tick_count: moves.len(),
            idle_ticks: count(Move::None),
            north_ticks: count(Move::North),
            south_ticks: count(Move::South),
            east_ticks: count(Move::East),
            west_ticks: count(Move::West),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunArtifact {
    pub metrics: RunMetrics,
    pub moves: Vec<Move>,
}

/// One tick, end to end: validate the snapshot and ask the bot. Validation
/// failures surface as errors, never as a move.
pub fn decide(bot_id: &str, tick: &TickSnapshot) -> Result<Move> {
    let bot = create_bot(bot_id).ok_or_else(|| anyhow!("unknown bot '{bot_id}'"))?;
    let world = tick
        .validate()
        .context("rejecting malformed tick snapshot")?;
    Ok(bot.next_move(&world))
}

/// Replays a recorded tick log through one bot, tick by tick.
pub fn replay_ticks(bot_id: &str, ticks: &[TickSnapshot]) -> Result<RunArtifact> {
    let bot = create_bot(bot_id).ok_or_else(|| anyhow!("unknown bot '{bot_id}'"))?;
    replay_ticks_instance(bot.as_ref(), ticks)
}

pub fn replay_ticks_instance(bot: &dyn CoinBot, ticks: &[TickSnapshot]) -> Result<RunArtifact> {
    if ticks.is_empty() {
        return Err(anyhow!("tick log is empty"));
    }

    let mut moves = Vec::with_capacity(ticks.len());
    for (index, tick) in ticks.iter().enumerate() {
        let world = tick
            .validate()
            .with_context(|| format!("malformed snapshot at tick {index}"))?;
        moves.push(bot.next_move(&world));
    }

    Ok(RunArtifact {
        metrics: RunMetrics::from_moves(bot.id(), &moves),
        moves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SelfSnapshot;

    fn tick(coins: Vec<(i32, i32)>) -> TickSnapshot {
        TickSnapshot {
            agent: SelfSnapshot {
                strength: 0,
                x: 2,
                y: 2,
                arena_length: 5,
            },
            others: Vec::new(),
            coins,
        }
    }

    #[test]
    fn decide_rejects_unknown_bot() {
        let err = decide("p1000-ghost", &tick(vec![])).unwrap_err();
        assert!(err.to_string().contains("unknown bot"));
    }

    #[test]
    fn decide_surfaces_validation_errors() {
        let mut bad = tick(vec![]);
        bad.agent.x = 99;
        assert!(decide("p1000-pouncer", &bad).is_err());
    }

    #[test]
    fn replay_counts_every_move() {
        let ticks = vec![tick(vec![(2, 1)]), tick(vec![(3, 2)]), tick(vec![])];
        let artifact = replay_ticks("p1000-pouncer", &ticks).unwrap();
        assert_eq!(artifact.metrics.tick_count, 3);
        assert_eq!(artifact.moves, vec![Move::North, Move::East, Move::None]);
        assert_eq!(artifact.metrics.north_ticks, 1);
        assert_eq!(artifact.metrics.east_ticks, 1);
        assert_eq!(artifact.metrics.idle_ticks, 1);
    }

    #[test]
    fn replay_refuses_empty_logs() {
        assert!(replay_ticks("p1000-pouncer", &[]).is_err());
    }
}
