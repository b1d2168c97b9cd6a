//! Roster comparison over a recorded tick log.
//!
//! Feeds the same log to every requested bot, fans the runs out over rayon,
//! and writes the artifacts a roster review needs: per-tick moves as CSV,
//! per-bot move profiles as CSV, and a full summary as pretty JSON.

use crate::bots::bot_ids;
use crate::grid::Move;
use crate::runner::{replay_ticks, RunArtifact, RunMetrics};
use crate::snapshot::TickSnapshot;
use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Debug)]
pub struct ReplayConfig {
    pub bots: Vec<String>,
    pub ticks: Vec<TickSnapshot>,
    pub out_dir: PathBuf,
    pub jobs: Option<usize>,
}

/// Aggregate view of one bot's behavior over the log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BotProfile {
    pub bot_id: String,
    pub tick_count: usize,
    pub idle_ticks: usize,
    pub north_ticks: usize,
    pub south_ticks: usize,
    pub east_ticks: usize,
    pub west_ticks: usize,
    pub idle_share: f64,
    /// Share of ticks where this bot picked the same move as the first bot
    /// in the run (1.0 for the first bot itself).
    pub agreement_with_lead: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayReport {
    pub generated_unix_s: u64,
    pub tick_count: usize,
    pub jobs: Option<usize>,
    pub bots: Vec<String>,
    pub profiles: Vec<BotProfile>,
}

pub fn resolve_bots(input: Option<&str>) -> Result<Vec<String>> {
    match input {
        None => Ok(bot_ids().iter().map(|id| (*id).to_string()).collect()),
        Some(raw) => {
            let mut bots = Vec::new();
            for token in raw.split(',') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                bots.push(token.to_string());
            }
            if bots.is_empty() {
                return Err(anyhow!("--bots resolved to empty list"));
            }
            Ok(bots)
        }
    }
}

pub fn run_replay(config: ReplayConfig) -> Result<ReplayReport> {
    if config.ticks.is_empty() {
        return Err(anyhow!("replay requires at least one tick"));
    }
    if config.bots.is_empty() {
        return Err(anyhow!("replay requires at least one bot"));
    }
    if let Some(jobs) = config.jobs {
        if jobs == 0 {
            return Err(anyhow!("replay --jobs must be >= 1 when provided"));
        }
    }
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed creating {}", config.out_dir.display()))?;

    let run_one = |bot_id: &String| -> Result<RunArtifact> {
        replay_ticks(bot_id, &config.ticks)
            .with_context(|| format!("replay failed for bot={bot_id}"))
    };

    let run_results: Vec<Result<RunArtifact>> = if let Some(jobs) = config.jobs {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build rayon threadpool")?;
        pool.install(|| config.bots.par_iter().map(run_one).collect())
    } else {
        config.bots.par_iter().map(run_one).collect()
    };

    let mut artifacts = Vec::with_capacity(run_results.len());
    for result in run_results {
        artifacts.push(result?);
    }

    let lead_moves = artifacts
        .first()
        .map(|artifact| artifact.moves.clone())
        .unwrap_or_default();
    let profiles: Vec<BotProfile> = artifacts
        .iter()
        .map(|artifact| profile_of(&artifact.metrics, &artifact.moves, &lead_moves))
        .collect();

    write_moves_csv(&config.out_dir.join("moves.csv"), &artifacts)?;
    write_profiles_csv(&config.out_dir.join("profiles.csv"), &profiles)?;

    let report = ReplayReport {
        generated_unix_s: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
        tick_count: config.ticks.len(),
        jobs: config.jobs,
        bots: config.bots,
        profiles,
    };

    let report_path = config.out_dir.join("summary.json");
    fs::write(
        &report_path,
        serde_json::to_vec_pretty(&report).context("failed to serialize summary json")?,
    )
    .with_context(|| format!("failed writing {}", report_path.display()))?;

    Ok(report)
}

fn profile_of(metrics: &RunMetrics, moves: &[Move], lead: &[Move]) -> BotProfile {
    let agreeing = moves
        .iter()
        .zip(lead.iter())
        .filter(|(mine, theirs)| mine == theirs)
        .count();
    let ticks = metrics.tick_count.max(1);
    BotProfile {
        bot_id: metrics.bot_id.clone(),
        tick_count: metrics.tick_count,
        idle_ticks: metrics.idle_ticks,
        north_ticks: metrics.north_ticks,
        south_ticks: metrics.south_ticks,
        east_ticks: metrics.east_ticks,
        west_ticks: metrics.west_ticks,
        idle_share: metrics.idle_ticks as f64 / ticks as f64,
        agreement_with_lead: agreeing as f64 / ticks as f64,
    }
}

fn write_moves_csv(path: &Path, artifacts: &[RunArtifact]) -> Result<()> {
    let mut csv = String::from("bot_id,tick,move\n");
    for artifact in artifacts {
        for (tick, mv) in artifact.moves.iter().enumerate() {
            csv.push_str(&format!(
                "{},{},{}\n",
                artifact.metrics.bot_id,
                tick,
                mv.as_str()
            ));
        }
    }
    fs::write(path, csv).with_context(|| format!("failed writing {}", path.display()))
}

fn write_profiles_csv(path: &Path, profiles: &[BotProfile]) -> Result<()> {
    let mut csv = String::from(
        "bot_id,tick_count,idle_ticks,north_ticks,south_ticks,east_ticks,west_ticks,idle_share,agreement_with_lead\n",
    );
    for profile in profiles {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{:.4},{:.4}\n",
            profile.bot_id,
            profile.tick_count,
            profile.idle_ticks,
            profile.north_ticks,
            profile.south_ticks,
            profile.east_ticks,
            profile.west_ticks,
            profile.idle_share,
            profile.agreement_with_lead
        ));
    }
    fs::write(path, csv).with_context(|| format!("failed writing {}", path.display()))
}
