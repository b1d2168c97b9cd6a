use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use koth_autopilot::bots::{bot_ids, create_bot, describe_bots};
use koth_autopilot::replay::{resolve_bots, run_replay, ReplayConfig};
use koth_autopilot::runner::decide;
use koth_autopilot::util::{parse_tick_json, parse_ticks_file};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "koth-autopilot")]
#[command(
    about = "Decision lab for a grid king-of-the-hill coin bot: per-tick moves and log replay"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available bots
    ListBots,
    /// Decide one tick: read a snapshot (file or stdin) and print the move
    Decide {
        #[arg(long, default_value = "p1000-pouncer")]
        bot: String,
        /// Snapshot JSON file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Replay a JSONL tick log through one or more bots and compare them
    Replay {
        /// Comma-separated bot ids; defaults to the whole roster
        #[arg(long)]
        bots: Option<String>,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[arg(long)]
        jobs: Option<usize>,
    },
}

fn main() -> Result<()> {
    let Cli { command } = Cli::parse();

    match command {
        Commands::ListBots => {
            for (id, description) in describe_bots() {
                println!("{id:16} {description}");
            }
        }
        Commands::Decide { bot, input } => {
            if create_bot(&bot).is_none() {
                let available = bot_ids().join(", ");
                return Err(anyhow!("unknown bot '{bot}'. available: {available}"));
            }
            let raw = match input {
                Some(path) => fs::read_to_string(&path)?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            let tick = parse_tick_json(&raw)?;
            let mv = decide(&bot, &tick)?;

            println!("bot={bot}");
            println!("arena={}", tick.agent.arena_length);
            println!("others={}", tick.others.len());
            println!("coins={}", tick.coins.len());
            println!("move={}", mv.as_str());
        }
        Commands::Replay {
            bots,
            input,
            out_dir,
            jobs,
        } => {
            let bots = resolve_bots(bots.as_deref())?;
            let ticks = parse_ticks_file(&input)?;
            let out_dir =
                out_dir.unwrap_or_else(|| PathBuf::from(format!("replays/{}", timestamp_suffix())));

            let report = run_replay(ReplayConfig {
                bots,
                ticks,
                out_dir: out_dir.clone(),
                jobs,
            })?;

            println!("input={}", input.display());
            println!("ticks={}", report.tick_count);
            println!(
                "jobs={}",
                report
                    .jobs
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "auto".to_string())
            );
            println!("out_dir={}", out_dir.display());
            println!("profiles:");
            for profile in &report.profiles {
                println!(
                    "  {}  idle={:.0}% n={} s={} e={} w={} agreement={:.0}%",
                    profile.bot_id,
                    profile.idle_share * 100.0,
                    profile.north_ticks,
                    profile.south_ticks,
                    profile.east_ticks,
                    profile.west_ticks,
                    profile.agreement_with_lead * 100.0,
                );
            }
        }
    }

    Ok(())
}

fn timestamp_suffix() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{now}")
}
