use anyhow::Result;
use koth_autopilot::bots::bot_ids;
use koth_autopilot::replay::{resolve_bots, run_replay, ReplayConfig};
use koth_autopilot::util::parse_ticks_file;
use std::fs;

const SAMPLE_LOG: &str = r#"# three ticks recorded from a 5x5 skirmish
{"self":{"strength":0,"x":2,"y":2,"arena_length":5},"coins":[[2,1]]}

{"self":{"strength":5,"x":2,"y":1,"arena_length":5},"others":[[9,0,0]],"coins":[[4,4],[0,4]]}
{"self":{"strength":5,"x":3,"y":2,"arena_length":5},"others":[[9,0,0],[1,3,3]]}
"#;

#[test]
fn replay_over_a_temp_log_produces_all_artifacts() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let log_path = tmp.path().join("ticks.jsonl");
    fs::write(&log_path, SAMPLE_LOG)?;

    let ticks = parse_ticks_file(&log_path)?;
    assert_eq!(ticks.len(), 3, "comment and blank lines must be skipped");

    let out_dir = tmp.path().join("out");
    let report = run_replay(ReplayConfig {
        bots: resolve_bots(None)?,
        ticks,
        out_dir: out_dir.clone(),
        jobs: None,
    })?;

    assert_eq!(report.tick_count, 3);
    assert_eq!(report.profiles.len(), bot_ids().len());
    let lead = &report.profiles[0];
    assert_eq!(lead.bot_id, bot_ids()[0]);
    assert!((lead.agreement_with_lead - 1.0).abs() < f64::EPSILON);
    for profile in &report.profiles {
        let total = profile.idle_ticks
            + profile.north_ticks
            + profile.south_ticks
            + profile.east_ticks
            + profile.west_ticks;
        assert_eq!(total, profile.tick_count, "bot={}", profile.bot_id);
    }

    assert!(out_dir.join("summary.json").exists());
    assert!(out_dir.join("moves.csv").exists());
    assert!(out_dir.join("profiles.csv").exists());

    let moves_csv = fs::read_to_string(out_dir.join("moves.csv"))?;
    // Header plus one row per bot per tick.
    assert_eq!(moves_csv.lines().count(), 1 + bot_ids().len() * 3);

    Ok(())
}

#[test]
fn replay_with_pinned_jobs_matches_auto_parallelism() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let log_path = tmp.path().join("ticks.jsonl");
    fs::write(&log_path, SAMPLE_LOG)?;
    let ticks = parse_ticks_file(&log_path)?;

    let auto = run_replay(ReplayConfig {
        bots: resolve_bots(Some("p1000-pouncer,p1000-recluse"))?,
        ticks: ticks.clone(),
        out_dir: tmp.path().join("auto"),
        jobs: None,
    })?;
    let pinned = run_replay(ReplayConfig {
        bots: resolve_bots(Some("p1000-pouncer,p1000-recluse"))?,
        ticks,
        out_dir: tmp.path().join("pinned"),
        jobs: Some(1),
    })?;

    assert_eq!(auto.profiles.len(), pinned.profiles.len());
    for (a, b) in auto.profiles.iter().zip(pinned.profiles.iter()) {
        assert_eq!(a.bot_id, b.bot_id);
        assert_eq!(a.idle_ticks, b.idle_ticks);
        assert_eq!(a.north_ticks, b.north_ticks);
        assert_eq!(a.south_ticks, b.south_ticks);
        assert_eq!(a.east_ticks, b.east_ticks);
        assert_eq!(a.west_ticks, b.west_ticks);
    }
    Ok(())
}

#[test]
fn bad_logs_are_rejected_with_context() -> Result<()> {
    let tmp = tempfile::tempdir()?;

    let empty = tmp.path().join("empty.jsonl");
    fs::write(&empty, "# nothing here\n\n")?;
    assert!(parse_ticks_file(&empty).is_err());

    let broken = tmp.path().join("broken.jsonl");
    fs::write(&broken, "{\"self\":{\"strength\":0}}\n")?;
    assert!(parse_ticks_file(&broken).is_err());

    Ok(())
}
