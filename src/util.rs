use crate::snapshot::TickSnapshot;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

pub fn parse_tick_json(raw: &str) -> Result<TickSnapshot> {
    serde_json::from_str(raw.trim()).context("invalid tick snapshot json")
}

/// Reads a JSONL tick log: one snapshot per line, blank lines and `#`
/// comments skipped.
pub fn parse_ticks_file(path: &Path) -> Result<Vec<TickSnapshot>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed reading tick log {}", path.display()))?;
    let mut ticks = Vec::new();
    for (line_no, line) in data.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tick = serde_json::from_str(trimmed).with_context(|| {
            format!("invalid tick snapshot at {}:{}", path.display(), line_no + 1)
        })?;
        ticks.push(tick);
    }
    if ticks.is_empty() {
        return Err(anyhow!("tick log {} had no snapshots", path.display()));
    }
    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tick_json_accepts_host_payload() {
        let tick = parse_tick_json(
            r#"{"self":{"strength":0,"x":2,"y":2,"arena_length":5},"coins":[[2,1]]}"#,
        )
        .unwrap();
        assert_eq!(tick.coins, vec![(2, 1)]);
    }

    #[test]
    fn parse_tick_json_rejects_garbage() {
        assert!(parse_tick_json("not json").is_err());
    }
}
