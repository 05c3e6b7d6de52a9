use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use slotgrid_core::{
    config::ConfigLoader, is_event_covered, IntervalModel, SlotGridConfig, Span,
    SubmissionCleaner,
};
use slotgrid_types::Slot;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(name = "slotgrid", author, version = "0.1.0", about = "Inspect and clean availability payloads")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(long, short, help = "Log level, overrides logging.level from the config")]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a field value and report what the editor would see
    Check {
        payload: PathBuf,
    },
    /// Clean a submitted field value against the configured event
    Clean {
        #[clap(long, short, default_value = "slotgrid.yaml")]
        config: PathBuf,

        #[clap(long, help = "Reject an empty submission")]
        required: bool,

        payload: PathBuf,
    },
    /// Show the merged availabilities and whether they cover the event
    Coverage {
        #[clap(long, short, default_value = "slotgrid.yaml")]
        config: PathBuf,

        payload: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is loaded before the logger so its level can be used.
    let config = match &cli.command {
        Commands::Check { .. } => None,
        Commands::Clean { config, .. } | Commands::Coverage { config, .. } => {
            Some(ConfigLoader::from_file(config).await?)
        }
    };

    let log_level_filter = match (&cli.log_level, &config) {
        (Some(level), _) => level.parse().unwrap_or(LevelFilter::Info),
        (None, Some(config)) => config.logging.level_filter()?,
        (None, None) => LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    match (cli.command, config) {
        (Commands::Check { payload }, _) => run_check(&payload).await,
        (Commands::Clean { required, payload, .. }, Some(config)) => {
            run_clean(&config, required, &payload).await
        }
        (Commands::Coverage { payload, .. }, Some(config)) => {
            run_coverage(&config, &payload).await
        }
        _ => anyhow::bail!("Command requires a configuration"),
    }
}

async fn read_payload(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read payload {}", path.display()))
}

async fn run_check(path: &Path) -> Result<()> {
    let model = IntervalModel::load(&read_payload(path).await?)?;
    let all_day = model.slots().iter().filter(|slot| slot.all_day).count();

    println!("{} slot(s), {} all-day", model.len(), all_day);
    for (a, b) in overlapping_pairs(model.slots()) {
        println!("overlap: {} and {}", a.id, b.id);
    }
    println!("{}", model.serialize()?);
    Ok(())
}

async fn run_clean(config: &SlotGridConfig, required: bool, path: &Path) -> Result<()> {
    let cleaner = SubmissionCleaner::for_event(&config.editor, required);
    match cleaner.clean(&read_payload(path).await?)? {
        Some(spans) => println!("{}", serde_json::to_string_pretty(&spans)?),
        None => println!("No availabilities submitted"),
    }
    Ok(())
}

async fn run_coverage(config: &SlotGridConfig, path: &Path) -> Result<()> {
    let model = IntervalModel::load(&read_payload(path).await?)?;
    let spans: Vec<Span> = model.slots().iter().map(Span::from).collect();

    let union = Span::union(spans.iter().copied());
    println!("{}", serde_json::to_string_pretty(&union)?);

    let covered = is_event_covered(config.editor.start_date, config.editor.end_date, &spans);
    println!(
        "Event {} .. {} {}",
        config.editor.start_date,
        config.editor.end_date,
        if covered { "is covered" } else { "is not covered" }
    );
    Ok(())
}

/// Pairs of slots sharing time. Touching slots are not reported.
fn overlapping_pairs(slots: &[Slot]) -> Vec<(&Slot, &Slot)> {
    let mut pairs = Vec::new();
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if Span::from(a).overlaps(&Span::from(b), true) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use slotgrid_types::SlotId;

    fn slot(id: &str, from: u32, to: u32) -> Slot {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Slot::new(
            SlotId::persisted(id),
            day.and_hms_opt(from, 0, 0).unwrap(),
            day.and_hms_opt(to, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_overlapping_pairs() {
        let slots = vec![slot("a", 9, 12), slot("b", 12, 14), slot("c", 11, 13)];

        let pairs: Vec<(String, String)> = overlapping_pairs(&slots)
            .into_iter()
            .map(|(a, b)| (a.id.to_string(), b.id.to_string()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "c".to_string()),
                ("b".to_string(), "c".to_string())
            ]
        );
    }

    #[test]
    fn test_cli_parses_clean() {
        let cli = Cli::parse_from(["slotgrid", "clean", "--required", "payload.json"]);
        match cli.command {
            Commands::Clean { config, required, payload } => {
                assert_eq!(config, PathBuf::from("slotgrid.yaml"));
                assert!(required);
                assert_eq!(payload, PathBuf::from("payload.json"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
