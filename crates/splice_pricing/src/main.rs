use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use splice_markers::{ScanMode, DEFAULT_SOURCE_PATH, DEFAULT_TARGET_PATH};

use splice_pricing::{run, SpliceConfig};

fn main() -> Result<()> {
    let matches = Command::new("splice_pricing")
        .version("0.1.0")
        .about("Replaces the pricing section of a page with the one from the pricing component")
        .arg(
            Arg::new("root")
                .long("root")
                .num_args(1)
                .help("Project root the source and target paths are relative to"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .num_args(1)
                .help(format!(
                    "Component file the pricing section is taken from [default: {}]",
                    DEFAULT_SOURCE_PATH
                )),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .num_args(1)
                .help(format!(
                    "Page file whose pricing section is replaced [default: {}]",
                    DEFAULT_TARGET_PATH
                )),
        )
        .arg(
            Arg::new("legacy")
                .long("legacy")
                .help("Skip marker checks and slice like the unguarded script; missing markers silently produce wrong output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print the new page instead of writing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let root = matches
        .get_one::<String>("root")
        .map(PathBuf::from)
        .or_else(SpliceConfig::root_from_env)
        .unwrap_or_else(|| PathBuf::from("."));

    let config = SpliceConfig {
        root,
        source: matches
            .get_one::<String>("source")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PATH)),
        target: matches
            .get_one::<String>("target")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_PATH)),
        mode: if matches.get_flag("legacy") {
            ScanMode::Legacy
        } else {
            ScanMode::Strict
        },
        dry_run: matches.get_flag("dry_run"),
        verbose: matches.get_flag("verbose"),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    let outcome = run(&config)?;

    if outcome.written {
        println!("{}", outcome.report.render(&config.target_name()));
    } else {
        print!("{}", outcome.page);
        eprintln!("Dry run: {} left unchanged", config.target_path().display());
        eprintln!("   Would replace {} characters", outcome.report.removed_chars);
        eprintln!("   With {} characters of new content", outcome.report.inserted_chars);
    }

    Ok(())
}
