// crates/splice_pricing/src/lib.rs

use anyhow::{Context, Result};
use extract_fragment::processor::{fragment_with_source, FileFragmentSource, FragmentSource};
use locate_region::locate_pricing_region;
use splice_section::{read_target, splice, write_target, SpliceReport};

pub mod config;

pub use config::SpliceConfig;

/// What a run produced.
#[derive(Debug)]
pub struct SpliceOutcome {
    /// The rewritten page.
    pub page: String,
    pub report: SpliceReport,
    /// False for dry runs.
    pub written: bool,
}

/// Runs the splice with the fragment read from the component file on disk.
pub fn run(config: &SpliceConfig) -> Result<SpliceOutcome> {
    run_with_source(config, &FileFragmentSource::default())
}

/// Runs the splice: read fragment, read page, locate region, splice, write.
///
/// In strict mode every marker is checked before the page is opened for
/// writing, so a failed run leaves the page untouched.
pub fn run_with_source(config: &SpliceConfig, source: &dyn FragmentSource) -> Result<SpliceOutcome> {
    let source_path = config.source_path();
    let target_path = config.target_path();
    log::debug!("configuration: {:?}", config);

    let fragment = fragment_with_source(source, &source_path, config.mode)
        .context("Failed to extract the pricing section")?;
    log::info!(
        "extracted {} bytes from {}",
        fragment.len(),
        source_path.display()
    );

    let page = read_target(&target_path)?;
    let region = locate_pricing_region(&page, config.mode)
        .with_context(|| format!("Failed to locate the pricing region in {}", target_path.display()))?;

    let spliced = splice(&page, &region, &fragment.text);

    let written = if config.dry_run {
        log::info!("dry run: {} left unchanged", target_path.display());
        false
    } else {
        write_target(&target_path, &spliced.text)?;
        true
    };

    Ok(SpliceOutcome {
        page: spliced.text,
        report: spliced.report,
        written,
    })
}
