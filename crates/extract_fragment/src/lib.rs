// crates/extract_fragment/src/lib.rs

use std::fs;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use splice_markers::ScanMode;
use thiserror::Error;

use crate::utils::marker_utils::{clamped_slice, find_marker, sentinel_end_offset};

pub mod processor;
pub mod utils;

/// A piece of the source text cut out between two markers, both included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    /// Byte range of `text` inside the source buffer.
    pub span: Range<usize>,
}

impl Fragment {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("start marker '{0}' not found in source")]
    MissingStartMarker(String),
    #[error("end marker '{0}' not found in source")]
    MissingEndMarker(String),
    #[error("end marker '{marker}' at byte {end} comes before the start marker at byte {start}")]
    EndBeforeStart {
        marker: String,
        start: usize,
        end: usize,
    },
}

/// Extracts everything from the first `start_marker` through the end of the
/// first `end_marker`. Both searches start at the beginning of `source`.
///
/// In [`ScanMode::Strict`] a missing or misplaced marker is an error. In
/// [`ScanMode::Legacy`] nothing is checked:
///   - a missing start marker makes the fragment start at offset 0,
///   - a missing end marker leaves the end at `len(end_marker) - 1`, so the
///     fragment comes out empty or truncated,
///   - an inverted range yields an empty fragment.
pub fn extract_fragment(
    source: &str,
    start_marker: &str,
    end_marker: &str,
    mode: ScanMode,
) -> Result<Fragment, ExtractError> {
    let start_idx = find_marker(source, start_marker);
    let end_idx = find_marker(source, end_marker);

    let (start, end) = match mode {
        ScanMode::Strict => {
            let start = start_idx
                .ok_or_else(|| ExtractError::MissingStartMarker(start_marker.to_string()))?;
            let end_idx =
                end_idx.ok_or_else(|| ExtractError::MissingEndMarker(end_marker.to_string()))?;
            if end_idx < start {
                return Err(ExtractError::EndBeforeStart {
                    marker: end_marker.to_string(),
                    start,
                    end: end_idx,
                });
            }
            (start, end_idx + end_marker.len())
        }
        ScanMode::Legacy => {
            let start = start_idx.unwrap_or_else(|| {
                log::warn!("start marker '{}' not found; extracting from offset 0", start_marker);
                0
            });
            let end = match end_idx {
                Some(idx) => idx + end_marker.len(),
                None => {
                    log::warn!(
                        "end marker '{}' not found; fragment will be empty or truncated",
                        end_marker
                    );
                    sentinel_end_offset(end_marker)
                }
            };
            (start, end)
        }
    };

    let text = clamped_slice(source, start, end);
    log::debug!("extracted {} bytes starting at byte {}", text.len(), start);
    Ok(Fragment {
        text: text.to_string(),
        span: start..start + text.len(),
    })
}

/// Reads the file at `path` and extracts the fragment from it.
pub fn extract_fragment_from_file<P: AsRef<Path>>(
    path: P,
    start_marker: &str,
    end_marker: &str,
    mode: ScanMode,
) -> Result<Fragment> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file {}", path.display()))?;
    let fragment = extract_fragment(&content, start_marker, end_marker, mode)
        .with_context(|| format!("Failed to extract fragment from {}", path.display()))?;
    Ok(fragment)
}
