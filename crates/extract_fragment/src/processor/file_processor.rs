// crates/extract_fragment/src/processor/file_processor.rs

use std::path::Path;

use anyhow::Result;
use splice_markers::{ScanMode, SECTION_END_MARKER, SECTION_START_MARKER};

use crate::{extract_fragment_from_file, Fragment};

/// Abstracts where the fragment to splice comes from.
pub trait FragmentSource {
    /// Loads the fragment stored at `path` using the given scan mode.
    fn load_fragment(&self, path: &Path, mode: ScanMode) -> Result<Fragment>;
}

/// Reads the fragment from a component file on disk, cutting it out between
/// two markers.
#[derive(Clone, Debug)]
pub struct FileFragmentSource {
    pub start_marker: String,
    pub end_marker: String,
}

impl Default for FileFragmentSource {
    fn default() -> Self {
        Self {
            start_marker: SECTION_START_MARKER.to_string(),
            end_marker: SECTION_END_MARKER.to_string(),
        }
    }
}

impl FragmentSource for FileFragmentSource {
    fn load_fragment(&self, path: &Path, mode: ScanMode) -> Result<Fragment> {
        log::debug!(
            "loading fragment from {} between '{}' and '{}'",
            path.display(),
            self.start_marker,
            self.end_marker
        );
        extract_fragment_from_file(path, &self.start_marker, &self.end_marker, mode)
    }
}

/// Loads a fragment through any `FragmentSource` implementation.
pub fn fragment_with_source<P: AsRef<Path>>(
    source: &dyn FragmentSource,
    path: P,
    mode: ScanMode,
) -> Result<Fragment> {
    source.load_fragment(path.as_ref(), mode)
}
