// crates/locate_region/src/lib.rs

use extract_fragment::utils::marker_utils::{find_marker, find_marker_from};
use splice_markers::{ScanMode, FAQ_LANDMARK, PRICING_LANDMARK, SECTION_START_MARKER};
use thiserror::Error;

/// Result of searching the page for one landmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Byte offset of the landmark.
    Found(usize),
    /// Not found. Behaves like a `-1` index: as a slice bound it points at
    /// the last character of the page, as a position it counts as -1.
    NotFound,
}

impl Anchor {
    /// Byte offset used to cut the page at this anchor.
    pub fn offset(self, target: &str) -> usize {
        match self {
            Anchor::Found(idx) => idx,
            Anchor::NotFound => target
                .char_indices()
                .next_back()
                .map(|(idx, _)| idx)
                .unwrap_or(0),
        }
    }

    /// Position of the anchor in characters, -1 when not found.
    pub fn char_position(self, target: &str) -> i64 {
        match self {
            Anchor::Found(idx) => target[..idx].chars().count() as i64,
            Anchor::NotFound => -1,
        }
    }
}

/// Where the page gets cut.
///
/// The replaced span runs from the pricing landmark to the FAQ landmark;
/// `section_start` is the old section tag found after the landmark, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpliceRegion {
    pub landmark: Anchor,
    pub section_start: Option<usize>,
    pub faq: Anchor,
}

impl SpliceRegion {
    /// Byte offset where the kept prefix ends.
    pub fn landmark_offset(&self, target: &str) -> usize {
        self.landmark.offset(target)
    }

    /// Byte offset where the kept suffix starts.
    pub fn faq_offset(&self, target: &str) -> usize {
        self.faq.offset(target)
    }

    /// Characters between the two landmarks. Negative when the region is
    /// inverted or a landmark is missing.
    pub fn removed_chars(&self, target: &str) -> i64 {
        self.faq.char_position(target) - self.landmark.char_position(target)
    }

    pub fn is_inverted(&self, target: &str) -> bool {
        self.faq_offset(target) < self.landmark_offset(target)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("landmark '{0}' not found in target")]
    MissingLandmark(String),
    #[error("section tag '{tag}' not found between byte {from} and the FAQ landmark")]
    MissingSection { tag: String, from: usize },
    #[error("FAQ landmark '{0}' not found in target")]
    MissingFaqLandmark(String),
    #[error("FAQ landmark at byte {faq} comes before the pricing landmark at byte {landmark}")]
    FaqBeforeLandmark { landmark: usize, faq: usize },
}

/// Finds the pricing region using the default landmarks.
pub fn locate_pricing_region(target: &str, mode: ScanMode) -> Result<SpliceRegion, LocateError> {
    locate_region(target, PRICING_LANDMARK, SECTION_START_MARKER, FAQ_LANDMARK, mode)
}

/// Finds `landmark`, then the first `section_tag` at or after it, and the
/// first `faq_landmark` anywhere in `target`.
///
/// In [`ScanMode::Legacy`] nothing is checked: a missing landmark becomes
/// [`Anchor::NotFound`], so the page is cut before its last character, and an
/// inverted region is kept as is.
pub fn locate_region(
    target: &str,
    landmark: &str,
    section_tag: &str,
    faq_landmark: &str,
    mode: ScanMode,
) -> Result<SpliceRegion, LocateError> {
    RegionLocator {
        target,
        landmark,
        section_tag,
        faq_landmark,
    }
    .locate(mode)
}

// === Private Implementation === //

struct RegionLocator<'a> {
    target: &'a str,
    landmark: &'a str,
    section_tag: &'a str,
    faq_landmark: &'a str,
}

impl<'a> RegionLocator<'a> {
    fn locate(&self, mode: ScanMode) -> Result<SpliceRegion, LocateError> {
        let region = if mode.is_strict() {
            self.locate_strict()?
        } else {
            self.locate_legacy()
        };
        log::debug!(
            "splice region: landmark {:?}, section at {:?}, FAQ {:?}",
            region.landmark,
            region.section_start,
            region.faq
        );
        Ok(region)
    }

    fn locate_strict(&self) -> Result<SpliceRegion, LocateError> {
        let landmark_start = find_marker(self.target, self.landmark)
            .ok_or_else(|| LocateError::MissingLandmark(self.landmark.to_string()))?;
        let faq_start = find_marker(self.target, self.faq_landmark)
            .ok_or_else(|| LocateError::MissingFaqLandmark(self.faq_landmark.to_string()))?;
        if faq_start < landmark_start {
            return Err(LocateError::FaqBeforeLandmark {
                landmark: landmark_start,
                faq: faq_start,
            });
        }
        let section_start = find_marker_from(self.target, self.section_tag, landmark_start)
            .filter(|&idx| idx < faq_start)
            .ok_or_else(|| LocateError::MissingSection {
                tag: self.section_tag.to_string(),
                from: landmark_start,
            })?;

        Ok(SpliceRegion {
            landmark: Anchor::Found(landmark_start),
            section_start: Some(section_start),
            faq: Anchor::Found(faq_start),
        })
    }

    fn locate_legacy(&self) -> SpliceRegion {
        let landmark = match find_marker(self.target, self.landmark) {
            Some(idx) => Anchor::Found(idx),
            None => {
                log::warn!(
                    "landmark '{}' not found; keeping all but the last character before the fragment",
                    self.landmark.trim()
                );
                Anchor::NotFound
            }
        };
        let section_start =
            find_marker_from(self.target, self.section_tag, landmark.offset(self.target));
        if section_start.is_none() {
            log::warn!("section tag '{}' not found after the landmark", self.section_tag);
        }
        let faq = match find_marker(self.target, self.faq_landmark) {
            Some(idx) => Anchor::Found(idx),
            None => {
                log::warn!(
                    "FAQ landmark '{}' not found; only the last character is kept after the fragment",
                    self.faq_landmark.trim()
                );
                Anchor::NotFound
            }
        };

        let region = SpliceRegion {
            landmark,
            section_start,
            faq,
        };
        if region.is_inverted(self.target) {
            log::warn!(
                "FAQ landmark at byte {} precedes pricing landmark at byte {}; output will repeat content",
                region.faq_offset(self.target),
                region.landmark_offset(self.target)
            );
        }
        region
    }
}
