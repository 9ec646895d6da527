// crates/splice_section/src/lib.rs

use extract_fragment::utils::marker_utils::floor_char_boundary;
use locate_region::SpliceRegion;
use reindent_fragment::reindent_for_page;
use splice_markers::PRICING_COMMENT_LINE;

pub mod writer;

pub use writer::{read_target, write_target};

/// Character counts reported after a splice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpliceReport {
    /// FAQ landmark position minus pricing landmark position, in characters.
    /// Negative for an inverted region or a missing landmark.
    pub removed_chars: i64,
    /// Length of the reindented fragment in characters.
    pub inserted_chars: usize,
}

impl SpliceReport {
    /// Renders the status lines printed once the target has been rewritten.
    pub fn render(&self, target_name: &str) -> String {
        format!(
            "✅ Successfully updated pricing section in {}\n   Replaced {} characters\n   With {} characters of new content",
            target_name, self.removed_chars, self.inserted_chars
        )
    }
}

/// The rewritten page together with its report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spliced {
    pub text: String,
    pub report: SpliceReport,
}

/// Replaces `region` of `target` with the reindented `fragment`.
///
/// The result is: everything before the pricing landmark, the pricing comment
/// line, the reindented fragment, a blank line, then everything from the FAQ
/// landmark on. Nothing between the old section and the FAQ landmark is kept.
/// An inverted region is not corrected: the text between the two offsets then
/// appears twice. A missing landmark cuts the page before its last character.
pub fn splice(target: &str, region: &SpliceRegion, fragment: &str) -> Spliced {
    let before_end = floor_char_boundary(target, region.landmark_offset(target));
    let after_start = floor_char_boundary(target, region.faq_offset(target));
    let before = &target[..before_end];
    let after = &target[after_start..];

    let indented = reindent_for_page(fragment);

    let mut text = String::with_capacity(
        before.len() + PRICING_COMMENT_LINE.len() + indented.len() + 2 + after.len(),
    );
    text.push_str(before);
    text.push_str(PRICING_COMMENT_LINE);
    text.push_str(&indented);
    text.push_str("\n\n");
    text.push_str(after);

    let report = SpliceReport {
        removed_chars: region.removed_chars(target),
        inserted_chars: indented.chars().count(),
    };
    log::debug!(
        "spliced page: {} bytes in, {} bytes out",
        target.len(),
        text.len()
    );

    Spliced { text, report }
}
