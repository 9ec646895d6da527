// crates/splice_markers/src/lib.rs

//! Literal anchors shared by every stage of the pricing splice.

/// Opening tag of the pricing section. Starts the extracted fragment in the
/// component file and identifies the old section in the page file.
pub const SECTION_START_MARKER: &str = "<section id=\"pricing\"";

/// Closing tag of the pricing section (kept inside the fragment).
pub const SECTION_END_MARKER: &str = "</section>";

/// Landmark comment in the page that starts the replaced region.
/// Exact form **without** the closing brace.
pub const PRICING_LANDMARK: &str = "        {/* Pricing Section */";

/// Landmark comment in the page where the replaced region stops.
pub const FAQ_LANDMARK: &str = "        {/* FAQ Section */";

/// Comment line written back in front of the new fragment.
pub const PRICING_COMMENT_LINE: &str = "        {/* Pricing Section */}\n";

/// Prefix put in front of every non-blank fragment line.
pub const INDENT_PREFIX: &str = "        ";

/// Default location of the component the fragment is taken from.
pub const DEFAULT_SOURCE_PATH: &str = "src/components/pricing-section.tsx";

/// Default location of the page that gets rewritten.
pub const DEFAULT_TARGET_PATH: &str = "src/app/page.tsx";

/// How missing or misordered markers are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Every marker must be found in order; anything else is an error.
    #[default]
    Strict,
    /// No checks at all: a missing marker falls back to the same offsets the
    /// unguarded slicing arithmetic would produce.
    Legacy,
}

impl ScanMode {
    pub fn is_strict(self) -> bool {
        matches!(self, ScanMode::Strict)
    }
}
