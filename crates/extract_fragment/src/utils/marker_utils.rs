// src/utils/marker_utils.rs

/// Returns the byte offset of the first occurrence of `marker` in `content`,
/// searching from `from` onward. Out-of-range or mid-character starting points
/// yield `None` instead of panicking.
pub fn find_marker_from(content: &str, marker: &str, from: usize) -> Option<usize> {
    content
        .get(from..)
        .and_then(|rest| rest.find(marker))
        .map(|idx| idx + from)
}

/// Returns the byte offset of the first occurrence of `marker` in `content`.
pub fn find_marker(content: &str, marker: &str) -> Option<usize> {
    content.find(marker)
}

/// End offset produced when the end marker is absent and the not-found
/// sentinel (-1) has the marker length added to it, clamped at zero.
pub fn sentinel_end_offset(marker: &str) -> usize {
    marker.len().saturating_sub(1)
}

/// Moves `idx` back to the closest char boundary at or below it, clamped to
/// the length of `content`.
pub fn floor_char_boundary(content: &str, idx: usize) -> usize {
    let mut idx = idx.min(content.len());
    while !content.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Slices `content[start..end]`, returning an empty string when the range is
/// inverted. Both ends are snapped to char boundaries first.
pub fn clamped_slice(content: &str, start: usize, end: usize) -> &str {
    let start = floor_char_boundary(content, start);
    let end = floor_char_boundary(content, end);
    if end <= start {
        ""
    } else {
        &content[start..end]
    }
}
