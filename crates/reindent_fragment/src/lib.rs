use splice_markers::INDENT_PREFIX;

/// Prepends `prefix` to every line of `fragment` that has non-whitespace
/// content. Blank and whitespace-only lines are kept as they are.
/// Lines are split on `\n` only, so a trailing `\r` stays with its line.
pub fn reindent(fragment: &str, prefix: &str) -> String {
    fragment
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reindents with the page's eight-space prefix.
pub fn reindent_for_page(fragment: &str) -> String {
    reindent(fragment, INDENT_PREFIX)
}
