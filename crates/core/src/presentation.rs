// crates/core/src/presentation.rs

/// Render one result row.
///
/// Every value is right-justified to the decimal width of the final column,
/// single-space separated, with an optional name appended.
#[must_use]
pub fn format_counts(values: &[usize], label: Option<&str>) -> String {
    let width = values.last().map_or(0, |value| value.to_string().len());
    let mut row = values
        .iter()
        .map(|value| format!("{value:>width$}"))
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(name) = label {
        row.push(' ');
        row.push_str(name);
    }
    row.push('\n');
    row
}
