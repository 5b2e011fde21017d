//! Terminal rendering for analysis output

/// Horizontal bar chart over ranked (token, count) pairs.
///
/// One row per token: right-padded label, bar scaled to the maximum count,
/// count suffix. Any non-zero count draws at least one cell.
pub fn bar_chart(ranked: &[(String, usize)], width: usize) -> String {
    if ranked.is_empty() {
        return "  (no tokens)".to_string();
    }

    let max_count = ranked.iter().map(|(_, c)| *c).max().unwrap_or(1);
    let label_width = ranked.iter().map(|(t, _)| t.len()).max().unwrap_or(0);

    ranked
        .iter()
        .map(|(token, count)| {
            let filled = ((width * count) / max_count).max(1);
            format!(
                "  {token:<label_width$}  {} {count}",
                "\u{2588}".repeat(filled)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Aligned category/mean listing with two decimal places
pub fn averages_table(rows: &[(String, f64)]) -> String {
    if rows.is_empty() {
        return "  (no data)".to_string();
    }

    let label_width = rows.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(category, mean)| format!("  {category:<label_width$}  {mean:.2}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two-column grid table with `+---+` borders and a `+===+` header rule
pub fn grid_table(headers: (&str, &str), rows: &[(String, String)]) -> String {
    let col1 = rows
        .iter()
        .map(|(a, _)| a.len())
        .chain([headers.0.len()])
        .max()
        .unwrap_or(0);
    let col2 = rows
        .iter()
        .map(|(_, b)| b.len())
        .chain([headers.1.len()])
        .max()
        .unwrap_or(0);

    let divider = format!("+{}+{}+", "-".repeat(col1 + 2), "-".repeat(col2 + 2));
    let header_rule = divider.replace('-', "=");

    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
    lines.push(divider.clone());
    lines.push(format!(
        "| {:<col1$} | {:<col2$} |",
        headers.0, headers.1
    ));
    lines.push(header_rule);
    for (left, right) in rows {
        lines.push(format!("| {left:<col1$} | {right:<col2$} |"));
        lines.push(divider.clone());
    }
    lines.join("\n")
}
