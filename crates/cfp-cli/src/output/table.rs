#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(6)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad_cell(&clip(header, *width), *width, false, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(strip_ansi(&header_line).len());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let clipped = clip(&value, *width);
                    let numeric = looks_numeric(&clipped);
                    let colored = if options.color {
                        status_color(&clipped)
                    } else {
                        clipped
                    };
                    pad_cell(&colored, *width, numeric, options.color)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    // Shave one column at a time, widest first, until the table fits or
    // every column is down to its header width.
    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    for ch in value.chars().take(width - 1) {
        out.push(ch);
    }
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad_cell(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        strip_ansi(value).chars().count()
    } else {
        value.chars().count()
    };
    let pad = width.saturating_sub(plain_len);
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Color cells that hold an issue status or a boolean-like flag.
fn status_color(value: &str) -> String {
    let lower = value.trim().to_ascii_lowercase();
    let code = match lower.as_str() {
        "resolved" | "authenticated" | "true" | "ok" => Some("32"),
        "pending" | "in review" | "in_review" => Some("33"),
        "closed" | "false" | "error" | "expired" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, clip, render_rows, status_color, strip_ansi};

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["ticket_id", "status", "title"];
        let rows = vec![
            vec![
                "AB12CD34".to_string(),
                "pending".to_string(),
                "short".to_string(),
            ],
            vec![
                "ZZ99XX00".to_string(),
                "in review".to_string(),
                "a much longer issue title".to_string(),
            ],
        ];

        let table = render_rows(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines.len() >= 4);
        assert!(lines[0].contains("ticket_id"));
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn narrow_terminals_truncate_long_cells() {
        let headers = ["title"];
        let rows = vec![vec![
            "a title far too long for a narrow terminal".to_string(),
        ]];

        let table = render_rows(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(12),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 12));
        assert!(table.contains('…'));
    }

    #[test]
    fn clip_keeps_short_values_intact() {
        assert_eq!(clip("pending", 10), "pending");
        assert_eq!(clip("resolved!", 5), "reso…");
    }

    #[test]
    fn status_cells_get_ansi_colors() {
        assert!(status_color("resolved").contains("\u{1b}[32m"));
        assert!(status_color("in review").contains("\u{1b}[33m"));
        assert!(status_color("closed").contains("\u{1b}[31m"));
        assert_eq!(status_color("facilities"), "facilities");
    }

    #[test]
    fn strip_ansi_removes_color_codes() {
        let colored = status_color("pending");
        assert_eq!(strip_ansi(&colored), "pending");
    }
}
