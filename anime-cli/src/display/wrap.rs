// ABOUTME: Word wrapping and max-lines truncation for labeled text fields
// ABOUTME: Widths are measured in terminal columns, not bytes or chars

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::display::ELLIPSIS;
use crate::display::fields::{FieldSpec, FieldValue};
use crate::display::RenderError;

/// Wraps `content` into lines no wider than `pad_width` columns.
///
/// The first line starts with `"{label}: "` and the prefix counts against
/// its budget. Breaks land on the nearest whitespace at or before the naive
/// cut point and consume that whitespace; a chunk with no whitespace is cut
/// hard at the budget.
pub fn wrap_field(
    label: &str,
    content: &str,
    pad_width: usize,
) -> Result<Vec<String>, RenderError> {
    if pad_width == 0 {
        return Err(RenderError::Layout(
            "pad width must be greater than zero".to_string(),
        ));
    }

    let prefix = format!("{label}: ");
    let prefix_width = prefix.width();
    if prefix_width >= pad_width {
        return Err(RenderError::Layout(format!(
            "label '{label}' leaves no room in {pad_width} columns"
        )));
    }

    let content = normalize_whitespace(content);
    let mut rest = content.as_str();
    let mut lines = Vec::new();
    let mut current = prefix;
    let mut budget = pad_width - prefix_width;

    loop {
        if rest.width() <= budget {
            current.push_str(rest);
            lines.push(current);
            break;
        }

        let cut = fit_width(rest, budget);
        if cut == 0 {
            return Err(RenderError::Layout(format!(
                "'{label}' contains a character wider than {budget} columns"
            )));
        }

        let (line, next) = split_at_break(rest, cut);
        current.push_str(line);
        lines.push(std::mem::take(&mut current));

        if next.is_empty() {
            break;
        }
        rest = next;
        budget = pad_width;
    }

    Ok(lines)
}

/// Picks the break for a chunk whose first `cut` bytes fit the budget.
/// The whole whitespace run at the break is consumed.
fn split_at_break(rest: &str, cut: usize) -> (&str, &str) {
    if rest[cut..].starts_with(char::is_whitespace) {
        return (rest[..cut].trim_end(), rest[cut..].trim_start());
    }

    // Scan back within this chunk only; index 0 would produce an empty line
    let within_chunk = rest[..cut]
        .char_indices()
        .rev()
        .take_while(|(i, _)| *i > 0)
        .find(|(_, c)| c.is_whitespace());

    match within_chunk {
        Some((i, _)) => (rest[..i].trim_end(), rest[i..].trim_start()),
        None => (&rest[..cut], &rest[cut..]),
    }
}

/// Keeps at most `max_lines` lines, ellipsis-marking the last kept line
/// when anything was dropped.
///
/// The replaced line becomes `line + "..."` if that fits in `pad_width`,
/// otherwise the line is cut to `pad_width - 3` columns first.
pub fn truncate(mut lines: Vec<String>, max_lines: usize, pad_width: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let visible = last.trim_end();
        *last = if visible.width() + ELLIPSIS.width() <= pad_width {
            format!("{visible}{ELLIPSIS}")
        } else {
            let room = pad_width.saturating_sub(ELLIPSIS.width());
            format!("{}{ELLIPSIS}", cut_to_width(visible, room))
        };
    }
    lines
}

/// Wraps and truncates one field for a render call.
pub fn layout_field(
    spec: &FieldSpec,
    value: &FieldValue,
    pad_width: usize,
) -> Result<Vec<String>, RenderError> {
    let lines = wrap_field(spec.label, &value.to_content(), pad_width)?;
    Ok(truncate(lines, spec.max_lines, pad_width))
}

/// Longest prefix of `s` that fits in `width` columns.
pub fn cut_to_width(s: &str, width: usize) -> &str {
    &s[..fit_width(s, width)]
}

fn fit_width(s: &str, width: usize) -> usize {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        // Control characters have no defined width; never count them as free
        used += c.width().unwrap_or(1);
        if used > width {
            return i;
        }
    }
    s.len()
}

/// Line breaks, tabs and other control characters become single spaces.
fn normalize_whitespace(content: &str) -> String {
    content
        .replace("\r\n", " ")
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
