use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cells occupied by `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Clip `s` to at most `max_cells` cells, ending in `…` when clipped.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Drop leading graphemes until at least `cells` cells are gone.
/// Returns the remainder and the cells actually dropped, which can exceed
/// `cells` by part of a wide grapheme.
pub fn skip_width(s: &str, cells: usize) -> (&str, usize) {
    let mut skipped = 0;
    for (i, g) in s.grapheme_indices(true) {
        if skipped >= cells {
            return (&s[i..], skipped);
        }
        skipped += display_width(g);
    }
    ("", skipped)
}

/// Byte offset of the grapheme boundary after `at`, or None at the end.
pub fn next_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    let rest = s.get(at..)?;
    let g = rest.graphemes(true).next()?;
    Some(at + g.len())
}

/// Byte offset of the grapheme boundary before `at`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    let head = s.get(..at)?;
    let g = head.graphemes(true).next_back()?;
    Some(at - g.len())
}

/// Start of the word left of `at`: skips whitespace, then non-whitespace.
pub fn word_start_before(s: &str, at: usize) -> usize {
    let Some(head) = s.get(..at) else {
        return 0;
    };
    let trimmed = head.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(i) => i + trimmed[i..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}
