//! Five-row block glyphs for the countdown clock.

/// Rows per glyph
pub const GLYPH_HEIGHT: u16 = 5;

const DIGITS: [[&str; 5]; 10] = [
    ["████", "█  █", "█  █", "█  █", "████"],
    ["  █ ", " ██ ", "  █ ", "  █ ", " ███"],
    ["████", "   █", "████", "█   ", "████"],
    ["████", "   █", " ███", "   █", "████"],
    ["█  █", "█  █", "████", "   █", "   █"],
    ["████", "█   ", "████", "   █", "████"],
    ["████", "█   ", "████", "█  █", "████"],
    ["████", "   █", "  █ ", " █  ", " █  "],
    ["████", "█  █", "████", "█  █", "████"],
    ["████", "█  █", "████", "   █", "████"],
];

const COLON: [&str; 5] = [" ", "█", " ", "█", " "];

/// Render `text` (digits and `:`) as block rows joined by single spaces.
/// Characters without a glyph are skipped.
pub fn big_rows(text: &str) -> [String; 5] {
    let mut rows: [String; 5] = Default::default();
    let glyphs: Vec<&[&str; 5]> = text
        .chars()
        .filter_map(|c| match c {
            ':' => Some(&COLON),
            d => d.to_digit(10).map(|n| &DIGITS[n as usize]),
        })
        .collect();
    for (i, glyph) in glyphs.iter().enumerate() {
        for (row, part) in rows.iter_mut().zip(glyph.iter()) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

/// Cell width of the big rendering of `text`
pub fn big_width(text: &str) -> u16 {
    big_rows(text)[0].chars().count() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_face_rows() {
        let rows = big_rows("25:00");
        assert_eq!(rows[0], "████ ████   ████ ████");
        assert_eq!(rows[1], "   █ █    █ █  █ █  █");
        assert_eq!(rows[4], "████ ████   ████ ████");
    }

    #[test]
    fn width_counts_gaps() {
        // four digits of 4 cells, one colon of 1 cell, four gaps
        assert_eq!(big_width("12:34"), 4 * 4 + 1 + 4);
        assert_eq!(big_width(""), 0);
    }

    #[test]
    fn unknown_chars_are_skipped() {
        assert_eq!(big_rows("1x"), big_rows("1"));
    }
}
