//! Block letter font for the hero banner.

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Uppercase letters A to Z (5 lines tall, 5 chars wide).
pub const LETTERS: [[&str; GLYPH_HEIGHT]; 26] = [
    // A
    [
        " ███ ",
        "█   █",
        "█████",
        "█   █",
        "█   █",
    ],
    // B
    [
        "████ ",
        "█   █",
        "████ ",
        "█   █",
        "████ ",
    ],
    // C
    [
        " ████",
        "█    ",
        "█    ",
        "█    ",
        " ████",
    ],
    // D
    [
        "████ ",
        "█   █",
        "█   █",
        "█   █",
        "████ ",
    ],
    // E
    [
        "█████",
        "█    ",
        "████ ",
        "█    ",
        "█████",
    ],
    // F
    [
        "█████",
        "█    ",
        "████ ",
        "█    ",
        "█    ",
    ],
    // G
    [
        " ████",
        "█    ",
        "█  ██",
        "█   █",
        " ████",
    ],
    // H
    [
        "█   █",
        "█   █",
        "█████",
        "█   █",
        "█   █",
    ],
    // I
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "█████",
    ],
    // J
    [
        "█████",
        "   █ ",
        "   █ ",
        "█  █ ",
        " ██  ",
    ],
    // K
    [
        "█   █",
        "█  █ ",
        "███  ",
        "█  █ ",
        "█   █",
    ],
    // L
    [
        "█    ",
        "█    ",
        "█    ",
        "█    ",
        "█████",
    ],
    // M
    [
        "█   █",
        "██ ██",
        "█ █ █",
        "█   █",
        "█   █",
    ],
    // N
    [
        "█   █",
        "██  █",
        "█ █ █",
        "█  ██",
        "█   █",
    ],
    // O
    [
        " ███ ",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // P
    [
        "████ ",
        "█   █",
        "████ ",
        "█    ",
        "█    ",
    ],
    // Q
    [
        " ███ ",
        "█   █",
        "█ █ █",
        "█  █ ",
        " ██ █",
    ],
    // R
    [
        "████ ",
        "█   █",
        "████ ",
        "█  █ ",
        "█   █",
    ],
    // S
    [
        " ████",
        "█    ",
        " ███ ",
        "    █",
        "████ ",
    ],
    // T
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // U
    [
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // V
    [
        "█   █",
        "█   █",
        "█   █",
        " █ █ ",
        "  █  ",
    ],
    // W
    [
        "█   █",
        "█   █",
        "█ █ █",
        "██ ██",
        "█   █",
    ],
    // X
    [
        "█   █",
        " █ █ ",
        "  █  ",
        " █ █ ",
        "█   █",
    ],
    // Y
    [
        "█   █",
        " █ █ ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // Z
    [
        "█████",
        "   █ ",
        "  █  ",
        " █   ",
        "█████",
    ],
];

/// Digits 0 to 9 (5 lines tall, 5 chars wide).
pub const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    // 0
    [
        " ███ ",
        "█  ██",
        "█ █ █",
        "██  █",
        " ███ ",
    ],
    // 1
    [
        "  █  ",
        " ██  ",
        "  █  ",
        "  █  ",
        " ███ ",
    ],
    // 2
    [
        " ███ ",
        "█   █",
        "  ██ ",
        " █   ",
        "█████",
    ],
    // 3
    [
        "████ ",
        "    █",
        " ███ ",
        "    █",
        "████ ",
    ],
    // 4
    [
        "█   █",
        "█   █",
        "█████",
        "    █",
        "    █",
    ],
    // 5
    [
        "█████",
        "█    ",
        "████ ",
        "    █",
        "████ ",
    ],
    // 6
    [
        " ███ ",
        "█    ",
        "████ ",
        "█   █",
        " ███ ",
    ],
    // 7
    [
        "█████",
        "   █ ",
        "  █  ",
        " █   ",
        " █   ",
    ],
    // 8
    [
        " ███ ",
        "█   █",
        " ███ ",
        "█   █",
        " ███ ",
    ],
    // 9
    [
        " ███ ",
        "█   █",
        " ████",
        "    █",
        " ███ ",
    ],
];
/// Period (5 lines tall, 2 chars wide)
pub const PERIOD: [&str; GLYPH_HEIGHT] = ["  ", "  ", "  ", "  ", "██"];

/// Hyphen (5 lines tall, 4 chars wide)
pub const HYPHEN: [&str; GLYPH_HEIGHT] = ["    ", "    ", "████", "    ", "    "];

/// Space and any character without a glyph (5 lines tall, 3 chars wide)
pub const BLANK: [&str; GLYPH_HEIGHT] = ["   ", "   ", "   ", "   ", "   "];

/// Look up the glyph for a character. Letters are case-insensitive.
pub fn glyph(ch: char) -> &'static [&'static str; GLYPH_HEIGHT] {
    let upper = ch.to_ascii_uppercase();
    match upper {
        'A'..='Z' => &LETTERS[(upper as u8 - b'A') as usize],
        '0'..='9' => &DIGITS[(upper as u8 - b'0') as usize],
        '.' => &PERIOD,
        '-' => &HYPHEN,
        _ => &BLANK,
    }
}

/// Build block letter art for `text`.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, each representing one line of the
/// art. Glyphs are separated by a single blank column.
pub fn build_banner(text: &str) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_HEIGHT];

    for (i, ch) in text.chars().enumerate() {
        let glyph = glyph(ch);
        for (row, line) in lines.iter_mut().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(glyph[row]);
        }
    }

    lines
}

/// Width in terminal columns of the banner for `text`.
pub fn banner_width(text: &str) -> usize {
    let glyphs: usize = text.chars().map(|ch| glyph(ch)[0].chars().count()).sum();
    glyphs + text.chars().count().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_rows_have_equal_width() {
        for glyph in LETTERS.iter().chain(DIGITS.iter()) {
            let width = glyph[0].chars().count();
            assert!(glyph.iter().all(|row| row.chars().count() == width));
        }
    }

    #[test]
    fn test_build_banner_rows() {
        let lines = build_banner("S.P");
        assert_eq!(lines.len(), GLYPH_HEIGHT);
        assert!(lines.iter().all(|l| l.chars().count() == banner_width("S.P")));
        assert_eq!(banner_width("S.P"), 5 + 1 + 2 + 1 + 5);
    }

    #[test]
    fn test_unknown_characters_render_blank() {
        assert_eq!(glyph('?'), &BLANK);
        assert_eq!(glyph('a'), glyph('A'));
        let lines = build_banner("~");
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_empty_banner() {
        let lines = build_banner("");
        assert_eq!(lines.len(), GLYPH_HEIGHT);
        assert!(lines.iter().all(String::is_empty));
        assert_eq!(banner_width(""), 0);
    }
}
