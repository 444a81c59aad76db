//! Character art for the backdrop sprites.

use stardrift_core::Icon;

/// Large asteroid, one frame per quarter turn.
const ASTEROID_ONE: [&[&str]; 4] = [
    &[" ▄▆▆▄ ", "█○ ▪ █", " ▀██▀ "],
    &[" ▄▆▆▄ ", "█ ▪ ○█", " ▀██▀ "],
    &[" ▄▆▆▄ ", "█ ○ ▪█", " ▀██▀ "],
    &[" ▄▆▆▄ ", "█▪ ○ █", " ▀██▀ "],
];

/// Small asteroid, one frame per quarter turn.
const ASTEROID_TWO: [&[&str]; 4] = [
    &["▗▆▖", "▝▀▘"],
    &["▗▄▖", "▜▀▘"],
    &["▗▄▖", "▝▀▛"],
    &["▟▄▖", "▝▀▘"],
];

const GITHUB: [&[&str]; 1] = [&["╭──────╮", "│GitHub│", "╰──────╯"]];

const PYTHON: [&[&str]; 1] = [&["╭──────╮", "│Python│", "╰──────╯"]];

const R_LANG: [&[&str]; 1] = [&["╭───╮", "│ R │", "╰───╯"]];

fn frames(icon: Icon) -> &'static [&'static [&'static str]] {
    match icon {
        Icon::AsteroidOne => &ASTEROID_ONE,
        Icon::AsteroidTwo => &ASTEROID_TWO,
        Icon::Github => &GITHUB,
        Icon::Python => &PYTHON,
        Icon::RLang => &R_LANG,
    }
}

/// Art for `icon` rotated by `angle` degrees, quantised to the frames the
/// icon has.
pub fn sprite_frame(icon: Icon, angle: f32) -> &'static [&'static str] {
    let frames = frames(icon);
    let turn = angle.rem_euclid(360.0) / 360.0;
    let index = ((turn * frames.len() as f32) as usize).min(frames.len() - 1);
    frames[index]
}
