//! Title banner drawn over the backdrop.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use stardrift_fonts::{banner_width, build_banner};

const TITLE_COLOR: Color = Color::Rgb(240, 240, 255);
const TAGLINE_COLOR: Color = Color::Rgb(180, 180, 210);
const KEY_COLOR: Color = Color::Rgb(170, 120, 255);

/// Lines for `title`: block letters when they fit in `width`, else the plain
/// text.
pub fn title_lines(title: &str, width: u16) -> Vec<Line<'static>> {
    let style = Style::new().fg(TITLE_COLOR);
    if banner_width(title) <= width as usize {
        build_banner(title)
            .into_iter()
            .map(|row| Line::from(row).style(style))
            .collect()
    } else {
        vec![Line::from(title.to_string()).style(style.bold())]
    }
}

/// Key help line.
fn help_line(paused: bool) -> Line<'static> {
    Line::from(vec![
        "q".bold().fg(KEY_COLOR),
        " quit  ".dark_gray(),
        "space".bold().fg(KEY_COLOR),
        if paused { " resume  " } else { " pause  " }.dark_gray(),
        "s".bold().fg(KEY_COLOR),
        " shooting star  ".dark_gray(),
        "f".bold().fg(KEY_COLOR),
        " floater  ".dark_gray(),
        "n".bold().fg(KEY_COLOR),
        " nebula  ".dark_gray(),
        "b".bold().fg(KEY_COLOR),
        " banner".dark_gray(),
    ])
    .centered()
}

/// Render the banner (if `show_banner`) and the help line into `area`.
pub fn render_hero(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    tagline: &str,
    show_banner: bool,
    paused: bool,
) {
    let title = title_lines(title, area.width);
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(title.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    if show_banner {
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[1]);
        let tagline = Paragraph::new(tagline.to_string())
            .style(Style::new().fg(TAGLINE_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(tagline, chunks[3]);
    }
    frame.render_widget(help_line(paused), chunks[5]);
}
