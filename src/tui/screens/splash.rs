//! Title screen shown at startup.

use crate::tui::theme::Styles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::styled("Device Inspector", Styles::title()),
        Line::from(""),
        Line::styled("press any key", Styles::dimmed()),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}
