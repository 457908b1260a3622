//! About dialog with the manual update check.

use crate::tui::{state::AppState, theme::Styles};
use crate::update::UpdateState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered rectangle of the given size, clamped to `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn update_style(update: &UpdateState) -> Style {
    match update {
        UpdateState::Idle => Styles::primary(),
        UpdateState::Checking => Styles::warning(),
        UpdateState::UpToDate | UpdateState::UpdateAvailable { .. } => Styles::success(),
        UpdateState::Error => Styles::error(),
    }
}

pub(crate) fn dialog_lines(app_state: &AppState) -> Vec<Line<'static>> {
    let update = &app_state.update;
    let mut lines = vec![
        Line::from(Span::styled("Device Inspector", Styles::title())),
        Line::from(Span::styled(
            format!("Version {}", app_state.version),
            Styles::secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Shows hardware and connectivity facts for this device.",
            Styles::secondary(),
        )),
        Line::from(""),
    ];

    let status = if *update == UpdateState::Idle {
        format!("[u] {}", update.message())
    } else {
        update.message().to_string()
    };
    lines.push(Line::from(Span::styled(status, update_style(update))));

    if let UpdateState::UpdateAvailable { url } = update {
        lines.push(Line::from(Span::styled(url.clone(), Styles::primary())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[Esc] close", Styles::dimmed())));
    lines
}

pub fn render(f: &mut Frame, app_state: &AppState) {
    let area = centered_rect(60, 13, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(Span::styled(" About ", Styles::title()));

    let paragraph = Paragraph::new(dialog_lines(app_state))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FactContext;
    use crate::probe::DeviceSnapshot;
    use crate::tui::state::Action;
    use crate::update::UpdateOutcome;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn state() -> AppState {
        let mut state = AppState::new(
            DeviceSnapshot::default(),
            FactContext {
                public_ip: "Loading...".to_string(),
                mac_interface: "wlan0".to_string(),
                low_memory_threshold: 0,
            },
        );
        state.apply(Action::OpenAbout);
        state
    }

    #[test]
    fn test_dialog_shows_version_and_idle_prompt() {
        let mut state = state();
        state.version = "1.4".to_string();
        let text = text(&dialog_lines(&state));
        assert!(text.contains("Version 1.4"));
        assert!(text.contains("[u] Check for Update"));
    }

    #[test]
    fn test_dialog_shows_release_url() {
        let mut state = state();
        state.apply(Action::StartUpdateCheck);
        state.apply(Action::UpdateFinished(UpdateOutcome::UpdateAvailable {
            version: "2.0".to_string(),
            url: "https://example.com/releases/2.0".to_string(),
        }));
        let text = text(&dialog_lines(&state));
        assert!(text.contains("A new version is available."));
        assert!(text.contains("https://example.com/releases/2.0"));
        assert!(!text.contains("[u]"));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 30, 8);
        let rect = centered_rect(60, 13, area);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 8);

        let rect = centered_rect(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (10, 3, 10, 4));
    }
}
