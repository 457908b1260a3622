//! Main screen: tab bar, the cards of the selected tab, and key hints.

use crate::facts::{Card, Tab};
use crate::format::UNKNOWN;
use crate::tui::{state::AppState, theme::Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

const SHORTCUTS: &str = "[Tab/←→] switch  [1-5] jump  [↑↓] scroll  [r] refresh  [i] about  [q] quit";

pub fn render(f: &mut Frame, app_state: &AppState) {
    let area = f.area();

    if area.height < 10 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small. Please resize to at least 40x10")
            .style(Styles::warning())
            .alignment(Alignment::Center);
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_tabs(f, chunks[0], app_state.tab);
    render_cards(f, chunks[1], app_state);

    let hints = Paragraph::new(SHORTCUTS)
        .style(Styles::dimmed())
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[2]);
}

fn render_tabs(f: &mut Frame, area: Rect, selected: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected.index())
        .style(Styles::secondary())
        .highlight_style(Styles::highlight())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title(Span::styled(" Device Inspector ", Styles::title())),
        );
    f.render_widget(tabs, area);
}

fn card_height(card: &Card) -> u16 {
    // borders plus one line per row, at least one line for an empty card
    card.rows.len().max(1) as u16 + 2
}

/// Number of cards, starting at `scroll`, that fit fully into `height`
/// lines. Always at least one so a tall card is shown clipped rather than
/// not at all.
pub(crate) fn visible_card_count(cards: &[Card], scroll: usize, height: u16) -> usize {
    let mut used = 0u16;
    let mut count = 0;
    for card in cards.iter().skip(scroll) {
        let h = card_height(card);
        if count > 0 && used.saturating_add(h) > height {
            break;
        }
        used = used.saturating_add(h);
        count += 1;
    }
    count
}

fn render_cards(f: &mut Frame, area: Rect, app_state: &AppState) {
    let Some(section) = app_state.current_section() else {
        return;
    };

    let count = visible_card_count(&section.cards, app_state.scroll, area.height);
    let visible: Vec<&Card> = section
        .cards
        .iter()
        .skip(app_state.scroll)
        .take(count)
        .collect();

    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|c| Constraint::Length(card_height(c)))
        .collect();
    constraints.push(Constraint::Min(0));

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (card, slot) in visible.iter().zip(slots.iter()) {
        render_card(f, *slot, card);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &Card) {
    let width = card
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = card
        .rows
        .iter()
        .map(|row| {
            let value_style = if row.value == UNKNOWN {
                Styles::dimmed()
            } else {
                Styles::primary()
            };
            Line::from(vec![
                Span::styled(format!("{:width$}  ", row.label, width = width), Styles::secondary()),
                Span::styled(row.value.clone(), value_style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(Span::styled(format!(" {} ", card.title), Styles::title()));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
