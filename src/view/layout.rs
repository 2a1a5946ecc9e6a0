//! Layout rendering (top bar, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, UiState, ViewState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, view_state: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(22), // Listing status
        ])
        .split(area);

    let search_focused = ui_state.active_section == ActiveSection::Search;
    let search_style = if search_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_query.is_empty() {
        "Type to search movies..."
    } else {
        &ui_state.search_query
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if search_focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    let (status_text, status_color) = if view_state.is_loading {
        ("⏳ Loading...".to_string(), Color::Yellow)
    } else {
        (format!("🎬 {} movies", view_state.movies.len()), Color::Cyan)
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, chunks[1]);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let hints: &[(&str, &str)] = match ui_state.active_section {
        ActiveSection::Search => &[
            ("Type", "search"),
            ("Esc", "clear"),
            ("Tab", "results"),
            ("F1", "help"),
            ("Ctrl+C", "quit"),
        ],
        ActiveSection::Results => &[
            ("↑/↓", "select"),
            ("/", "search"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!(" {} ", key), Style::default().fg(Color::Black).bg(Color::Green)),
                Span::styled(format!(" {}  ", desc), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
