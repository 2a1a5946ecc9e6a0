//! Main content area rendering (movie list, skeleton rows, details pane)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, Movie, UiState, ViewState};
use super::utils::{calculate_num_width, render_scrollable_list, skeleton_bar, truncate_string};

const SKELETON_ROWS: usize = 8;

pub fn render_movie_list(frame: &mut Frame, area: Rect, ui_state: &UiState, view_state: &ViewState) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_state.listing.title())
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    let content_width = area.width.saturating_sub(4) as usize;

    if view_state.is_loading {
        let rows: Vec<ListItem> = (0..SKELETON_ROWS)
            .map(|row| {
                ListItem::new(skeleton_bar(row, content_width))
                    .style(Style::default().fg(Color::DarkGray))
            })
            .collect();
        frame.render_widget(List::new(rows).block(block), area);
        return;
    }

    if view_state.movies.is_empty() {
        let empty = Paragraph::new("  No movies found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items = render_movie_items(&view_state.movies, ui_state.selected, is_focused, content_width);
    // +1 for header row
    render_scrollable_list(frame, area, items, ui_state.selected + 1, block);
}

fn render_movie_items(
    movies: &[Movie],
    selected: usize,
    is_focused: bool,
    content_width: usize,
) -> Vec<ListItem<'static>> {
    let num_width = calculate_num_width(movies.len());
    let year_width = 4;
    let rating_width = 6;
    let fixed_width = num_width + 3 + 3 + year_width + 3 + rating_width;
    let title_width = content_width.saturating_sub(fixed_width);

    let mut items = vec![
        ListItem::new(format!(
            "{:<num_width$}   {:<title_width$}   {:<year_width$}   {:>rating_width$}",
            "#", "Title", "Year", "Rating",
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ];

    items.extend(movies.iter().enumerate().map(|(i, movie)| {
        let style = if i == selected && is_focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if i == selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let year = movie
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());

        ListItem::new(format!(
            "{:<num_width$}   {}   {:<year_width$}   {:>rating_width$}",
            i + 1,
            truncate_string(&movie.title, title_width),
            year,
            format!("★ {}", movie.rating_label()),
        ))
        .style(style)
    }));

    items
}

pub fn render_movie_details(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    view_state: &ViewState,
    image_base_url: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .padding(Padding::horizontal(1));

    let movie = if view_state.is_loading {
        None
    } else {
        view_state.movies.get(ui_state.selected)
    };

    let Some(movie) = movie else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let year = movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let poster = movie
        .poster_url(image_base_url)
        .unwrap_or_else(|| "No poster".to_string());
    let overview = movie
        .overview
        .as_deref()
        .filter(|o| !o.trim().is_empty())
        .unwrap_or("No overview available.");

    let lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Released  ", label), Span::raw(year)]),
        Line::from(vec![
            Span::styled("Rating    ", label),
            Span::styled(format!("★ {}", movie.rating_label()), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![Span::styled("Poster    ", label), Span::raw(poster)]),
        Line::from(""),
        Line::from(overview.to_string()),
    ];

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(details, area);
}
