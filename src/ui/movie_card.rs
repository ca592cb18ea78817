//! One entry of the result list.

use crate::catalog::Movie;
use crate::ui::theme::{ACCENT, MUTED_TEXT, RATING_STAR, TITLE_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Rating to one decimal, or "N/A". A zero rating means "no votes yet".
pub fn rating_label(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(value) if value != 0.0 && value.is_finite() => format!("{:.1}", value),
        _ => "N/A".to_string(),
    }
}

/// Text before the first '-' of the release date, or "N/A".
pub fn release_year(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => date.split('-').next().unwrap_or(date).to_string(),
        _ => "N/A".to_string(),
    }
}

pub struct MovieCard<'a> {
    movie: &'a Movie,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self { movie }
    }

    pub const HEIGHT: usize = 3;

    /// Title line, details line and a blank separator.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let separator = Span::styled("  •  ", Style::default().fg(MUTED_TEXT));
        vec![
            Line::from(Span::styled(
                self.movie.title.clone(),
                Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("★ ", Style::default().fg(RATING_STAR)),
                Span::styled(
                    rating_label(self.movie.vote_average),
                    Style::default().fg(ACCENT),
                ),
                separator.clone(),
                Span::styled(
                    self.movie.original_language.clone(),
                    Style::default().fg(MUTED_TEXT),
                ),
                separator,
                Span::styled(
                    release_year(self.movie.release_date.as_deref()),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]),
            Line::from(""),
        ]
    }
}
