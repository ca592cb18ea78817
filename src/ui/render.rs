use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::movie_card::MovieCard;
use crate::ui::search::ResultView;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.query());
    frame.render_widget(header_widget.widget(), header);
    if header.width > 2 && header.height > 2 {
        let x = header.x + header_widget.cursor_offset().min(header.width - 2);
        frame.set_cursor_position((x, header.y + 1));
    }

    frame.render_widget(Clear, body);
    let (results_area, trending_area) = body_columns(body);
    draw_results(frame, app, results_area);
    if let Some(trending_area) = trending_area {
        draw_trending(frame, app, trending_area);
    }

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}

fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let search = app.search();
    let mut lines: Vec<Line> = Vec::new();

    match search.result_view() {
        ResultView::Loading => {
            lines.push(Line::from(Span::styled(
                format!("{} Loading…", app.spinner()),
                Style::default().fg(ACCENT),
            )));
        }
        ResultView::Error(message) => {
            lines.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(STATUS_ERROR),
            )));
        }
        ResultView::Results(movies) => {
            for movie in movies.iter().skip(search.scroll) {
                lines.extend(MovieCard::new(movie).lines());
            }
        }
    }

    if let Some(message) = search.no_matches_message() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message,
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let title = format!(" {} ", search.heading());
    let widget = Paragraph::new(lines)
        .block(panel(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn draw_trending(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let trending = app.trending();
    let mut lines: Vec<Line> = Vec::new();

    if trending.records.is_empty() {
        let text = if trending.is_loading {
            "Loading…"
        } else {
            "No trending searches yet"
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        for (idx, record) in trending.records.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", idx + 1),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(record.search_term.clone(), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("  ×{}", record.count),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]));
        }
    }

    let title = if trending.is_loading {
        format!(" Trending {} ", app.spinner())
    } else {
        format!(" Top {} Trending ", app.trending_limit())
    };
    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}
