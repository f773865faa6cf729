//! Portfolio header component
//!
//! Renders the page title and subtitle

use super::super::state::PortfolioView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const SUBTITLE: &str = "Explore my journey through projects, certifications, and technical expertise. \
Each section represents a milestone in my continuous learning path.";

pub fn render_header(f: &mut Frame, area: Rect, view: &PortfolioView) {
    let mut title = vec![Span::styled(
        "PORTFOLIO SHOWCASE",
        Style::default()
            .fg(Color::Rgb(168, 85, 247))
            .add_modifier(Modifier::BOLD),
    )];
    if view.is_loading() {
        title.push(Span::styled(
            "  loading...",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(vec![
        Line::from(title),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}
