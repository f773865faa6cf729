//! "See More" / "See Less" control

use super::super::state::{PortfolioView, Toggle};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Render the selected panel's toggle. Nothing is drawn when it has none.
pub fn render_toggle(f: &mut Frame, area: Rect, view: &PortfolioView) {
    let Some(toggle) = view.active_toggle() else {
        return;
    };
    let chevron = match toggle {
        Toggle::SeeMore => "▾",
        Toggle::SeeLess => "▴",
    };

    let line = Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} {}", toggle, chevron),
            Style::default()
                .fg(Color::Rgb(203, 213, 225))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
