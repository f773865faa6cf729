//! Tab bar component

use super::super::state::{PortfolioView, Tab};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Tabs};

/// Render the three tabs with the selected one highlighted.
pub fn render_tabs(f: &mut Frame, area: Rect, view: &PortfolioView) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} {} ", tab.icon(), tab)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(view.selected_tab().index())
        .style(Style::default().fg(Color::Rgb(148, 163, 184)))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(76, 29, 149))
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, area);
}
