//! Portfolio footer component
//!
//! Renders key hints and the data source

use super::super::state::PortfolioView;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with key hints.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, view: &PortfolioView) {
    let footer_text = format!(
        "[1-3 ←→] Tabs | [↑↓] Scroll | [Enter] Expand/Collapse | [Q] Quit | {}",
        view.environment
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
