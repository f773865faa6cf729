//! Portfolio main renderer

use super::components::{footer, header, logs, panels, tabs, toggle};
use super::state::PortfolioView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Draws the whole portfolio screen. Takes the view mutably so the active
/// panel can keep its scroll offset in range.
pub fn render_portfolio(f: &mut Frame, view: &mut PortfolioView) {
    if view.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(3, 0, 20))),
            f.area(),
        );
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, chunks[0], view);
    tabs::render_tabs(f, chunks[1], view);
    panels::render_active_panel(f, chunks[2], view);
    toggle::render_toggle(f, chunks[3], view);
    logs::render_logs_panel(f, chunks[4], view);
    footer::render_footer(f, chunks[5], view);
}
