//! Tab panels
//!
//! Only the selected panel is ever rendered. Entries are drawn as a card grid
//! when every row fits, otherwise as one line each; lines that still overflow
//! the area scroll, with a scrollbar on the right.

use super::super::state::{PortfolioView, Tab};
use super::super::utils::{grid_cells, grid_height};
use super::cards::{certificate_card, project_card, tech_icon};
use crate::consts::cli_consts::layout::{
    CERTIFICATE_CARD_HEIGHT, CERTIFICATE_COLUMNS, PROJECT_CARD_HEIGHT, PROJECT_COLUMNS,
    TECH_ICON_HEIGHT, TECH_STACK_COLUMNS,
};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

pub fn render_active_panel(f: &mut Frame, area: Rect, view: &mut PortfolioView) {
    for tab in Tab::ALL {
        if view.state().is_panel_visible(tab) {
            render_panel(f, area, view, tab);
        }
    }
}

fn render_panel(f: &mut Frame, area: Rect, view: &mut PortfolioView, tab: Tab) {
    let (count, columns, cell_height) = match tab {
        Tab::Projects => (
            view.visible_projects().len(),
            PROJECT_COLUMNS,
            PROJECT_CARD_HEIGHT,
        ),
        Tab::Certificates => (
            view.visible_certificates().len(),
            CERTIFICATE_COLUMNS,
            CERTIFICATE_CARD_HEIGHT,
        ),
        Tab::TechStack => (view.tech_stack().len(), TECH_STACK_COLUMNS, TECH_ICON_HEIGHT),
    };

    if grid_height(count, columns, cell_height) <= area.height {
        view.clamp_scroll(0);
        render_grid(f, area, view, tab, columns, cell_height);
        return;
    }

    let total = match tab {
        Tab::TechStack => count.div_ceil(columns),
        _ => count,
    };
    let max_offset = u16::try_from(total.saturating_sub(area.height as usize)).unwrap_or(u16::MAX);
    view.clamp_scroll(max_offset);
    render_lines(f, area, view, tab, total);
}

fn render_grid(
    f: &mut Frame,
    area: Rect,
    view: &PortfolioView,
    tab: Tab,
    columns: usize,
    cell_height: u16,
) {
    match tab {
        Tab::Projects => {
            let projects = view.visible_projects();
            let cells = grid_cells(area, projects.len(), columns, cell_height);
            for (project, cell) in projects.iter().zip(cells) {
                f.render_widget(project_card(project), cell);
            }
        }
        Tab::Certificates => {
            let certificates = view.visible_certificates();
            let cells = grid_cells(area, certificates.len(), columns, cell_height);
            for (position, (certificate, cell)) in certificates.iter().zip(cells).enumerate() {
                f.render_widget(certificate_card(position, certificate), cell);
            }
        }
        Tab::TechStack => {
            let entries = view.tech_stack();
            let cells = grid_cells(area, entries.len(), columns, cell_height);
            for (entry, cell) in entries.iter().zip(cells) {
                f.render_widget(tech_icon(entry), cell);
            }
        }
    }
}

/// One line per entry (per row of labels for the tech stack).
fn compact_lines(view: &PortfolioView, tab: Tab, width: u16) -> Vec<Line<'_>> {
    match tab {
        Tab::Projects => view
            .visible_projects()
            .iter()
            .map(|project| {
                Line::from(vec![
                    Span::styled("▸ ", Style::default().fg(Color::Magenta)),
                    Span::styled(
                        project.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" - "),
                    Span::styled(project.link.as_str(), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect(),
        Tab::Certificates => view
            .visible_certificates()
            .iter()
            .enumerate()
            .map(|(position, certificate)| {
                Line::from(vec![
                    Span::styled(
                        format!("★ Certificate {}  ", position + 1),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        certificate.img.as_str(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect(),
        Tab::TechStack => {
            let column_width = (width as usize / TECH_STACK_COLUMNS).max(1);
            view.tech_stack()
                .chunks(TECH_STACK_COLUMNS)
                .map(|row| {
                    Line::from(
                        row.iter()
                            .map(|entry| {
                                Span::styled(
                                    format!("{:<width$}", entry.label, width = column_width),
                                    Style::default().fg(Color::White),
                                )
                            })
                            .collect::<Vec<_>>(),
                    )
                })
                .collect()
        }
    }
}

fn render_lines(f: &mut Frame, area: Rect, view: &PortfolioView, tab: Tab, total: usize) {
    let overflows = total > area.height as usize;
    let text_area = if overflows {
        Rect {
            width: area.width.saturating_sub(1),
            ..area
        }
    } else {
        area
    };

    let offset = view.scroll_offset();
    f.render_widget(
        Paragraph::new(compact_lines(view, tab, text_area.width)).scroll((offset, 0)),
        text_area,
    );

    if overflows {
        let mut scrollbar_state = ScrollbarState::new(total)
            .position(offset as usize)
            .viewport_content_length(area.height as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼")),
            area,
            &mut scrollbar_state,
        );
    }
}
