//! Card widgets
//!
//! Pure presentation of a single project, certificate or tech stack entry.

use crate::model::{Certificate, Project, TechStackEntry};
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

fn card_block<'a>(title: String, accent: Color) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
}

/// Project card: title, description, link, tech stack and details id.
pub fn project_card(project: &Project) -> Paragraph<'_> {
    let mut lines = vec![Line::from(Span::styled(
        project.description.as_str(),
        Style::default().fg(Color::Gray),
    ))];
    if !project.link.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Live Demo ", Style::default().fg(Color::LightBlue)),
            Span::styled(project.link.as_str(), Style::default().fg(Color::DarkGray)),
        ]));
    }
    if !project.tech_stack.is_empty() {
        lines.push(Line::from(Span::styled(
            project.tech_stack.join(" · "),
            Style::default().fg(Color::LightMagenta),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Details #{}", project.id),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    Paragraph::new(lines)
        .block(card_block(format!(" {} ", project.title), Color::Magenta))
        .wrap(Wrap { trim: true })
}

/// Certificate card. Certificates are numbered by position.
pub fn certificate_card(position: usize, certificate: &Certificate) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        certificate.img.as_str(),
        Style::default().fg(Color::DarkGray),
    )))
    .block(card_block(
        format!(" Certificate {} ", position + 1),
        Color::Yellow,
    ))
    .wrap(Wrap { trim: true })
}

/// Tech stack tile: label with the icon file underneath.
pub fn tech_icon(entry: &TechStackEntry) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            entry.label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            entry.icon_file,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(99, 102, 241))),
    )
}
