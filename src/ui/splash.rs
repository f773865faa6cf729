//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
 ___  ___  ___ _____ ___ ___  _    ___ ___
| _ \/ _ \| _ \_   _| __/ _ \| |  |_ _/ _ \
|  _/ (_) |   / | | | _| (_) | |__ | | (_) |
|_|  \___/|_|_\ |_| |_| \___/|____|___\___/
"#;

pub fn render_splash(f: &mut Frame) {
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::Rgb(139, 92, 246))
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));
    lines.push(
        Span::styled(
            format!("Showcase v{}  -  press any key", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    let logo_height = lines.len() as u16;
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(logo_height),
            Constraint::Fill(1),
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        vertical_chunks[1],
    );
}
