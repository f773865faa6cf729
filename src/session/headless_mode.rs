//! Headless mode execution
//!
//! Mounts the view, waits for the fetch to settle and prints every panel as
//! plain text, following the same visibility rules as the TUI.

use super::SessionData;
use crate::print_cmd_info;
use crate::ui::portfolio::{PortfolioView, Tab};
use std::error::Error;
use std::fmt::Write;

/// Runs the application in headless mode
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let SessionData {
        source,
        store,
        event_sender,
        mut event_receiver,
        project_id,
    } = session;

    print_cmd_info!(
        "Headless mode",
        "project {} at {}",
        project_id,
        source.environment().firestore_url()
    );

    let mut view = PortfolioView::mount(source, store, event_sender, false);
    view.settle().await;

    while let Ok(event) = event_receiver.try_recv() {
        if event.should_display() {
            println!("{}", event);
        }
    }

    for tab in Tab::ALL {
        print!("{}", describe_panel(&view, tab));
    }

    view.unmount();
    Ok(())
}

/// Plain-text rendering of one panel.
pub fn describe_panel(view: &PortfolioView, tab: Tab) -> String {
    let mut out = String::new();
    match tab {
        Tab::Projects => {
            let _ = writeln!(
                out,
                "== {} ({} of {}) ==",
                tab,
                view.visible_projects().len(),
                view.projects().len()
            );
            for (i, project) in view.visible_projects().iter().enumerate() {
                let _ = writeln!(out, "{:>3}. {} - {}", i + 1, project.title, project.link);
            }
            if let Some(toggle) = view.projects_toggle() {
                let _ = writeln!(out, "     [{}]", toggle);
            }
        }
        Tab::Certificates => {
            let _ = writeln!(
                out,
                "== {} ({} of {}) ==",
                tab,
                view.visible_certificates().len(),
                view.certificates().len()
            );
            for (i, certificate) in view.visible_certificates().iter().enumerate() {
                let _ = writeln!(out, "{:>3}. {}", i + 1, certificate.img);
            }
            if let Some(toggle) = view.certificates_toggle() {
                let _ = writeln!(out, "     [{}]", toggle);
            }
        }
        Tab::TechStack => {
            let _ = writeln!(out, "== {} ({}) ==", tab, view.tech_stack().len());
            for entry in view.tech_stack() {
                let _ = writeln!(out, "     {} ({})", entry.label, entry.icon_file);
            }
        }
    }
    out
}
