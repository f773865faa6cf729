//! Portfolio view state
//!
//! `ViewState` holds what the user controls (selected tab, expanded lists);
//! `PortfolioView` adds the fetched collections and the fetch it started on mount.

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, pagination::TRUNCATED_LEN};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::firestore::DocumentSource;
use crate::model::{Certificate, Project, TECH_STACK, TechStackEntry};
use crate::store::LocalStore;
use crate::workers::fetcher::FetchPoll;
use crate::workers::{EventSender, MountedFetch, PortfolioData, spawn_initial_fetch};
use std::collections::VecDeque;
use std::fmt::Display;
use std::sync::Arc;

/// The three tab panels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Tab {
    #[default]
    Projects,
    Certificates,
    #[strum(serialize = "Tech Stack")]
    TechStack,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Projects, Tab::Certificates, Tab::TechStack];

    pub fn index(self) -> usize {
        match self {
            Tab::Projects => 0,
            Tab::Certificates => 1,
            Tab::TechStack => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    /// Swipe towards the first tab; stays put at the edge.
    pub fn previous(self) -> Tab {
        Tab::from_index(self.index().saturating_sub(1)).unwrap_or(self)
    }

    /// Swipe towards the last tab; stays put at the edge.
    pub fn next(self) -> Tab {
        Tab::from_index(self.index() + 1).unwrap_or(self)
    }

    pub fn cycle_next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn cycle_previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Short glyph shown before the tab title.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Projects => "</>",
            Tab::Certificates => "*",
            Tab::TechStack => "[#]",
        }
    }
}

/// The expand/collapse control under a paginated panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    SeeMore,
    SeeLess,
}

impl Display for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Toggle::SeeMore => write!(f, "See More"),
            Toggle::SeeLess => write!(f, "See Less"),
        }
    }
}

/// Either the first `TRUNCATED_LEN` entries or all of them.
pub fn visible_slice<T>(items: &[T], show_all: bool) -> &[T] {
    if show_all {
        items
    } else {
        &items[..items.len().min(TRUNCATED_LEN)]
    }
}

/// The control is only offered when there is something to hide.
pub fn toggle_for(len: usize, show_all: bool) -> Option<Toggle> {
    if len <= TRUNCATED_LEN {
        None
    } else if show_all {
        Some(Toggle::SeeLess)
    } else {
        Some(Toggle::SeeMore)
    }
}

/// User-controlled view state. Starts on the projects tab with both lists collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    selected_tab: Tab,
    show_all_projects: bool,
    show_all_certificates: bool,
    /// First row of the active panel on screen, when it overflows.
    scroll: u16,
}

impl ViewState {
    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn show_all_projects(&self) -> bool {
        self.show_all_projects
    }

    pub fn show_all_certificates(&self) -> bool {
        self.show_all_certificates
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.selected_tab != tab {
            self.scroll = 0;
        }
        self.selected_tab = tab;
    }

    pub fn is_panel_visible(&self, tab: Tab) -> bool {
        self.selected_tab == tab
    }

    pub fn expand_projects(&mut self) {
        self.show_all_projects = true;
    }

    pub fn collapse_projects(&mut self) {
        self.show_all_projects = false;
        self.scroll = 0;
    }

    pub fn expand_certificates(&mut self) {
        self.show_all_certificates = true;
    }

    pub fn collapse_certificates(&mut self) {
        self.show_all_certificates = false;
        self.scroll = 0;
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Keeps the offset within what the panel can actually scroll.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}

/// Input the view reacts to, already decoded from keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    SelectTab(Tab),
    SwipePrevious,
    SwipeNext,
    CycleNext,
    CyclePrevious,
    /// Press the toggle of the visible panel, if it has one.
    ActivateToggle,
    ScrollUp,
    ScrollDown,
}

#[derive(Debug)]
pub struct PortfolioView {
    state: ViewState,
    projects: Vec<Project>,
    certificates: Vec<Certificate>,
    /// The fetch started on mount, until it settles or the view unmounts.
    fetch: Option<MountedFetch>,
    /// The endpoint the data comes from.
    pub environment: Environment,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to paint the background
    pub with_background_color: bool,
}

impl PortfolioView {
    /// A view with no data and no fetch in flight.
    pub fn new(environment: Environment, with_background_color: bool) -> Self {
        Self {
            state: ViewState::default(),
            projects: Vec::new(),
            certificates: Vec::new(),
            fetch: None,
            environment,
            activity_logs: VecDeque::new(),
            with_background_color,
        }
    }

    /// Mounts the view: state starts at its defaults and the one-time fetch
    /// is started. The view renders empty lists until the fetch delivers.
    pub fn mount(
        source: Arc<dyn DocumentSource>,
        store: LocalStore,
        events: EventSender,
        with_background_color: bool,
    ) -> Self {
        let mut view = Self::new(source.environment().clone(), with_background_color);
        view.fetch = Some(spawn_initial_fetch(source, store, events));
        view
    }

    /// Applies the fetch result if it has arrived. Returns true when data was applied.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(fetch) = self.fetch.as_mut() else {
            return false;
        };
        match fetch.poll() {
            FetchPoll::Pending => false,
            FetchPoll::Ready(data) => {
                self.fetch = None;
                self.apply_data(data);
                true
            }
            FetchPoll::Finished => {
                self.fetch = None;
                false
            }
        }
    }

    /// Waits until the fetch has settled, then applies its result.
    pub async fn settle(&mut self) -> bool {
        if let Some(fetch) = self.fetch.as_mut() {
            fetch.finished().await;
        }
        self.poll_fetch()
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_some()
    }

    /// Cancels an unfinished fetch so its result is never applied.
    pub fn unmount(&mut self) {
        if let Some(mut fetch) = self.fetch.take() {
            fetch.cancel();
        }
    }

    pub(crate) fn apply_data(&mut self, data: PortfolioData) {
        self.projects = data.projects;
        self.certificates = data.certificates;
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selected_tab(&self) -> Tab {
        self.state.selected_tab()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.state.select_tab(tab);
    }

    pub fn expand_projects(&mut self) {
        self.state.expand_projects();
    }

    pub fn collapse_projects(&mut self) {
        self.state.collapse_projects();
    }

    pub fn expand_certificates(&mut self) {
        self.state.expand_certificates();
    }

    pub fn collapse_certificates(&mut self) {
        self.state.collapse_certificates();
    }

    pub fn scroll_offset(&self) -> u16 {
        self.state.scroll_offset()
    }

    pub(crate) fn clamp_scroll(&mut self, max: u16) {
        self.state.clamp_scroll(max);
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn visible_projects(&self) -> &[Project] {
        visible_slice(&self.projects, self.state.show_all_projects())
    }

    pub fn visible_certificates(&self) -> &[Certificate] {
        visible_slice(&self.certificates, self.state.show_all_certificates())
    }

    pub fn projects_toggle(&self) -> Option<Toggle> {
        toggle_for(self.projects.len(), self.state.show_all_projects())
    }

    pub fn certificates_toggle(&self) -> Option<Toggle> {
        toggle_for(self.certificates.len(), self.state.show_all_certificates())
    }

    pub fn tech_stack(&self) -> &'static [TechStackEntry] {
        &TECH_STACK
    }

    /// The toggle of the selected panel. Hidden panels expose nothing.
    pub fn active_toggle(&self) -> Option<Toggle> {
        match self.selected_tab() {
            Tab::Projects => self.projects_toggle(),
            Tab::Certificates => self.certificates_toggle(),
            Tab::TechStack => None,
        }
    }

    pub fn perform(&mut self, action: ViewAction) {
        let current = self.selected_tab();
        match action {
            ViewAction::SelectTab(tab) => self.select_tab(tab),
            ViewAction::SwipePrevious => self.select_tab(current.previous()),
            ViewAction::SwipeNext => self.select_tab(current.next()),
            ViewAction::CycleNext => self.select_tab(current.cycle_next()),
            ViewAction::CyclePrevious => self.select_tab(current.cycle_previous()),
            ViewAction::ActivateToggle => match (current, self.active_toggle()) {
                (Tab::Projects, Some(Toggle::SeeMore)) => self.expand_projects(),
                (Tab::Projects, Some(Toggle::SeeLess)) => self.collapse_projects(),
                (Tab::Certificates, Some(Toggle::SeeMore)) => self.expand_certificates(),
                (Tab::Certificates, Some(Toggle::SeeLess)) => self.collapse_certificates(),
                _ => {}
            },
            ViewAction::ScrollUp => self.state.scroll_up(),
            ViewAction::ScrollDown => self.state.scroll_down(),
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

impl Drop for PortfolioView {
    fn drop(&mut self) {
        self.unmount();
    }
}
