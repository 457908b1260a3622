//! Interactive view state and the actions that change it.
//!
//! The event loop owns one [`AppState`] and mutates it only through
//! [`AppState::apply`]. Work that leaves the state (spawning or dropping a
//! background lookup) is returned as an [`Effect`] for the loop to perform.

use crate::facts::{build_sections, FactContext, Section, Tab};
use crate::probe::DeviceSnapshot;
use crate::update::{UpdateOutcome, UpdateState, CURRENT_VERSION};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    DismissSplash,
    NextTab,
    PrevTab,
    SelectTab(Tab),
    ScrollUp,
    ScrollDown,
    OpenAbout,
    CloseAbout,
    StartUpdateCheck,
    UpdateFinished(UpdateOutcome),
    PublicIpLoaded(String),
    RefreshRequested,
    Refresh(Box<DeviceSnapshot>),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnUpdateCheck,
    DiscardUpdateCheck,
    TakeSnapshot,
}

pub struct AppState {
    /// Title screen shown until the first key press or a short delay.
    pub splash: bool,
    pub tab: Tab,
    /// Index of the first visible card on the current tab.
    pub scroll: usize,
    pub about_open: bool,
    pub update: UpdateState,
    pub running: bool,
    /// Version shown in the About dialog and compared against releases.
    pub version: String,
    snapshot: DeviceSnapshot,
    context: FactContext,
    sections: Vec<Section>,
}

impl AppState {
    pub fn new(snapshot: DeviceSnapshot, context: FactContext) -> Self {
        let sections = build_sections(&snapshot, &context);
        Self {
            splash: true,
            tab: Tab::System,
            scroll: 0,
            about_open: false,
            update: UpdateState::Idle,
            running: true,
            version: CURRENT_VERSION.to_string(),
            snapshot,
            context,
            sections,
        }
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.tab == self.tab)
    }

    pub fn public_ip(&self) -> &str {
        &self.context.public_ip
    }

    fn rebuild(&mut self) {
        self.sections = build_sections(&self.snapshot, &self.context);
        self.clamp_scroll();
    }

    fn card_count(&self) -> usize {
        self.current_section().map(|s| s.cards.len()).unwrap_or(0)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.card_count().saturating_sub(1));
    }

    fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.scroll = 0;
        }
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::DismissSplash => self.splash = false,
            Action::NextTab => self.switch_tab(self.tab.next()),
            Action::PrevTab => self.switch_tab(self.tab.prev()),
            Action::SelectTab(tab) => self.switch_tab(tab),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => {
                self.scroll += 1;
                self.clamp_scroll();
            }
            Action::OpenAbout => {
                if !self.about_open {
                    self.about_open = true;
                    self.update = UpdateState::Idle;
                }
            }
            Action::CloseAbout => {
                if self.about_open {
                    self.about_open = false;
                    let in_flight = self.update == UpdateState::Checking;
                    self.update = UpdateState::Idle;
                    if in_flight {
                        return Effect::DiscardUpdateCheck;
                    }
                }
            }
            Action::StartUpdateCheck => {
                if self.about_open && self.update.begin() {
                    return Effect::SpawnUpdateCheck;
                }
            }
            Action::UpdateFinished(outcome) => {
                self.update.finish(outcome);
            }
            Action::PublicIpLoaded(ip) => {
                self.context.public_ip = ip;
                self.rebuild();
            }
            Action::RefreshRequested => return Effect::TakeSnapshot,
            Action::Refresh(snapshot) => {
                self.snapshot = *snapshot;
                self.rebuild();
            }
            Action::Quit => self.running = false,
        }
        Effect::None
    }
}
