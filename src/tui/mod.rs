//! Interactive terminal view.
//!
//! The loop draws the current [`AppState`], turns key presses and finished
//! background lookups into [`Action`]s, and performs the [`Effect`]s the
//! state hands back.

pub mod screens;
pub mod state;
pub mod theme;

use crate::config::Config;
use crate::debug_log::inspector_log;
use crate::facts::{FactContext, Tab};
use crate::probe::{DeviceProbe, HostProbe};
use crate::public_ip::{spawn_public_ip_lookup, LOADING};
use crate::update::{spawn_update_check, UpdateOutcome};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use state::{Action, AppState, Effect};
use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(200);
const SPLASH_DURATION: Duration = Duration::from_millis(1800);

/// Map a key press to an action. The splash screen and the About dialog
/// capture keys while shown.
pub fn map_key(app_state: &AppState, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app_state.splash {
        return Some(Action::DismissSplash);
    }

    if app_state.about_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('q') => Some(Action::CloseAbout),
            KeyCode::Char('u') | KeyCode::Enter => Some(Action::StartUpdateCheck),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextTab),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevTab),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Char('i') => Some(Action::OpenAbout),
        KeyCode::Char('r') => Some(Action::RefreshRequested),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Tab::ALL.get(index).map(|tab| Action::SelectTab(*tab))
        }
        _ => None,
    }
}

/// Poll a one-shot channel. Returns the value once and drops the receiver
/// when it is delivered or the sender is gone.
fn poll_once<T>(slot: &mut Option<Receiver<T>>) -> Option<T> {
    let result = match slot.as_ref()?.try_recv() {
        Ok(value) => Some(value),
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Disconnected) => None,
    };
    *slot = None;
    result
}

pub fn run(config: &Config) -> Result<()> {
    inspector_log("starting interactive view");

    let mut probe = HostProbe::new();
    let context = FactContext {
        public_ip: LOADING.to_string(),
        mac_interface: config.network.mac_interface.clone(),
        low_memory_threshold: config.low_memory_threshold_bytes(),
    };
    let mut app_state = AppState::new(probe.snapshot(), context);
    app_state.version = config.update.current_version.clone();

    let mut public_ip_rx = Some(spawn_public_ip_lookup(
        config.network.public_ip_url.clone(),
        config.http_options(),
    ));
    let mut update_rx: Option<Receiver<UpdateOutcome>> = None;

    let started = Instant::now();
    let mut terminal = ratatui::init();
    let result = (|| -> Result<()> {
        while app_state.running {
            terminal.draw(|f| screens::render(f, &app_state))?;

            let mut actions = VecDeque::new();
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        actions.extend(map_key(&app_state, key));
                    }
                }
            }
            if app_state.splash && started.elapsed() >= SPLASH_DURATION {
                actions.push_back(Action::DismissSplash);
            }
            if let Some(ip) = poll_once(&mut public_ip_rx) {
                actions.push_back(Action::PublicIpLoaded(ip));
            }
            if let Some(outcome) = poll_once(&mut update_rx) {
                actions.push_back(Action::UpdateFinished(outcome));
            }

            while let Some(action) = actions.pop_front() {
                match app_state.apply(action) {
                    Effect::None => {}
                    Effect::SpawnUpdateCheck => {
                        update_rx = Some(spawn_update_check(
                            config.update.release_url.clone(),
                            app_state.version.clone(),
                            config.http_options(),
                        ));
                    }
                    Effect::DiscardUpdateCheck => update_rx = None,
                    Effect::TakeSnapshot => {
                        actions.push_back(Action::Refresh(Box::new(probe.snapshot())));
                    }
                }
            }
        }
        Ok(())
    })();
    ratatui::restore();

    inspector_log("interactive view closed");
    result
}
