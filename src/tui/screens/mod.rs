pub mod about;
pub mod facts;
pub mod splash;

use crate::tui::state::AppState;
use ratatui::Frame;

pub fn render(f: &mut Frame, app_state: &AppState) {
    if app_state.splash {
        splash::render(f);
        return;
    }
    facts::render(f, app_state);
    if app_state.about_open {
        about::render(f, app_state);
    }
}
