pub mod input_handler;
pub mod layout;
pub mod page;
pub mod widgets;

use crate::app::AppState;
use crate::error::Result;
use crate::scheduler::Scheduler;
use crossterm::event::KeyEvent;
use input_handler::InputHandler;

pub fn handle_key_event<S: Scheduler + Clone>(app: &mut AppState<S>, key: KeyEvent) -> Result<()> {
    InputHandler::handle_key(app, key)
}
