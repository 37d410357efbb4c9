use crate::app::AppState;
use crate::carousel::ManualControl;
use crate::content::SectionId;
use crate::error::Result;
use crate::scheduler::Scheduler;
use crate::types::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key<S: Scheduler + Clone>(app: &mut AppState<S>, key: KeyEvent) -> Result<()> {
        // Ctrl-c always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            app.should_quit = true;
            return Ok(());
        }

        // Route input based on UI mode
        match app.ui_mode {
            UiMode::Intro => Self::handle_intro(app, key),
            UiMode::Help => Self::handle_help(app, key),
            UiMode::FormEditing => Self::handle_form(app, key),
            UiMode::Normal => Self::handle_page(app, key),
        }
    }

    fn handle_intro<S: Scheduler + Clone>(app: &mut AppState<S>, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('q') {
            app.should_quit = true;
        }
        Ok(())
    }

    fn handle_help<S: Scheduler + Clone>(app: &mut AppState<S>, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => app.toggle_help(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        Ok(())
    }

    fn handle_form<S: Scheduler + Clone>(app: &mut AppState<S>, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => app.close_contact_form(),
            KeyCode::Tab | KeyCode::Down => app.contact_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.contact_form.focus_previous(),
            KeyCode::Enter => app.submit_contact_form(),
            KeyCode::Backspace => app.contact_form.backspace(),
            KeyCode::Char(c) => app.contact_form.insert_char(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_page<S: Scheduler + Clone>(app: &mut AppState<S>, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => {
                app.should_quit = true;
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                app.toggle_help();
            }

            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
            KeyCode::Char(' ') if key.modifiers.contains(KeyModifiers::SHIFT) => app.page_up(),
            KeyCode::Char(' ') | KeyCode::PageDown => app.page_down(),
            KeyCode::PageUp => app.page_up(),
            KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),

            // Carousel indicators with Alt+digit (must come before nav links)
            KeyCode::Char(c @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
                let index = c as usize - '1' as usize;
                app.carousel_control(ManualControl::Indicator(index))?;
            }

            // Nav links
            KeyCode::Char(c @ '1'..='6') => {
                let section = SectionId::ALL[c as usize - '1' as usize];
                app.jump_to_section(section);
            }

            // Carousel
            KeyCode::Char('h') | KeyCode::Left => {
                app.carousel_control(ManualControl::Previous)?;
            }
            KeyCode::Char('l') | KeyCode::Right => {
                app.carousel_control(ManualControl::Next)?;
            }

            // Calls to action
            KeyCode::Char('o') => app.order_now(),
            KeyCode::Char('m') => app.learn_more(),
            KeyCode::Char('p') => app.select_next_plan(),
            KeyCode::Char('P') => app.select_previous_plan(),
            KeyCode::Enter => app.choose_plan(),
            KeyCode::Char('c') => app.open_contact_form(),

            // Chrome
            KeyCode::Char('d') => app.toggle_dark_mode(),
            KeyCode::Char('x') | KeyCode::Esc => {
                app.notifications.dismiss_latest();
            }

            _ => {}
        }
        Ok(())
    }
}
