//! Contact form with a simulated submission round-trip

use crate::constants::{FORM_SUBMIT_MS, MAX_FORM_FIELD_LENGTH};
use crate::scheduler::{Scheduler, TimerFired, TimerHandle, TimerKind};
use std::time::Duration;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Email Address",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    fn index(&self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Email => 1,
            FormField::Subject => 2,
            FormField::Message => 3,
        }
    }

    pub fn next(&self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> FormField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    values: [String; 4],
    focused: Option<FormField>,
    pending: Option<TimerHandle>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focus_next(&mut self) {
        self.focused = Some(self.focused.map_or(FormField::Name, |f| f.next()));
    }

    pub fn focus_previous(&mut self) {
        self.focused = Some(self.focused.map_or(FormField::Message, |f| f.previous()));
    }

    /// Label floats above the field while it is focused or holds text
    pub fn is_label_floating(&self, field: FormField) -> bool {
        self.focused == Some(field) || !self.value(field).is_empty()
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Type into the focused field; ignored while sending
    pub fn insert_char(&mut self, c: char) {
        if self.is_sending() {
            return;
        }
        if let Some(field) = self.focused {
            let value = &mut self.values[field.index()];
            if value.chars().count() < MAX_FORM_FIELD_LENGTH {
                value.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.is_sending() {
            return;
        }
        if let Some(field) = self.focused {
            self.values[field.index()].pop();
        }
    }

    /// Start the simulated submission; returns false if one is in flight
    pub fn submit(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.is_sending() {
            tracing::debug!("Form submission ignored, already sending");
            return false;
        }

        tracing::info!("Submitting contact form");
        self.pending = Some(scheduler.after(
            Duration::from_millis(FORM_SUBMIT_MS),
            TimerKind::FormSubmitted,
        ));
        true
    }

    /// Finish a submission; returns true when the form was sent and reset
    pub fn complete_submission(&mut self, fired: TimerFired) -> bool {
        let live = self.pending.as_ref().is_some_and(|h| h.is_for(&fired));
        if !live {
            return false;
        }

        tracing::info!("Contact form sent");
        self.pending = None;
        self.reset();
        true
    }

    fn reset(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        self.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.focus(FormField::Name);
        "Ada".chars().for_each(|c| form.insert_char(c));
        form.focus(FormField::Email);
        "ada@example.com".chars().for_each(|c| form.insert_char(c));
        form
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let form = filled_form();
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.value(FormField::Email), "ada@example.com");
        assert_eq!(form.value(FormField::Message), "");
    }

    #[test]
    fn test_label_floats_when_focused_or_filled() {
        let mut form = filled_form();
        form.blur();
        assert!(form.is_label_floating(FormField::Name));
        assert!(!form.is_label_floating(FormField::Subject));

        form.focus(FormField::Subject);
        assert!(form.is_label_floating(FormField::Subject));
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut form = ContactForm::new();
        form.focus_next();
        assert_eq!(form.focused(), Some(FormField::Name));
        form.focus_previous();
        assert_eq!(form.focused(), Some(FormField::Message));
        form.focus_next();
        assert_eq!(form.focused(), Some(FormField::Name));
    }

    #[test]
    fn test_submission_round_trip() {
        let mut scheduler = ManualScheduler::new();
        let mut form = filled_form();

        assert!(form.submit(&mut scheduler));
        assert_eq!(form.button_label(), SENDING_LABEL);
        assert!(!form.submit(&mut scheduler));

        form.insert_char('x');
        assert_eq!(form.value(FormField::Email), "ada@example.com");

        let mut fired = Vec::new();
        scheduler.advance(Duration::from_millis(FORM_SUBMIT_MS), |f| fired.push(f));
        assert_eq!(fired.len(), 1);

        assert!(form.complete_submission(fired[0]));
        assert_eq!(form.button_label(), SUBMIT_LABEL);
        assert_eq!(form.value(FormField::Name), "");
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut form = filled_form();
        form.focus(FormField::Name);
        form.backspace();
        assert_eq!(form.value(FormField::Name), "Ad");
    }

    #[test]
    fn test_field_length_is_capped() {
        let mut form = ContactForm::new();
        form.focus(FormField::Message);
        for _ in 0..(MAX_FORM_FIELD_LENGTH + 10) {
            form.insert_char('a');
        }
        assert_eq!(form.value(FormField::Message).len(), MAX_FORM_FIELD_LENGTH);
    }
}
