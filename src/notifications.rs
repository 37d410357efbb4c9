//! Toast notifications

use crate::constants::NOTIFICATION_LIFETIME_MS;
use crate::scheduler::{Scheduler, TimerFired, TimerHandle, TimerKind};
use chrono::{DateTime, Local};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Icon name shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-triangle",
            NotificationKind::Warning => "exclamation-circle",
            NotificationKind::Info => "info-circle",
        }
    }

    /// Single-cell glyph used when drawing the toast
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "i",
        }
    }
}

#[derive(Debug)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: DateTime<Local>,
    // Auto-dismiss timer; dropped along with the toast
    _expiry: TimerHandle,
}

impl Notification {
    /// Border title: icon name and the time the toast appeared
    pub fn title(&self) -> String {
        format!(" {} {} ", self.kind.icon(), self.shown_at.format("%H:%M:%S"))
    }
}

/// Stack of visible toasts, newest last
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Display a toast that dismisses itself after its lifetime
    pub fn show(
        &mut self,
        scheduler: &mut impl Scheduler,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let message = message.into();
        tracing::info!("Notification [{}] {}: {}", id, kind.icon(), message);

        let expiry = scheduler.after(
            Duration::from_millis(NOTIFICATION_LIFETIME_MS),
            TimerKind::DismissNotification(id),
        );
        self.items.push(Notification {
            id,
            message,
            kind,
            shown_at: Local::now(),
            _expiry: expiry,
        });
        id
    }

    /// Remove a toast; returns false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!("Notification [{}] dismissed", id);
        }
        removed
    }

    /// Close the most recent toast
    pub fn dismiss_latest(&mut self) -> bool {
        match self.items.last().map(|n| n.id) {
            Some(id) => self.dismiss(id),
            None => false,
        }
    }

    pub fn handle_timer(&mut self, fired: TimerFired) {
        if let TimerKind::DismissNotification(id) = fired.kind {
            self.dismiss(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn test_icons_match_kind() {
        assert_eq!(NotificationKind::Success.icon(), "check-circle");
        assert_eq!(NotificationKind::Error.icon(), "exclamation-triangle");
        assert_eq!(NotificationKind::Warning.icon(), "exclamation-circle");
        assert_eq!(NotificationKind::Info.icon(), "info-circle");
    }

    #[test]
    fn test_notification_expires_after_lifetime() {
        let mut scheduler = ManualScheduler::new();
        let mut center = NotificationCenter::new();
        center.show(&mut scheduler, "Message sent successfully!", NotificationKind::Success);

        let mut fired = Vec::new();
        scheduler.advance(Duration::from_millis(4999), |f| fired.push(f));
        assert!(fired.is_empty());

        scheduler.advance(Duration::from_millis(1), |f| fired.push(f));
        for f in fired {
            center.handle_timer(f);
        }
        assert!(center.is_empty());
    }

    #[test]
    fn test_manual_dismiss_cancels_expiry() {
        let mut scheduler = ManualScheduler::new();
        let mut center = NotificationCenter::new();
        let id = center.show(&mut scheduler, "hello", NotificationKind::Info);

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_dismiss_latest_removes_newest() {
        let mut scheduler = ManualScheduler::new();
        let mut center = NotificationCenter::new();
        center.show(&mut scheduler, "first", NotificationKind::Info);
        center.show(&mut scheduler, "second", NotificationKind::Warning);

        assert!(center.dismiss_latest());
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "first");
    }

    #[test]
    fn test_stale_expiry_is_harmless() {
        let mut scheduler = ManualScheduler::new();
        let mut center = NotificationCenter::new();
        let id = center.show(&mut scheduler, "gone", NotificationKind::Error);
        center.dismiss(id);

        center.handle_timer(TimerFired {
            id: crate::scheduler::TimerId::new(99),
            kind: TimerKind::DismissNotification(id),
        });
        assert!(center.is_empty());
    }

    #[test]
    fn test_title_carries_icon_name() {
        let mut scheduler = ManualScheduler::new();
        let mut center = NotificationCenter::new();
        center.show(&mut scheduler, "Selected Pro plan!", NotificationKind::Success);
        center.show(&mut scheduler, "Redirecting...", NotificationKind::Info);

        let titles: Vec<String> = center.items().iter().map(|n| n.title()).collect();
        assert!(titles[0].starts_with(" check-circle "));
        assert!(titles[1].starts_with(" info-circle "));
    }
}
