use crate::scheduler::TimerHandle;

/// Everything the carousel knows about itself
///
/// The item list is fixed at construction. `active_index` is `Some` exactly
/// when there is at least one item.
#[derive(Debug)]
pub struct CarouselState<T> {
    pub(super) items: Vec<T>,
    pub(super) active_index: Option<usize>,
    pub(super) autoplay_enabled: bool,
    pub(super) autoplay_handle: Option<TimerHandle>,
    pub(super) resume_handle: Option<TimerHandle>,
}

impl<T> CarouselState<T> {
    pub fn new(items: Vec<T>) -> Self {
        let active_index = if items.is_empty() { None } else { Some(0) };

        CarouselState {
            items,
            active_index,
            autoplay_enabled: true,
            autoplay_handle: None,
            resume_handle: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_item(&self) -> Option<&T> {
        self.active_index.and_then(|idx| self.items.get(idx))
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// A repeating autoplay timer is currently installed
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_handle.is_some()
    }

    /// A resume-after-delay timer is pending
    pub fn resume_pending(&self) -> bool {
        self.resume_handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_first_item() {
        let state = CarouselState::new(vec!["A", "B", "C"]);
        assert_eq!(state.active_index(), Some(0));
        assert_eq!(state.active_item(), Some(&"A"));
        assert!(state.autoplay_enabled());
        assert!(!state.is_autoplaying());
    }

    #[test]
    fn test_empty_state_has_no_active_item() {
        let state: CarouselState<&str> = CarouselState::new(Vec::new());
        assert!(state.is_empty());
        assert_eq!(state.active_index(), None);
        assert_eq!(state.active_item(), None);
    }
}
