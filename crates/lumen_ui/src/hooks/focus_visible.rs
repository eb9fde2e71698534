//! Keyboard focus tracking
//!
//! Focus rings should only appear when focus arrived from the keyboard. How
//! focus arrived is a page-wide fact: Tab is pressed while the previous
//! control still has focus, so one tracker per hook store receives the key
//! and pointer events of every tracked element and records which element
//! holds a visible ring.
//!
//! A keydown without command modifiers marks keyboard modality; a pointer
//! down clears it. After a focus-visible element blurs, the "recently focus
//! visible" flag stays set for [`FOCUS_VISIBLE_TIMEOUT`] so that a window
//! switch and return restores the ring.
//!
//! Time is passed in by the caller so the timeout is deterministic.

use std::time::{Duration, Instant};

use lumen_core::{Modifiers, State};

use crate::context::BuildContext;

/// How long the "recently focus visible" flag outlives a blur
pub const FOCUS_VISIBLE_TIMEOUT: Duration = Duration::from_millis(100);

const HOOK_KEY: &str = "lumen:focus-visible";

#[derive(Clone, Debug, Default)]
pub struct FocusVisible {
    had_keyboard_event: bool,
    /// Key of the element showing a ring
    visible_on: Option<String>,
    recently_visible_until: Option<Instant>,
}

impl FocusVisible {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, modifiers: Modifiers) {
        if modifiers.meta() || modifiers.alt() || modifiers.ctrl() {
            return;
        }
        self.had_keyboard_event = true;
    }

    pub fn on_pointer_down(&mut self) {
        self.had_keyboard_event = false;
    }

    /// Focus arrived on `target`. `keyboard_target` is true for elements
    /// that always show a ring (text fields). Returns whether focus is
    /// visible.
    pub fn on_focus(&mut self, target: &str, keyboard_target: bool) -> bool {
        let visible = self.had_keyboard_event || keyboard_target;
        self.visible_on = visible.then(|| target.to_string());
        visible
    }

    /// Focus left `target`. Returns `true` when it had a visible ring.
    pub fn on_blur(&mut self, target: &str, now: Instant) -> bool {
        if self.visible_on.as_deref() != Some(target) {
            return false;
        }
        self.visible_on = None;
        self.recently_visible_until = Some(now + FOCUS_VISIBLE_TIMEOUT);
        true
    }

    /// The document became hidden; if a ring was showing recently, the next
    /// focus on return counts as keyboard focus.
    pub fn on_visibility_hidden(&mut self, now: Instant) {
        if self.had_focus_visible_recently(now) {
            self.had_keyboard_event = true;
        }
    }

    /// Whether any element shows a ring
    pub fn is_focus_visible(&self) -> bool {
        self.visible_on.is_some()
    }

    pub fn is_visible_on(&self, target: &str) -> bool {
        self.visible_on.as_deref() == Some(target)
    }

    pub fn had_keyboard_event(&self) -> bool {
        self.had_keyboard_event
    }

    pub fn had_focus_visible_recently(&self, now: Instant) -> bool {
        self.recently_visible_until
            .is_some_and(|deadline| now < deadline)
    }
}

/// The tracker shared by every element built against `cx`'s hook store
pub fn use_focus_visible(cx: &BuildContext) -> State<FocusVisible> {
    cx.use_state_keyed(HOOK_KEY, FocusVisible::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_focus_is_visible() {
        let mut fv = FocusVisible::new();
        fv.on_key_down(Modifiers::NONE);
        assert!(fv.on_focus("a", false));
        assert!(fv.is_visible_on("a"));
        assert!(!fv.is_visible_on("b"));
    }

    #[test]
    fn test_modality_carries_across_elements() {
        let start = Instant::now();
        let mut fv = FocusVisible::new();
        fv.on_key_down(Modifiers::NONE);
        fv.on_focus("a", false);
        // Tab pressed while "a" is focused moves focus to "b"
        fv.on_key_down(Modifiers::NONE);
        assert!(fv.on_blur("a", start));
        assert!(fv.on_focus("b", false));
        assert!(fv.is_visible_on("b"));
    }

    #[test]
    fn test_stale_blur_keeps_ring() {
        let mut fv = FocusVisible::new();
        fv.on_key_down(Modifiers::NONE);
        fv.on_focus("b", false);
        assert!(!fv.on_blur("a", Instant::now()));
        assert!(fv.is_visible_on("b"));
    }

    #[test]
    fn test_pointer_clears_keyboard_modality() {
        let mut fv = FocusVisible::new();
        fv.on_key_down(Modifiers::NONE);
        fv.on_pointer_down();
        assert!(!fv.on_focus("a", false));
        assert!(!fv.is_focus_visible());
        assert!(fv.on_focus("a", true));
    }

    #[test]
    fn test_command_modifiers_ignored() {
        let mut fv = FocusVisible::new();
        fv.on_key_down(Modifiers::new(false, true, false, false));
        fv.on_key_down(Modifiers::new(false, false, true, false));
        fv.on_key_down(Modifiers::new(false, false, false, true));
        assert!(!fv.had_keyboard_event());
        fv.on_key_down(Modifiers::new(true, false, false, false));
        assert!(fv.had_keyboard_event());
    }

    #[test]
    fn test_recent_flag_clears_after_timeout() {
        let start = Instant::now();
        let mut fv = FocusVisible::new();
        fv.on_key_down(Modifiers::NONE);
        fv.on_focus("a", false);
        assert!(fv.on_blur("a", start));
        assert!(!fv.is_focus_visible());

        assert!(fv.had_focus_visible_recently(start + Duration::from_millis(99)));
        assert!(!fv.had_focus_visible_recently(start + FOCUS_VISIBLE_TIMEOUT));
    }

    #[test]
    fn test_blur_without_ring_sets_nothing() {
        let start = Instant::now();
        let mut fv = FocusVisible::new();
        assert!(!fv.on_blur("a", start));
        assert!(!fv.had_focus_visible_recently(start));
    }

    #[test]
    fn test_visibility_restores_modality() {
        let start = Instant::now();
        let mut fv = FocusVisible::new();
        fv.on_key_down(Modifiers::NONE);
        fv.on_focus("a", false);
        fv.on_pointer_down();
        fv.on_blur("a", start);
        fv.on_visibility_hidden(start + Duration::from_millis(50));
        assert!(fv.on_focus("a", false));
    }

    #[test]
    fn test_visibility_after_timeout_is_ignored() {
        let start = Instant::now();
        let mut fv = FocusVisible::new();
        fv.on_key_down(Modifiers::NONE);
        fv.on_focus("a", false);
        fv.on_pointer_down();
        fv.on_blur("a", start);
        fv.on_visibility_hidden(start + FOCUS_VISIBLE_TIMEOUT);
        assert!(!fv.on_focus("a", false));
    }

    #[test]
    fn test_one_tracker_per_hook_store() {
        let cx = BuildContext::new();
        use_focus_visible(&cx).update(|fv| fv.on_key_down(Modifiers::NONE));
        assert!(use_focus_visible(&cx).with(FocusVisible::had_keyboard_event));
        assert!(!use_focus_visible(&BuildContext::new()).with(FocusVisible::had_keyboard_event));
    }
}
