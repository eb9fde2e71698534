//! Reusable component state helpers

mod controlled;
mod focus_visible;

pub(crate) use controlled::use_controlled_id;
pub use controlled::{use_controlled, Controlled};
pub use focus_visible::{use_focus_visible, FocusVisible, FOCUS_VISIBLE_TIMEOUT};
