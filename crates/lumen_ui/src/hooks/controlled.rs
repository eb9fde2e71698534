//! Controlled/uncontrolled values
//!
//! A component value is either owned by the caller (a prop plus a change
//! callback) or by the component itself (keyed hook state). [`Controlled`]
//! hides the difference from the component body.

use std::fmt;

use lumen_core::State;

use crate::context::BuildContext;

/// A value that is either controlled by a prop or owned internally
#[derive(Clone)]
pub struct Controlled<T> {
    controlled: Option<T>,
    internal: State<T>,
}

impl<T: Clone + Send + Sync + 'static> Controlled<T> {
    /// A value with no hook slot behind it; uncontrolled writes last only as
    /// long as this handle
    pub fn detached(controlled: Option<T>, default: T) -> Self {
        Self {
            controlled,
            internal: State::new(default),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        match &self.controlled {
            Some(value) => value.clone(),
            None => self.internal.get(),
        }
    }

    /// Record a new value. Only uncontrolled values change here; controlled
    /// ones wait for the owner to pass the new prop.
    pub fn set(&self, value: T) {
        if self.controlled.is_none() {
            self.internal.set(value);
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }
}

impl<T: fmt::Debug + Clone + Send + Sync + 'static> fmt::Debug for Controlled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controlled")
            .field("controlled", &self.controlled.is_some())
            .field("value", &self.get())
            .finish()
    }
}

/// Resolve a controlled prop against keyed internal state.
///
/// `default` seeds the internal state on first use. Switching a component
/// between controlled and uncontrolled is logged at `warn`.
pub fn use_controlled<T>(
    cx: &BuildContext,
    key: &str,
    controlled: Option<T>,
    default: T,
) -> Controlled<T>
where
    T: Clone + Send + Sync + 'static,
{
    let was_controlled = cx.use_state_keyed(&format!("{key}#controlled"), || controlled.is_some());
    if was_controlled.get() != controlled.is_some() {
        tracing::warn!(
            "component {key:?} is changing from {} to {}; elements should not switch between controlled and uncontrolled",
            if was_controlled.get() { "controlled" } else { "uncontrolled" },
            if controlled.is_some() { "controlled" } else { "uncontrolled" },
        );
        was_controlled.set(controlled.is_some());
    }

    let internal = cx.use_state_keyed(key, || default);
    Controlled {
        controlled,
        internal,
    }
}

/// [`use_controlled`] keyed by component name and element id. Without an id
/// there is no slot to key on and the value is detached.
pub(crate) fn use_controlled_id<T>(
    cx: &BuildContext,
    component: &str,
    id: Option<&str>,
    controlled: Option<T>,
    default: T,
) -> Controlled<T>
where
    T: Clone + Send + Sync + 'static,
{
    match id {
        Some(id) => use_controlled(cx, &format!("{component}:{id}"), controlled, default),
        None => Controlled::detached(controlled, default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_keeps_value() {
        let cx = BuildContext::new();
        let value = use_controlled(&cx, "v", None, 1);
        value.set(5);
        assert_eq!(use_controlled(&cx, "v", None, 1).get(), 5);
    }

    #[test]
    fn test_controlled_ignores_set() {
        let cx = BuildContext::new();
        let value = use_controlled(&cx, "v", Some(3), 0);
        value.set(9);
        assert_eq!(value.get(), 3);
        assert!(value.is_controlled());
    }
}
