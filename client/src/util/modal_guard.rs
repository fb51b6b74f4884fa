//! Scoped page effects held by a mounted modal.
//!
//! While any modal is mounted the page body does not scroll and window
//! keydown events are routed to the topmost modal's handler. Both effects are
//! acquired when the modal component runs and released in `on_cleanup`, so
//! every exit path (cancel, Escape, save, delete, route change) restores the
//! page.
//!
//! Modals can overlap (a create dialog opened over a list while another is
//! closing), so the scroll lock is reference counted and the body is only
//! unlocked when the count returns to zero.

#[cfg(test)]
#[path = "modal_guard_test.rs"]
mod modal_guard_test;

use leptos::prelude::*;

use crate::state::modal::KeyTarget;

/// Reference count of active scroll locks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockDepth(u32);

impl LockDepth {
    /// Take a lock. Returns `true` when this is the first one and the page
    /// must be locked.
    pub fn acquire(&mut self) -> bool {
        self.0 = self.0.saturating_add(1);
        self.0 == 1
    }

    /// Drop a lock. Returns `true` when this was the last one and the page
    /// must be unlocked. Releasing at depth zero is a no-op.
    pub fn release(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        self.0 == 0
    }

    #[must_use]
    pub fn depth(self) -> u32 {
        self.0
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static SCROLL_LOCKS: std::cell::Cell<LockDepth> = std::cell::Cell::new(LockDepth::default());
}

/// Lock page scrolling and route window key presses to `on_key` until the
/// calling component unmounts.
///
/// `on_key` receives the key name and the kind of focused element, and
/// returns whether it handled the key; handled keys have their default action
/// suppressed.
pub fn use_modal_guard(on_key: Callback<(String, KeyTarget), bool>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        lock_scroll();
        let listener = window_event_listener(leptos::ev::keydown, move |ev| {
            let target = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .map_or(KeyTarget::Field, |el| KeyTarget::from_tag(&el.tag_name()));
            if on_key.run((ev.key(), target)) {
                ev.prevent_default();
            }
        });
        on_cleanup(move || {
            listener.remove();
            unlock_scroll();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_key;
    }
}

#[cfg(feature = "hydrate")]
fn lock_scroll() {
    let first = SCROLL_LOCKS.with(|cell| {
        let mut depth = cell.get();
        let first = depth.acquire();
        cell.set(depth);
        first
    });
    if first {
        set_body_overflow(Some("hidden"));
    }
}

#[cfg(feature = "hydrate")]
fn unlock_scroll() {
    let last = SCROLL_LOCKS.with(|cell| {
        let mut depth = cell.get();
        let last = depth.release();
        cell.set(depth);
        last
    });
    if last {
        set_body_overflow(None);
    }
}

#[cfg(feature = "hydrate")]
fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = match value {
        Some(v) => style.set_property("overflow", v),
        None => style.remove_property("overflow").map(|_| ()),
    };
}

/// Put `value` back into the input that fired `ev`, undoing a rejected
/// keystroke.
pub fn restore_input<E: AsRef<leptos::ev::Event>>(ev: &E, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let input = ev
            .as_ref()
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            input.set_value(value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, value);
    }
}
