//! One-shot and debounced timer plumbing over the host event loop.

use std::{cell::Cell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Runs `callback` once after `delay_ms` milliseconds.
pub fn after(delay_ms: u32, callback: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let fired = Closure::once_into_js(callback);
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            fired.unchecked_ref(),
            delay_ms as i32,
        ) {
            leptos::logging::warn!("one-shot timer failed to schedule: {err:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (delay_ms, callback);
    }
}

/// Trailing-edge debouncer: only the last `run` of a burst fires, after the
/// configured quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<Cell<Option<i32>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn run(&self, callback: impl FnOnce() + 'static) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(handle) = self.pending.take() {
                window.clear_timeout_with_handle(handle);
            }

            let pending = Rc::clone(&self.pending);
            let fired = Closure::once_into_js(move || {
                pending.set(None);
                callback();
            });
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                fired.unchecked_ref(),
                self.delay_ms as i32,
            ) {
                Ok(handle) => self.pending.set(Some(handle)),
                Err(err) => leptos::logging::warn!("debounce timer failed to schedule: {err:?}"),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (self.delay_ms, &self.pending, callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debouncer_starts_idle() {
        let debouncer = Debouncer::new(500);
        assert_eq!(debouncer.delay_ms, 500);
        assert_eq!(debouncer.pending.get(), None);
    }
}
