//! Browser implementation of the host readiness seam.

use portal_host::HostReady;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Copy, Default)]
/// Fires once the hosting document is parsed; immediately when it already
/// is, otherwise on `DOMContentLoaded`.
pub struct WebHostReady;

impl HostReady for WebHostReady {
    fn on_ready(&self, callback: Box<dyn Fn()>) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            if document.ready_state() != "loading" {
                callback();
                return;
            }

            let fired = Closure::once_into_js(move || callback());
            if document
                .add_event_listener_with_callback("DOMContentLoaded", fired.unchecked_ref())
                .is_err()
            {
                leptos::logging::warn!("host ready listener failed to attach");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = callback;
        }
    }
}
