//! Host readiness registration seam.

/// Registration point for "the host page finished its navigation/render
/// cycle" notifications.
///
/// The dock depends only on this callback contract; which host event backs
/// it (initial load, soft navigation) is the adapter's business.
pub trait HostReady {
    fn on_ready(&self, callback: Box<dyn Fn()>);
}

#[derive(Debug, Clone, Copy, Default)]
/// Fires the callback immediately; used in tests and non-browser targets.
pub struct ImmediateHostReady;

impl HostReady for ImmediateHostReady {
    fn on_ready(&self, callback: Box<dyn Fn()>) {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn immediate_host_ready_invokes_callback() {
        let fired = Rc::new(Cell::new(0_u32));
        let fired_in_callback = Rc::clone(&fired);

        ImmediateHostReady.on_ready(Box::new(move || {
            fired_in_callback.set(fired_in_callback.get() + 1);
        }));

        assert_eq!(fired.get(), 1);
    }
}
