//! Runtime provider and context wiring for the dock widget.
//!
//! Owns the reducer container, the drag-gesture state, and the catalog
//! boot. UI composition stays in [`crate::components`].

use leptos::*;
use portal_host::HostServices;

use crate::{
    host,
    interaction::DragReorder,
    model::DockState,
    reducer::{reduce_dock, DockAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading dock state and dispatching [`DockAction`]s.
pub struct DockRuntimeContext {
    /// Host service bundle plus the resolved page facts.
    pub services: StoredValue<HostServices>,
    /// Reactive dock state signal.
    pub state: RwSignal<DockState>,
    /// Drag-gesture state and the row multi-selection.
    pub drag: RwSignal<DragReorder>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DockAction>,
}

impl DockRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DockAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DockRuntimeContext`] to descendant components and starts the
/// catalog boot.
pub fn DockProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let services = store_value(host_services);
    let state = create_rw_signal(DockState::default());
    let drag = create_rw_signal(DragReorder::default());

    let dispatch = Callback::new(move |action: DockAction| {
        let previous = state.get_untracked();
        let mut next = previous.clone();
        reduce_dock(&mut next, action);
        if next != previous {
            state.set(next);
        }
    });

    let runtime = DockRuntimeContext {
        services,
        state,
        drag,
        dispatch,
    };

    provide_context(runtime);

    host::boot::install_catalog_boot(runtime);

    children().into_view()
}

/// Returns the current [`DockRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DockProvider`].
pub fn use_dock_runtime() -> DockRuntimeContext {
    use_context::<DockRuntimeContext>().expect("DockRuntimeContext not provided")
}
