//! Pin, unpin, and reorder protocols.
//!
//! Local state is authoritative the instant an action is dispatched; the
//! resulting id order is persisted fire-and-forget, and the cosmetic flash
//! flags clear on their own timers independent of how the write goes.

use leptos::{logging, spawn_local, SignalWithUntracked};
use portal_host::AppId;

use crate::{
    model::{DockItem, PIN_SETTLE_MS, UNPIN_SETTLE_MS},
    reducer::DockAction,
    runtime_context::DockRuntimeContext,
};

/// Moves a catalog item to the front of the pinned list.
pub fn pin_app(runtime: DockRuntimeContext, item: DockItem) {
    let previous: Vec<AppId> = runtime.state.with_untracked(|state| {
        state
            .pinned
            .iter()
            .map(|pinned| pinned.id.clone())
            .collect()
    });

    runtime.dispatch_action(DockAction::RemoveCatalog(item.clone()));
    runtime.dispatch_action(DockAction::AddPinned(item.clone().with_pin_flash()));

    let settled = item.clone().settled();
    portal_host_web::timers::after(PIN_SETTLE_MS, move || {
        runtime.dispatch_action(DockAction::UpdatePinned(settled));
    });

    let mut order = Vec::with_capacity(previous.len() + 1);
    order.push(item.id);
    order.extend(previous);
    persist_pinned_order(runtime, order, "pin");
}

/// Mirror of [`pin_app`]: moves a pinned item back into the catalog.
pub fn unpin_app(runtime: DockRuntimeContext, item: DockItem) {
    let remaining: Vec<AppId> = runtime.state.with_untracked(|state| {
        state
            .pinned
            .iter()
            .filter(|pinned| pinned.id != item.id)
            .map(|pinned| pinned.id.clone())
            .collect()
    });

    runtime.dispatch_action(DockAction::RemovePinned(item.clone()));
    runtime.dispatch_action(DockAction::AddCatalog(item.clone().with_unpin_flash()));

    let settled = item.settled();
    portal_host_web::timers::after(UNPIN_SETTLE_MS, move || {
        runtime.dispatch_action(DockAction::UpdateCatalog(settled));
    });

    persist_pinned_order(runtime, remaining, "unpin");
}

/// Applies a drag-computed pinned order and persists it.
pub fn commit_reorder(runtime: DockRuntimeContext, new_list: Vec<DockItem>) {
    let order: Vec<AppId> = new_list.iter().map(|item| item.id.clone()).collect();
    runtime.dispatch_action(DockAction::SetPinned(new_list));
    persist_pinned_order(runtime, order, "reorder");
}

fn persist_pinned_order(runtime: DockRuntimeContext, order: Vec<AppId>, gesture: &'static str) {
    let services = runtime.services.get_value();
    spawn_local(async move {
        if let Err(err) = services
            .user_apps
            .save_record(&services.identity, &order)
            .await
        {
            logging::warn!("pinned order persist after {gesture} failed: {err}");
        }
    });
}
