//! Catalog boot: load, merge, self-heal, seed the reducer.

use leptos::{create_effect, logging, spawn_local};

use crate::{merge::merge_catalog, reducer::DockAction, runtime_context::DockRuntimeContext};

/// Loads the catalog and the user's pinned record once, then dispatches
/// `Loaded` with the merged result.
///
/// Any load failure is logged and leaves the state unloaded; nothing here
/// may fail the hosting page.
pub(crate) fn install_catalog_boot(runtime: DockRuntimeContext) {
    create_effect(move |_| {
        spawn_local(async move {
            load_apps(runtime).await;
        });
    });
}

async fn load_apps(runtime: DockRuntimeContext) {
    let services = runtime.services.get_value();

    let raw = match services.catalog.load_catalog(&services.language).await {
        Ok(entries) => entries,
        Err(err) => {
            logging::warn!("catalog load failed: {err}");
            return;
        }
    };

    let persisted = match services.user_apps.load_record(&services.identity).await {
        Ok(Some(record)) => record.ordered_ids,
        Ok(None) => Vec::new(),
        Err(err) => {
            logging::warn!("pinned record load failed: {err}");
            return;
        }
    };

    let plan = merge_catalog(raw, &services.language, &persisted);

    // Stale ids were dropped from the resolved list; rewrite the stored
    // record in the background so the next load starts clean.
    if let Some(healed) = plan.healed_ids.clone() {
        let repair = services.clone();
        spawn_local(async move {
            if let Err(err) = repair
                .user_apps
                .save_record(&repair.identity, &healed)
                .await
            {
                logging::warn!("pinned record repair failed: {err}");
            }
        });
    }

    runtime.dispatch_action(DockAction::Loaded {
        catalog: plan.catalog,
        pinned: plan.pinned,
    });
}
