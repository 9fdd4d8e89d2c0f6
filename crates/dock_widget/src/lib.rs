//! Browser entry wiring for the portal app dock.
//!
//! Waits for the host page, watches for both injection targets, and mounts
//! an independent dock tree into each resolved container.

use std::rc::Rc;

use leptos::logging;
use portal_host::{HostServices, NoopUserAppsStore, UserAppsStore, UserIdentity};
use portal_host_web::{
    resolve_page_language, resolve_user_identity, RestCatalogStore, RestUserAppsStore,
};

/// Assembles the browser service bundle from the hosting page.
///
/// Without a published user context the dock still renders the catalog; it
/// just loses pin persistence instead of failing the page.
pub fn browser_host_services() -> HostServices {
    let (user_apps, identity): (Rc<dyn UserAppsStore>, UserIdentity) =
        match resolve_user_identity() {
            Some(identity) => (Rc::new(RestUserAppsStore), identity),
            None => {
                logging::warn!("host page published no user context; pinning will not persist");
                (
                    Rc::new(NoopUserAppsStore),
                    UserIdentity {
                        user_id: "anonymous".to_string(),
                        login_name: String::new(),
                    },
                )
            }
        };

    HostServices {
        catalog: Rc::new(RestCatalogStore),
        user_apps,
        identity,
        language: resolve_page_language(),
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use portal_host::HostReady;

    console_error_panic_hook::set_once();

    portal_host_web::WebHostReady.on_ready(Box::new(|| {
        install_header_mount();
        install_collapsible_mount();
    }));
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn install_header_mount() {
    portal_host_web::watch_header(|anchor| {
        let placement = portal_host_web::ContainerPlacement::Prepend;
        match portal_host_web::ensure_mount_container(
            &anchor,
            dock_runtime::PRIMARY_MOUNT_ID,
            placement,
        ) {
            Ok(container) => mount_dock_into(container),
            Err(err) => logging::warn!("primary mount failed: {err}"),
        }
    });
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn install_collapsible_mount() {
    portal_host_web::watch_collapsible_header(|region| {
        let already_mounted = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(dock_runtime::COLLAPSIBLE_MOUNT_ID))
            .is_some();
        if already_mounted {
            return;
        }

        let placement = portal_host_web::ContainerPlacement::Append;
        match portal_host_web::ensure_mount_container(
            &region,
            dock_runtime::COLLAPSIBLE_MOUNT_ID,
            placement,
        ) {
            Ok(container) => mount_dock_into(container),
            Err(err) => logging::warn!("collapsible mount failed: {err}"),
        }
    });
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn mount_dock_into(container: web_sys::Element) {
    use dock_runtime::{DockProvider, DockWidget};
    use wasm_bindgen::JsCast;

    let Ok(target) = container.dyn_into::<web_sys::HtmlElement>() else {
        logging::warn!("mount container is not an html element");
        return;
    };

    let host_services = browser_host_services();
    leptos::mount_to(target, move || {
        leptos::view! {
            <DockProvider host_services=host_services>
                <DockWidget />
            </DockProvider>
        }
    });
}
