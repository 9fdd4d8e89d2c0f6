//! MutationObserver drivers for the anchor-watch state machines.
//!
//! The pure machines in `portal_host::mount` decide *when* an anchor is
//! acquired; this module owns the observers feeding them and the mount
//! container DOM work. Each watcher observes, delivers at most once, then
//! disconnects for good; if the host never renders the markers, nothing
//! ever fires.

use std::{cell::RefCell, rc::Rc};

use portal_host::{AnchorProbe, CollapsibleWatch, HeaderWatch, WatchDirective, WidgetConfig};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, MutationObserver, MutationObserverInit, MutationRecord};

/// Where a newly created mount container is inserted in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerPlacement {
    Prepend,
    Append,
}

/// [`AnchorProbe`] over the live document with the configured selectors.
pub struct DomAnchorProbe {
    document: Document,
    fine_selector: String,
    coarse_selector: String,
}

impl DomAnchorProbe {
    pub fn new(document: Document) -> Self {
        let config = WidgetConfig::get();
        Self {
            document,
            fine_selector: config.fine_anchor_selector.clone(),
            coarse_selector: config.coarse_anchor_selector.clone(),
        }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }
}

impl AnchorProbe for DomAnchorProbe {
    type Anchor = Element;

    fn find_fine(&self) -> Option<Element> {
        self.query(&self.fine_selector)
    }

    fn find_coarse(&self) -> Option<Element> {
        self.query(&self.coarse_selector)
    }

    fn mount_parent(&self, fine: &Element) -> Option<Element> {
        fine.parent_element()?.parent_element()
    }
}

/// Watches the document for the primary header anchor and calls `on_found`
/// exactly once with the resolved mount parent.
pub fn watch_header(on_found: impl Fn(Element) + 'static) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let probe = DomAnchorProbe::new(document);
    let watch = Rc::new(RefCell::new(HeaderWatch::new()));
    let observer_slot: Rc<RefCell<Option<MutationObserver>>> = Rc::new(RefCell::new(None));

    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::wrap(Box::new({
        let watch = Rc::clone(&watch);
        let observer_slot = Rc::clone(&observer_slot);
        move |_records: js_sys::Array, _observer: MutationObserver| {
            let directive = watch.borrow_mut().on_mutation(&probe);
            match directive {
                WatchDirective::KeepWatching => {}
                WatchDirective::Narrow(scope) => {
                    if let Some(observer) = observer_slot.borrow().as_ref() {
                        observer.disconnect();
                        if observer
                            .observe_with_options(&scope, &observe_options(true))
                            .is_err()
                        {
                            leptos::logging::warn!("narrowed header observation failed to start");
                        }
                    }
                }
                WatchDirective::Resolved(anchor) => {
                    if let Some(observer) = observer_slot.borrow_mut().take() {
                        observer.disconnect();
                    }
                    on_found(anchor);
                }
            }
        }
    }));

    match MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            if observer
                .observe_with_options(&body, &observe_options(true))
                .is_err()
            {
                leptos::logging::warn!("header observation failed to start");
                return;
            }
            *observer_slot.borrow_mut() = Some(observer);
        }
        Err(err) => leptos::logging::warn!("header observer creation failed: {err:?}"),
    }
    callback.forget();
}

/// Watches the stable header row for child-list changes and calls
/// `on_found` once when the collapsible header region appears.
///
/// Does nothing when the header row is absent at activation time.
pub fn watch_collapsible_header(on_found: impl Fn(Element) + 'static) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let config = WidgetConfig::get();
    let Ok(Some(header_row)) = document.query_selector(&config.header_row_selector) else {
        return;
    };

    let watch = Rc::new(RefCell::new(CollapsibleWatch::new()));
    let observer_slot: Rc<RefCell<Option<MutationObserver>>> = Rc::new(RefCell::new(None));

    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::wrap(Box::new({
        let watch = Rc::clone(&watch);
        let observer_slot = Rc::clone(&observer_slot);
        let document = document.clone();
        move |records: js_sys::Array, _observer: MutationObserver| {
            let nodes_added = records.iter().any(|record| {
                record
                    .dyn_into::<MutationRecord>()
                    .map(|record| record.added_nodes().length() > 0)
                    .unwrap_or(false)
            });
            if !nodes_added {
                return;
            }

            let region = watch.borrow_mut().on_children_changed(|| {
                document
                    .query_selector(&config.collapsible_region_selector)
                    .ok()
                    .flatten()
            });
            if let Some(region) = region {
                if let Some(observer) = observer_slot.borrow_mut().take() {
                    observer.disconnect();
                }
                on_found(region);
            }
        }
    }));

    match MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            if observer
                .observe_with_options(&header_row, &observe_options(false))
                .is_err()
            {
                leptos::logging::warn!("collapsible header observation failed to start");
                return;
            }
            *observer_slot.borrow_mut() = Some(observer);
        }
        Err(err) => leptos::logging::warn!("collapsible header observer creation failed: {err:?}"),
    }
    callback.forget();
}

fn observe_options(subtree: bool) -> MutationObserverInit {
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(subtree);
    init
}

/// Returns the container with the reserved `id`, creating and inserting it
/// into `parent` only when it does not already exist.
pub fn ensure_mount_container(
    parent: &Element,
    id: &str,
    placement: ContainerPlacement,
) -> Result<Element, String> {
    let document = parent
        .owner_document()
        .ok_or_else(|| "mount anchor is detached from any document".to_string())?;

    if let Some(existing) = document.get_element_by_id(id) {
        return Ok(existing);
    }

    let container = document
        .create_element("div")
        .map_err(|err| format!("mount container creation failed: {err:?}"))?;
    container.set_id(id);

    match placement {
        ContainerPlacement::Prepend => parent
            .prepend_with_node_1(&container)
            .map_err(|err| format!("mount container prepend failed: {err:?}"))?,
        ContainerPlacement::Append => {
            parent
                .append_child(&container)
                .map_err(|err| format!("mount container append failed: {err:?}"))?;
        }
    }
    Ok(container)
}
