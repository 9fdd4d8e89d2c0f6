use super::*;

#[component]
/// The remaining catalog: searchable, display-ordered, pinnable.
pub(super) fn CatalogSection() -> impl IntoView {
    let runtime = use_dock_runtime();
    let language = runtime.services.get_value().language;

    let title = string_for(StringKey::CatalogSectionTitle, &language);
    let none_available = string_for(StringKey::NoAppsAvailable, &language);
    let none_found = string_for(StringKey::NoAppsFound, &language);

    let filtered = move || {
        runtime.state.with(|state| {
            catalog_display_order(filter_by_search(&state.catalog, &state.search_text))
        })
    };
    let searching = move || runtime.state.with(|state| !state.search_text.is_empty());

    view! {
        <section class="dock-section dock-section-catalog">
            <h2 class="dock-section-title">{title}</h2>

            <Show when=move || filtered().is_empty() && !searching() fallback=|| ()>
                <p class="dock-empty">{none_available}</p>
            </Show>
            <Show when=move || filtered().is_empty() && searching() fallback=|| ()>
                <p class="dock-empty">{none_found}</p>
            </Show>

            <ul class="dock-list" role="list">
                <For
                    each=filtered
                    key=|item| (item.id.clone(), item.pinned, item.unpinned)
                    let:item
                >
                    <CatalogRow item=item />
                </For>
            </ul>
        </section>
    }
}

#[component]
fn CatalogRow(item: DockItem) -> impl IntoView {
    let runtime = use_dock_runtime();
    let language = runtime.services.get_value().language;
    let pin_label = string_for(StringKey::PinScreenReader, &language);

    let link_class = catalog_link_class(&item);
    let link_href = item.url.clone().unwrap_or_default();
    let link_title = item.description.clone().unwrap_or_default();
    let link_text = item.name.clone();
    let item_for_pin = item.clone();

    view! {
        <li class="dock-row dock-row-catalog">
            <a
                class=link_class
                href=link_href
                title=link_title
                target="_blank"
                rel="noopener"
                data-interception="off"
            >
                {link_text}
            </a>
            <button
                class="dock-pin-button"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    host::pin_actions::pin_app(runtime, item_for_pin.clone());
                }
            >
                <span class="dock-pin-icon" aria-hidden="true"></span>
                <span class="dock-visually-hidden">{pin_label}</span>
            </button>
        </li>
    }
}
