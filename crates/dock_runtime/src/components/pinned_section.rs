use super::*;

#[component]
/// The user's pinned apps: searchable, drag-reorderable, unpinnable.
pub(super) fn PinnedSection() -> impl IntoView {
    let runtime = use_dock_runtime();
    let language = runtime.services.get_value().language;

    let title = string_for(StringKey::PinnedSectionTitle, &language);
    let none_pinned = string_for(StringKey::NoAppsPinned, &language);
    let none_found = string_for(StringKey::NoAppsFound, &language);

    let filtered = move || {
        runtime
            .state
            .with(|state| filter_by_search(&state.pinned, &state.search_text))
    };
    let searching = move || runtime.state.with(|state| !state.search_text.is_empty());

    view! {
        <section class="dock-section dock-section-pinned">
            <h2 class="dock-section-title">{title}</h2>

            <Show when=move || filtered().is_empty() && !searching() fallback=|| ()>
                <p class="dock-empty">{none_pinned}</p>
            </Show>
            <Show when=move || filtered().is_empty() && searching() fallback=|| ()>
                <p class="dock-empty">{none_found}</p>
            </Show>

            <ul class="dock-list" role="list">
                // The key carries the flash flags so a settle dispatch
                // re-creates the row and restarts its animation class.
                <For
                    each=filtered
                    key=|item| (item.id.clone(), item.pinned, item.unpinned)
                    let:item
                >
                    <PinnedRow item=item />
                </For>
            </ul>
        </section>
    }
}

#[component]
fn PinnedRow(item: DockItem) -> impl IntoView {
    let runtime = use_dock_runtime();
    let language = runtime.services.get_value().language;
    let unpin_label = string_for(StringKey::UnpinScreenReader, &language);

    let affordance = create_rw_signal(None::<DropAffordance>);

    let link_class = pinned_link_class(&item);
    let link_href = item.url.clone().unwrap_or_default();
    let link_title = item.description.clone().unwrap_or_default();
    let link_text = item.name.clone();

    let id_for_class = item.id.clone();
    let id_for_dragstart = item.id.clone();
    let id_for_drop = item.id.clone();
    let id_for_select = item.id.clone();
    let item_for_unpin = item.clone();

    view! {
        <li
            class=move || {
                runtime
                    .drag
                    .with(|drag| pinned_row_class(drag.is_selected(&id_for_class), affordance.get()))
            }
            draggable="true"
            on:dragstart=move |_| {
                let index = runtime
                    .state
                    .with_untracked(|state| {
                        state.pinned.iter().position(|pinned| pinned.id == id_for_dragstart)
                    })
                    .unwrap_or(0);
                runtime.drag.update(|drag| drag.begin(id_for_dragstart.clone(), index));
            }
            on:dragenter=move |ev: web_sys::DragEvent| {
                let hint = runtime
                    .drag
                    .try_update(|drag| drag.affordance(ev.client_y()))
                    .flatten();
                affordance.set(hint);
            }
            on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                affordance.set(None);
                let reordered = runtime.state.with_untracked(|state| {
                    runtime.drag.with_untracked(|drag| {
                        let block = drag.dragged_block(&state.pinned);
                        reorder_before(&state.pinned, &block, &id_for_drop)
                    })
                });
                if let Some(new_list) = reordered {
                    host::pin_actions::commit_reorder(runtime, new_list);
                }
            }
            on:dragend=move |_| {
                affordance.set(None);
                runtime.drag.update(|drag| drag.reset());
            }
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.ctrl_key() || ev.meta_key() {
                    ev.prevent_default();
                    runtime.drag.update(|drag| drag.toggle_selected(id_for_select.clone()));
                }
            }
        >
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
                class="dock-pin-button dock-pin-button-pinned"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    host::pin_actions::unpin_app(runtime, item_for_unpin.clone());
                }
            >
                <span class="dock-pin-icon" aria-hidden="true"></span>
                <span class="dock-visually-hidden">{unpin_label}</span>
            </button>
        </li>
    }
}
