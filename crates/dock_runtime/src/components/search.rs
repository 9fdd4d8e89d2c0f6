use portal_host_web::Debouncer;

use super::*;

#[component]
/// Search input; dispatches trailing-edge debounced so only the last value
/// of a typing burst reaches the reducer.
pub(super) fn SearchBox() -> impl IntoView {
    let runtime = use_dock_runtime();
    let language = runtime.services.get_value().language;
    let debouncer = store_value(Debouncer::new(SEARCH_DEBOUNCE_MS));

    view! {
        <input
            class="dock-search"
            type="search"
            placeholder=string_for(StringKey::SearchPlaceholder, &language)
            on:input=move |ev| {
                let text = event_target_value(&ev);
                debouncer.with_value(|debouncer| {
                    debouncer.run(move || runtime.dispatch_action(DockAction::SetSearch(text)));
                });
            }
        />
    }
}
