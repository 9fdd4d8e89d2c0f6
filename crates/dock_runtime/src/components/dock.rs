use super::*;

#[component]
/// The injected widget: a toggle button opening the dock panel.
pub fn DockWidget() -> impl IntoView {
    let runtime = use_dock_runtime();
    let language = runtime.services.get_value().language;
    let manage_url = portal_host::WidgetConfig::get().manage_apps_url();

    let open = create_rw_signal(false);
    let button_label = string_for(StringKey::WidgetButtonLabel, &language);
    let manage_label = string_for(StringKey::ManageApps, &language);

    view! {
        <div class="dock-widget">
            <button
                class="dock-toggle"
                aria-haspopup="dialog"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|value| *value = !*value)
            >
                {button_label}
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <div class="dock-panel" role="dialog" aria-label=button_label>
                    <SearchBox />
                    <PinnedSection />
                    <CatalogSection />
                    <a
                        class="dock-manage-link"
                        href=manage_url.clone()
                        target="_blank"
                        rel="noopener"
                        data-interception="off"
                    >
                        {manage_label}
                    </a>
                </div>
            </Show>
        </div>
    }
}
