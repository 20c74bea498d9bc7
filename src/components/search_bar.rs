use leptos::*;

#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, default = "Search resources…".to_string())] placeholder: String,
) -> impl IntoView {
    let (focused, set_focused) = create_signal(false);

    view! {
        <div class="search-bar" class:focused=focused>
            <span class="search-bar__icon" aria-hidden="true">
                <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                    stroke-width="2.2" stroke-linecap="round" stroke-linejoin="round">
                    <circle cx="11" cy="11" r="7"></circle>
                    <line x1="16.5" y1="16.5" x2="22" y2="22"></line>
                </svg>
            </span>
            <input
                type="search"
                class="search-bar__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            />
        </div>
    }
}
