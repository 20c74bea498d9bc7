use leptos::*;

use crate::models::resource::Category;

/// Pill-button row for picking a category; `None` means "all".
#[component]
pub fn CategoryFilter(
    #[prop(into)] active: Signal<Option<Category>>,
    #[prop(into)] on_select: Callback<Option<Category>>,
) -> impl IntoView {
    view! {
        <div class="cat-filter" role="list" aria-label="Category filters">
            <button
                role="listitem"
                class="cat-filter__btn"
                class:active=move || active.get().is_none()
                on:click=move |_| on_select.call(None)
            >
                <span class="cat-filter__icon">"📚"</span>
                <span>"All"</span>
            </button>
            {Category::ALL
                .into_iter()
                .map(|cat| {
                    view! {
                        <button
                            role="listitem"
                            class="cat-filter__btn"
                            class:active=move || active.get() == Some(cat)
                            on:click=move |_| on_select.call(Some(cat))
                        >
                            <span class="cat-filter__icon">{cat.icon()}</span>
                            <span>{cat.plural()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
