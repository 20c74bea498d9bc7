use leptos::*;
use leptos_router::use_query_map;

use crate::components::category_filter::CategoryFilter;
use crate::components::feedback_form::FeedbackForm;
use crate::components::hero_section::HeroSection;
use crate::components::preview_modal::PreviewModal;
use crate::components::resource_card::ResourceCard;
use crate::components::search_bar::SearchBar;
use crate::data;
use crate::models::resource::{Category, Resource};

/// Main browse page: hero, search + category filter, and the resource grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let (search, set_search) = create_signal(String::new());
    let (category, set_category) = create_signal(None::<Category>);
    let (preview, set_preview) = create_signal(None::<Resource>);
    let (feedback, set_feedback) = create_signal(None::<Resource>);

    let catalog = store_value(data::resources());

    // Deep links: /home?q=sql pre-fills the search box (tag chips in the
    // preview modal navigate here).
    let query_map = use_query_map();
    create_effect(move |_| {
        if let Some(q) = query_map.with(|map| map.get("q").cloned()) {
            set_search.set(q);
        }
    });

    let filtered = move || {
        catalog.with_value(|all| data::search(all, &search.get(), category.get()))
    };

    let grid_title = move || match category.get() {
        None => "All Resources".to_string(),
        Some(cat) => cat.plural().to_string(),
    };

    view! {
        <main class="home">
            <HeroSection/>

            <section class="home__filter-bar">
                <div class="container home__filter-inner">
                    <SearchBar
                        value=search
                        on_change=move |q| set_search.set(q)
                        placeholder="Search by title, author or tag…"
                    />
                    <CategoryFilter
                        active=category
                        on_select=move |cat| set_category.set(cat)
                    />
                </div>
            </section>

            <section class="home__grid-section">
                <div class="container">
                    <div class="home__grid-header">
                        <h2 class="section-title">
                            {grid_title}
                            <span class="section-count">{move || format!("{} found", filtered().len())}</span>
                        </h2>
                    </div>

                    <Show
                        when=move || !filtered().is_empty()
                        fallback=move || view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">"🔍"</div>
                                <h3>"No resources found"</h3>
                                <p>"Try a different search term or browse all categories."</p>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| {
                                        set_search.set(String::new());
                                        set_category.set(None);
                                    }
                                >
                                    "Clear Filters"
                                </button>
                            </div>
                        }
                    >
                        <div class="resource-grid">
                            {move || filtered()
                                .into_iter()
                                .map(|resource| view! {
                                    <ResourceCard
                                        resource=resource
                                        on_preview=move |r| set_preview.set(Some(r))
                                        on_feedback=move |r| set_feedback.set(Some(r))
                                    />
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </section>

            {move || preview.get().map(|resource| view! {
                <PreviewModal resource=resource on_close=move |_| set_preview.set(None)/>
            })}
            {move || feedback.get().map(|resource| view! {
                <FeedbackForm resource=resource on_close=move |_| set_feedback.set(None)/>
            })}
        </main>
    }
}
