use leptos::*;
use leptos_router::use_query_map;

use crate::components::feedback_form::FeedbackForm;
use crate::components::preview_modal::PreviewModal;
use crate::components::resource_card::ResourceCard;
use crate::data;
use crate::models::resource::{Category, Resource};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let (active, set_active) = create_signal(None::<Category>);
    let (preview, set_preview) = create_signal(None::<Resource>);
    let (feedback, set_feedback) = create_signal(None::<Resource>);

    let catalog = store_value(data::resources());

    // /categories?cat=guides opens with that category selected.
    let query_map = use_query_map();
    create_effect(move |_| {
        let from_query = query_map
            .with(|map| map.get("cat").cloned())
            .and_then(|slug| Category::from_slug(&slug));
        if let Some(cat) = from_query {
            set_active.set(Some(cat));
        }
    });

    let count_for =
        move |cat: Category| catalog.with_value(|all| all.iter().filter(|r| r.category == cat).count());

    let filtered = move || {
        catalog.with_value(|all| data::search(all, "", active.get()))
    };

    let section_title = move || match active.get() {
        None => "All Resources".to_string(),
        Some(cat) => cat.plural().to_string(),
    };

    view! {
        <main class="categories">
            <section class="categories__header">
                <div class="container">
                    <h1 class="page-title">"Browse by Category"</h1>
                    <p class="page-subtitle">
                        "Pick a shelf. Counts update as the catalog grows."
                    </p>
                </div>
            </section>

            <section class="categories__cards">
                <div class="container categories__card-grid">
                    {Category::ALL
                        .into_iter()
                        .map(|cat| {
                            let card_style = format!("--cat-color:{}", cat.color());
                            view! {
                                <button
                                    class="category-card"
                                    class:active=move || active.get() == Some(cat)
                                    style=card_style
                                    on:click=move |_| {
                                        set_active.update(|current| {
                                            *current = if *current == Some(cat) { None } else { Some(cat) };
                                        })
                                    }
                                >
                                    <span class="category-card__icon">{cat.icon()}</span>
                                    <span class="category-card__label">{cat.plural()}</span>
                                    <span class="category-card__count">
                                        {count_for(cat)} " resources"
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="categories__grid-section">
                <div class="container">
                    <h2 class="section-title">
                        {section_title}
                        <span class="section-count">{move || filtered().len()}</span>
                    </h2>
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
