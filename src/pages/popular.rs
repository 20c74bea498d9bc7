use leptos::*;

use crate::components::feedback_form::FeedbackForm;
use crate::components::preview_modal::PreviewModal;
use crate::components::resource_card::ResourceCard;
use crate::data;
use crate::models::resource::Resource;
use crate::ratings::use_ratings;
use crate::utils::group_thousands;

#[component]
pub fn PopularPage() -> impl IntoView {
    let ratings = use_ratings();
    let (preview, set_preview) = create_signal(None::<Resource>);
    let (feedback, set_feedback) = create_signal(None::<Resource>);

    let sorted = data::by_downloads(&data::resources());
    let podium: Vec<Resource> = sorted.iter().take(3).cloned().collect();
    let rest = sorted.clone();

    const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

    view! {
        <main class="popular">
            <section class="popular__header">
                <div class="container">
                    <h1 class="page-title">"🔥 Popular Resources"</h1>
                    <p class="page-subtitle">"The most downloaded resources across the library."</p>
                </div>
            </section>

            <section class="popular__podium">
                <div class="container popular__podium-grid">
                    {podium
                        .into_iter()
                        .enumerate()
                        .map(|(i, resource)| {
                            let resource_id = resource.id;
                            let base_rating = resource.rating;
                            let avg = move || ratings.avg_rating(resource_id, base_rating);
                            let open = {
                                let target = resource.clone();
                                move |_| set_preview.set(Some(target.clone()))
                            };
                            view! {
                                <button class="podium-card" on:click=open>
                                    <span class="podium-card__medal">{MEDALS[i]}</span>
                                    <span class="podium-card__title">{resource.title.clone()}</span>
                                    <span class="podium-card__author">"by " {resource.author.clone()}</span>
                                    <span class="podium-card__downloads">
                                        "⬇ " {group_thousands(resource.downloads)}
                                    </span>
                                    <span class="podium-card__rating">
                                        {move || format!("★ {:.1}", avg())}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="popular__list">
                <div class="container">
                    <h2 class="section-title">
                        "All Resources by Popularity"
                        <span class="section-count">{rest.len()}</span>
                    </h2>
                    <div class="resource-grid">
                        {rest
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
