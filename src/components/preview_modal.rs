use leptos::*;
use leptos_router::use_navigate;

use crate::models::resource::Resource;
use crate::ratings::use_ratings;
use crate::utils::group_thousands;

#[component]
pub fn PreviewModal(resource: Resource, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ratings = use_ratings();
    let navigate = use_navigate();

    let resource_id = resource.id;
    let base_rating = resource.rating;
    let avg = move || ratings.avg_rating(resource_id, base_rating);
    let review_count = move || ratings.user_review_count(resource_id);

    let tags = resource.tags.clone();

    view! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            aria-label="Resource preview"
            on:click=move |_| on_close.call(())
        >
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal__close" aria-label="Close modal" on:click=move |_| on_close.call(())>
                    "✕"
                </button>

                <div class="modal__header">
                    <img src=resource.thumbnail.clone() alt=resource.title.clone() class="modal__thumb"/>
                    <div>
                        <span class="modal__category-badge">{resource.category.label()}</span>
                        <h2 class="modal__title">{resource.title.clone()}</h2>
                        <p class="modal__author">"by " {resource.author.clone()} " • " {resource.year}</p>
                    </div>
                </div>

                <div class="modal__body">
                    <section>
                        <h3>"About this resource"</h3>
                        <p>{resource.description.clone()}</p>
                    </section>

                    <div class="modal__stats">
                        <div class="modal__stat">
                            <strong>{resource.pages}</strong>
                            <span>"Pages"</span>
                        </div>
                        <div class="modal__stat">
                            <strong>{move || format!("{:.1}/5", avg())}</strong>
                            <span>
                                {move || {
                                    let count = review_count();
                                    if count > 0 {
                                        format!("Rating ({count} reviews)")
                                    } else {
                                        "Rating".to_string()
                                    }
                                }}
                            </span>
                        </div>
                        <div class="modal__stat">
                            <strong>{group_thousands(resource.downloads)}</strong>
                            <span>"Downloads"</span>
                        </div>
                        <div class="modal__stat">
                            <strong>{resource.file_size.clone()}</strong>
                            <span>"File Size"</span>
                        </div>
                    </div>

                    <div class="modal__tags">
                        {tags
                            .into_iter()
                            .map(|tag| {
                                let navigate = navigate.clone();
                                let label = format!("#{tag}");
                                view! {
                                    <button
                                        class="modal__tag"
                                        on:click=move |_| {
                                            on_close.call(());
                                            navigate(
                                                &format!("/home?q={}", urlencoding::encode(&tag)),
                                                Default::default(),
                                            );
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="modal__footer">
                    <button
                        class="btn btn--primary btn--lg"
                        on:click=move |_| logging::log!("[mock] download started")
                    >
                        "⬇ Download Now"
                    </button>
                    <button class="btn btn--secondary btn--lg" on:click=move |_| on_close.call(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
