use leptos::*;

use crate::models::resource::Resource;
use crate::ratings::use_ratings;
use crate::utils::{group_thousands, star_string};

/// Catalog card. The star row and review count come from the ratings store,
/// so a freshly submitted review is reflected immediately.
#[component]
pub fn ResourceCard(
    resource: Resource,
    #[prop(into)] on_preview: Callback<Resource>,
    #[prop(into)] on_feedback: Callback<Resource>,
) -> impl IntoView {
    let ratings = use_ratings();
    let (downloading, set_downloading) = create_signal(false);

    let resource_id = resource.id;
    let base_rating = resource.rating;
    let avg = move || ratings.avg_rating(resource_id, base_rating);
    let review_count = move || ratings.user_review_count(resource_id);

    let color = resource.category.color();
    let badge_style = format!("background:{color}");
    let stars_style = format!("color:{color}");

    let preview_target = resource.clone();
    let feedback_target = resource.clone();

    // Fake download with a short delay, mirroring the submit latency the
    // feedback form uses.
    let handle_download = move |_| {
        if downloading.get_untracked() {
            return;
        }
        set_downloading.set(true);
        spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            gloo_timers::future::TimeoutFuture::new(1200).await;
            logging::log!("[mock] download started");
            set_downloading.set(false);
        });
    };

    view! {
        <article class="resource-card">
            <div class="resource-card__thumb-wrap">
                <img
                    src=resource.thumbnail.clone()
                    alt=resource.title.clone()
                    class="resource-card__thumb"
                    loading="lazy"
                />
                <span class="resource-card__badge" style=badge_style>
                    {resource.category.label()}
                </span>
            </div>

            <div class="resource-card__body">
                <h3 class="resource-card__title">{resource.title.clone()}</h3>
                <p class="resource-card__author">"by " {resource.author.clone()}</p>
                <p class="resource-card__desc">{resource.description.clone()}</p>

                <div class="resource-card__meta">
                    <span class="resource-card__stars" style=stars_style title="Rating">
                        {move || star_string(avg())}
                    </span>
                    <span class="resource-card__rating">{move || format!("{:.1}", avg())}</span>
                    {move || {
                        let count = review_count();
                        (count > 0)
                            .then(|| view! {
                                <span class="resource-card__review-count">
                                    {format!("({count})")}
                                </span>
                            })
                    }}
                    <span class="resource-card__meta-item">"📄 " {resource.pages} "pp"</span>
                    <span class="resource-card__meta-item">"📅 " {resource.year}</span>
                    <span class="resource-card__meta-item">"⬇ " {group_thousands(resource.downloads)}</span>
                    <span class="resource-card__meta-item">{resource.file_size.clone()}</span>
                </div>
            </div>

            <div class="resource-card__actions">
                <button
                    class="btn btn--outline btn--sm"
                    on:click=move |_| on_preview.call(preview_target.clone())
                >
                    "👁 Preview"
                </button>
                <button
                    class="btn btn--primary btn--sm"
                    disabled=downloading
                    on:click=handle_download
                >
                    {move || if downloading.get() { "⏳ Downloading…" } else { "⬇ Download" }}
                </button>
                <button
                    class="btn btn--ghost btn--sm"
                    on:click=move |_| on_feedback.call(feedback_target.clone())
                >
                    "💬 Feedback"
                </button>
            </div>
        </article>
    }
}
