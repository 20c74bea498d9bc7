use leptos::*;

use crate::data;
use crate::ratings::use_ratings;
use crate::utils::{ellipsize, star_string};

/// Admin moderation view over the flat review list. Filtering and search
/// happen here, over the data the store hands back; the store itself only
/// knows ids.
#[component]
pub fn ReviewTable() -> impl IntoView {
    let ratings = use_ratings();
    let (query, set_query) = create_signal(String::new());
    let catalog = store_value(data::resources());

    let title_for = move |resource_id: u32| {
        catalog.with_value(|all| {
            all.iter()
                .find(|r| r.id == resource_id)
                .map(|r| r.title.clone())
                .unwrap_or_else(|| format!("Unknown resource #{resource_id}"))
        })
    };

    let rows = move || {
        let q = query.get().trim().to_lowercase();
        ratings
            .all_user_reviews()
            .into_iter()
            .filter(|review| {
                q.is_empty()
                    || review.name.to_lowercase().contains(&q)
                    || review.text.to_lowercase().contains(&q)
                    || title_for(review.resource_id).to_lowercase().contains(&q)
            })
            .collect::<Vec<_>>()
    };

    let stats = move || ratings.global_stats();

    view! {
        <div class="review-table">
            <div class="review-table__stats">
                <div class="review-table__stat">
                    <strong>{move || stats().total_user_reviews}</strong>
                    <span>"Reader reviews"</span>
                </div>
                <div class="review-table__stat">
                    <strong>
                        {move || stats()
                            .avg_rating
                            .map(|avg| format!("{avg:.1}"))
                            .unwrap_or_else(|| "—".to_string())}
                    </strong>
                    <span>"Average rating"</span>
                </div>
            </div>

            <input
                type="search"
                class="form-input review-table__search"
                placeholder="Filter by reviewer, text or resource…"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <Show
                when=move || !rows().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <div class="empty-state__icon">"💬"</div>
                        <h3>"No reader reviews"</h3>
                        <p>"Reviews submitted through the feedback form will appear here."</p>
                    </div>
                }
            >
                <div class="admin__table-wrap">
                    <table class="admin__table">
                        <thead>
                            <tr>
                                <th>"Resource"</th>
                                <th>"Reviewer"</th>
                                <th>"Rating"</th>
                                <th>"Date"</th>
                                <th>"Comment"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows()
                                .into_iter()
                                .map(|review| {
                                    let avatar_style = format!("background:{}", review.color);
                                    let resource_id = review.resource_id;
                                    let review_id = review.id.clone();
                                    view! {
                                        <tr>
                                            <td>{title_for(resource_id)}</td>
                                            <td>
                                                <div class="admin__table-user">
                                                    <span class="review__avatar" style=avatar_style>
                                                        {review.initials.clone()}
                                                    </span>
                                                    <span>{review.name.clone()}</span>
                                                </div>
                                            </td>
                                            <td>
                                                <span class="review__stars">
                                                    {star_string(f64::from(review.rating))}
                                                </span>
                                            </td>
                                            <td>{review.date.clone()}</td>
                                            <td class="review-table__text">{ellipsize(&review.text, 80)}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger btn--sm"
                                                    on:click=move |_| {
                                                        ratings.delete_review(resource_id, &review_id)
                                                    }
                                                >
                                                    "🗑 Remove"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
