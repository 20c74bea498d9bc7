use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::auth::use_auth;
use crate::models::resource::Resource;
use crate::models::review::{Review, ReviewId};
use crate::ratings::use_ratings;
use crate::utils;

/// The form, not the store, owns validation: a review needs at least this
/// many characters of text before it is submitted.
const MIN_MESSAGE_LEN: usize = 10;

/// Fixed pause before committing, purely for UX feedback; the store itself
/// is synchronous.
#[cfg(not(feature = "ssr"))]
const SUBMIT_DELAY_MS: u32 = 900;

#[component]
pub fn FeedbackForm(resource: Resource, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ratings = use_ratings();
    let auth = use_auth();

    let (rating, set_rating) = create_signal(5u8);
    let (kind, set_kind) = create_signal("review".to_string());
    let (message, set_message) = create_signal(String::new());
    let (name, set_name) = create_signal(
        auth.current_untracked()
            .map(|user| user.name)
            .unwrap_or_default(),
    );
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);

    let resource_id = resource.id;
    let base_rating = resource.rating;
    let avg = move || ratings.avg_rating(resource_id, base_rating);
    let review_count = move || ratings.user_review_count(resource_id);
    let reviews = move || ratings.reviews(resource_id);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let text = message.get_untracked().trim().to_string();
        if text.chars().count() < MIN_MESSAGE_LEN {
            set_error.set(Some(format!(
                "Please write at least {MIN_MESSAGE_LEN} characters."
            )));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let reviewer = {
            let trimmed = name.get_untracked().trim().to_string();
            if trimmed.is_empty() {
                "Anonymous".to_string()
            } else {
                trimmed
            }
        };
        let now = Utc::now();
        let stamp = now.timestamp_millis();
        let review = Review {
            id: ReviewId::Submitted(stamp),
            resource_id,
            name: reviewer.clone(),
            initials: utils::initials(&reviewer),
            color: utils::avatar_color(stamp).to_string(),
            rating: rating.get_untracked(),
            text,
            date: utils::month_year(now),
            is_new: true,
        };

        spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            gloo_timers::future::TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            ratings.add_review(resource_id, review);
            set_submitting.set(false);
            set_submitted.set(true);
        });
    };

    let title = resource.title.clone();
    let success_title = resource.title.clone();

    view! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            aria-label="Feedback form"
            on:click=move |_| on_close.call(())
        >
            <div class="modal feedback-modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal__close" aria-label="Close" on:click=move |_| on_close.call(())>
                    "✕"
                </button>

                <Show
                    when=move || submitted.get()
                    fallback=move || view! {
                        <div class="feedback-modal__header">
                            <h2>"💬 Leave Feedback"</h2>
                            <p>"Reviewing: " <strong>{title.clone()}</strong></p>
                            <div class="feedback-modal__summary">
                                <span class="feedback-modal__avg">{move || format!("{:.1}", avg())}</span>
                                <span class="feedback-modal__stars">{move || utils::star_string(avg())}</span>
                                <span class="feedback-modal__count">
                                    {move || format!("{} reader reviews", review_count())}
                                </span>
                            </div>
                        </div>
                    }
                >
                    <div class="feedback-modal__success">
                        <div class="feedback-modal__success-icon">"✅"</div>
                        <h2>"Thank you for your feedback!"</h2>
                        <p>
                            "Your review for " <strong>{success_title.clone()}</strong>
                            " has been submitted."
                        </p>
                        <p class="feedback-modal__new-avg">
                            {move || format!("New average rating: {:.1} / 5", avg())}
                        </p>
                        <button class="btn btn--primary" on:click=move |_| on_close.call(())>
                            "Close"
                        </button>
                    </div>
                </Show>

                <Show when=move || !submitted.get() fallback=|| ()>
                    <form class="feedback-modal__form" on:submit=handle_submit>
                        <div class="form-group">
                            <label class="form-label">"Your Rating"</label>
                            <div class="star-rating">
                                {(1u8..=5)
                                    .map(|n| view! {
                                        <button
                                            type="button"
                                            class="star-btn"
                                            class:filled=move || n <= rating.get()
                                            aria-label=format!("Rate {n} stars")
                                            on:click=move |_| set_rating.set(n)
                                        >
                                            "★"
                                        </button>
                                    })
                                    .collect_view()}
                                <span class="star-label">{move || format!("{} / 5", rating.get())}</span>
                            </div>
                        </div>

                        <div class="form-group">
                            <label class="form-label">"Display Name"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="How your review is signed"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label class="form-label">"Type"</label>
                            <select
                                class="form-input form-select"
                                prop:value=move || kind.get()
                                on:change=move |ev| set_kind.set(event_target_value(&ev))
                            >
                                <option value="review">"General Review"</option>
                                <option value="error">"Report Error / Typo"</option>
                                <option value="suggestion">"Suggestion"</option>
                                <option value="quality">"Quality Concern"</option>
                            </select>
                        </div>

                        <div class="form-group">
                            <label class="form-label">
                                "Your Comments " <span class="required">"*"</span>
                            </label>
                            <textarea
                                class="form-input form-textarea"
                                placeholder="Share your thoughts about this resource…"
                                rows="4"
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        {move || error.get().map(|msg| view! {
                            <p class="form-error" role="alert">{msg}</p>
                        })}

                        <div class="feedback-modal__footer">
                            <button
                                type="button"
                                class="btn btn--secondary"
                                on:click=move |_| on_close.call(())
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary" disabled=submitting>
                                {move || if submitting.get() { "Submitting…" } else { "Submit Feedback" }}
                            </button>
                        </div>
                    </form>

                    <div class="feedback-modal__reviews">
                        <h3>"What readers say"</h3>
                        {move || reviews()
                            .into_iter()
                            .map(|review| {
                                let avatar_style = format!("background:{}", review.color);
                                view! {
                                    <div class="review" class=("review--new", review.is_new)>
                                        <span class="review__avatar" style=avatar_style>
                                            {review.initials.clone()}
                                        </span>
                                        <div class="review__body">
                                            <div class="review__meta">
                                                <strong>{review.name.clone()}</strong>
                                                <span class="review__date">{review.date.clone()}</span>
                                            </div>
                                            <span class="review__stars">
                                                {utils::star_string(f64::from(review.rating))}
                                            </span>
                                            <p class="review__text">{review.text.clone()}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}
