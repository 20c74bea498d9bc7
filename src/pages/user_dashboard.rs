use leptos::*;

use crate::auth::use_auth;
use crate::components::access_denied::AccessDenied;
use crate::components::feedback_form::FeedbackForm;
use crate::components::preview_modal::PreviewModal;
use crate::components::resource_card::ResourceCard;
use crate::data;
use crate::models::resource::Resource;
use crate::ratings::use_ratings;
use crate::utils::initials;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || match auth.current() {
            None => view! {
                <AccessDenied
                    title="Sign in required"
                    message="Login to see your dashboard, reading history and bookmarks."
                />
            }
            .into_view(),
            Some(user) => view! { <Dashboard name=user.name email=user.email/> }.into_view(),
        }}
    }
}

#[component]
fn Dashboard(name: String, email: String) -> impl IntoView {
    let ratings = use_ratings();
    let (preview, set_preview) = create_signal(None::<Resource>);
    let (feedback, set_feedback) = create_signal(None::<Resource>);

    // Reading history is mock data: the first few catalog entries.
    let history: Vec<Resource> = data::resources().into_iter().take(4).collect();

    let avatar = initials(&name);
    // The review store is per-browser, so "your reviews" is everything
    // submitted from this session's storage.
    let reviews_written = move || ratings.global_stats().total_user_reviews;

    view! {
        <main class="dashboard">
            <section class="dashboard__header">
                <div class="container dashboard__header-inner">
                    <div class="dashboard__avatar">{avatar}</div>
                    <div>
                        <h1 class="dashboard__name">"Welcome back, " {name.clone()}</h1>
                        <p class="dashboard__email">{email.clone()}</p>
                    </div>
                </div>
            </section>

            <section class="dashboard__stats">
                <div class="container dashboard__stats-grid">
                    <div class="dashboard__stat">
                        <strong>{history.len()}</strong>
                        <span>"In your history"</span>
                    </div>
                    <div class="dashboard__stat">
                        <strong>"7"</strong>
                        <span>"Bookmarks"</span>
                    </div>
                    <div class="dashboard__stat">
                        <strong>{reviews_written}</strong>
                        <span>"Reviews written"</span>
                    </div>
                </div>
            </section>

            <section class="dashboard__history">
                <div class="container">
                    <h2 class="section-title">"Continue Reading"</h2>
                    <div class="resource-grid">
                        {history
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
