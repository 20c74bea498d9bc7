use leptos::*;

use crate::components::feedback_form::FeedbackForm;
use crate::components::preview_modal::PreviewModal;
use crate::components::resource_card::ResourceCard;
use crate::data;
use crate::models::resource::Resource;

#[component]
pub fn LatestPage() -> impl IntoView {
    let (preview, set_preview) = create_signal(None::<Resource>);
    let (feedback, set_feedback) = create_signal(None::<Resource>);

    let catalog = data::resources();
    let new_arrivals: Vec<Resource> = {
        let mut latest: Vec<Resource> = catalog.iter().filter(|r| r.latest).cloned().collect();
        latest.sort_by(|a, b| b.year.cmp(&a.year));
        latest
    };
    let all_by_year = data::by_year(&catalog);

    view! {
        <main class="latest">
            <section class="latest__header">
                <div class="container">
                    <h1 class="page-title">"🆕 Latest Additions"</h1>
                    <p class="page-subtitle">"Recently added and recently published resources."</p>
                </div>
            </section>

            <section class="latest__new">
                <div class="container">
                    <h2 class="section-title">
                        "New This Season"
                        <span class="section-count">{new_arrivals.len()}</span>
                    </h2>
                    <div class="resource-grid">
                        {new_arrivals
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

            <section class="latest__all">
                <div class="container">
                    <h2 class="section-title">
                        "All Resources by Year"
                        <span class="section-count">{all_by_year.len()}</span>
                    </h2>
                    <div class="resource-grid">
                        {all_by_year
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
