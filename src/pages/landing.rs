use leptos::*;
use leptos_router::use_navigate;

use crate::data;
use crate::models::resource::Category;
use crate::utils::group_thousands;

#[component]
pub fn LandingPage() -> impl IntoView {
    let start_browsing = {
        let navigate = use_navigate();
        move |_| navigate("/home", Default::default())
    };
    let create_account = {
        let navigate = use_navigate();
        move |_| navigate("/signup", Default::default())
    };

    let stats = data::analytics();

    view! {
        <main class="landing">
            <section class="landing__hero">
                <div class="container landing__hero-inner">
                    <h1 class="landing__title">
                        "Your campus library, " <span class="landing__accent">"without the walls"</span>
                    </h1>
                    <p class="landing__subtitle">
                        "ReadSpace collects openly licensed textbooks, research papers, study \
                         guides and tutorials in one place — searchable, previewable and rated \
                         by the readers who actually use them."
                    </p>
                    <div class="landing__actions">
                        <button class="btn btn--primary btn--lg" on:click=start_browsing>
                            "Start Browsing"
                        </button>
                        <button class="btn btn--outline btn--lg" on:click=create_account.clone()>
                            "Create Free Account"
                        </button>
                    </div>
                </div>
            </section>

            <section class="landing__stats">
                <div class="container landing__stats-grid">
                    <div class="landing__stat">
                        <strong>{stats.total_resources}</strong>
                        <span>"Curated resources"</span>
                    </div>
                    <div class="landing__stat">
                        <strong>{group_thousands(stats.total_downloads as u32)}</strong>
                        <span>"Downloads served"</span>
                    </div>
                    <div class="landing__stat">
                        <strong>{group_thousands(stats.total_users)}</strong>
                        <span>"Registered learners"</span>
                    </div>
                    <div class="landing__stat">
                        <strong>{stats.total_categories}</strong>
                        <span>"Categories"</span>
                    </div>
                </div>
            </section>

            <section class="landing__features">
                <div class="container">
                    <h2 class="section-title">"Everything you need to study smarter"</h2>
                    <div class="landing__feature-grid">
                        <div class="feature-card">
                            <div class="feature-card__icon">"🔍"</div>
                            <h3>"Find it fast"</h3>
                            <p>"Search by title, author or tag, or browse by category. No accounts, no paywalls."</p>
                        </div>
                        <div class="feature-card">
                            <div class="feature-card__icon">"👁"</div>
                            <h3>"Preview first"</h3>
                            <p>"Every resource opens in a detail view with page counts, file sizes and reader ratings."</p>
                        </div>
                        <div class="feature-card">
                            <div class="feature-card__icon">"⭐"</div>
                            <h3>"Rated by readers"</h3>
                            <p>"Ratings blend the curated score with real student reviews, so averages mean something."</p>
                        </div>
                        <div class="feature-card">
                            <div class="feature-card__icon">"⬇"</div>
                            <h3>"Download instantly"</h3>
                            <p>"PDF and EPUB downloads with one click. Your reading history lives in your dashboard."</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="landing__categories">
                <div class="container">
                    <h2 class="section-title">"Browse by category"</h2>
                    <div class="landing__cat-grid">
                        {Category::ALL
                            .into_iter()
                            .map(|cat| {
                                let open_category = {
                                    let navigate = use_navigate();
                                    move |_| {
                                        navigate(
                                            &format!("/categories?cat={}", cat.slug()),
                                            Default::default(),
                                        )
                                    }
                                };
                                view! {
                                    <button class="landing__cat-card" on:click=open_category>
                                        <span class="landing__cat-icon">{cat.icon()}</span>
                                        <span class="landing__cat-label">{cat.plural()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="landing__cta">
                <div class="container landing__cta-inner">
                    <h2>"Ready to dive in?"</h2>
                    <p>"Join thousands of learners using ReadSpace every week."</p>
                    <button class="btn btn--primary btn--lg" on:click=create_account>
                        "Sign Up — It's Free"
                    </button>
                </div>
            </section>
        </main>
    }
}
