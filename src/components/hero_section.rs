use leptos::*;
use leptos_router::use_navigate;

use crate::data;
use crate::utils::group_thousands;

#[component]
pub fn HeroSection() -> impl IntoView {
    let browse = {
        let navigate = use_navigate();
        move |_| navigate("/categories", Default::default())
    };
    let popular = {
        let navigate = use_navigate();
        move |_| navigate("/popular", Default::default())
    };

    let stats = data::analytics();

    view! {
        <section class="hero">
            <div class="hero__bg-shape hero__bg-shape--1" aria-hidden="true"></div>
            <div class="hero__bg-shape hero__bg-shape--2" aria-hidden="true"></div>

            <div class="container hero__content">
                <div class="hero__badge">"📖 Open Educational Resources"</div>

                <h1 class="hero__title">
                    "Knowledge is " <span class="hero__title-accent">"Free"</span> " for Everyone"
                </h1>

                <p class="hero__subtitle">
                    "Browse textbooks, research papers, study guides and tutorials — all \
                     curated, previewed and available for instant download."
                </p>

                <div class="hero__actions">
                    <button class="btn btn--primary btn--lg" on:click=browse>
                        "📚 Browse Library"
                    </button>
                    <button class="btn btn--outline btn--lg" on:click=popular>
                        "🔥 Popular Resources"
                    </button>
                </div>

                <div class="hero__stats">
                    <div class="hero__stat">
                        <strong>{stats.total_resources}</strong>
                        <span>"Resources"</span>
                    </div>
                    <div class="hero__stat">
                        <strong>{group_thousands(stats.total_downloads as u32)}</strong>
                        <span>"Downloads"</span>
                    </div>
                    <div class="hero__stat">
                        <strong>{group_thousands(stats.total_users)}</strong>
                        <span>"Learners"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
