use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;

use crate::auth::use_auth;
use crate::components::access_denied::AccessDenied;
use crate::components::analytics_card::AnalyticsCard;
use crate::components::review_table::ReviewTable;
use crate::data;
use crate::ratings::use_ratings;
use crate::utils::{group_thousands, star_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminSection {
    Overview,
    Upload,
    Resources,
    Reviews,
    Users,
}

impl AdminSection {
    const ALL: [AdminSection; 5] = [
        AdminSection::Overview,
        AdminSection::Upload,
        AdminSection::Resources,
        AdminSection::Reviews,
        AdminSection::Users,
    ];

    fn label(self) -> &'static str {
        match self {
            AdminSection::Overview => "📊 Overview",
            AdminSection::Upload => "⬆ Upload Resource",
            AdminSection::Resources => "📚 Manage Resources",
            AdminSection::Reviews => "💬 Moderate Reviews",
            AdminSection::Users => "👥 Manage Users",
        }
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || if auth.is_admin() {
            view! { <AdminPanel/> }.into_view()
        } else {
            view! {
                <AccessDenied
                    title="Admin Access Required"
                    message="Login with an admin account to access the admin panel."
                />
            }
            .into_view()
        }}
    }
}

#[component]
fn AdminPanel() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (section, set_section) = create_signal(AdminSection::Overview);

    let handle_logout = move |_| {
        auth.logout();
        navigate("/", Default::default());
    };

    view! {
        <main class="admin">
            <aside class="admin__sidebar">
                <div class="admin__brand">"🛡 Admin Panel"</div>
                <nav class="admin__nav">
                    {AdminSection::ALL
                        .into_iter()
                        .map(|s| view! {
                            <button
                                class="admin__nav-btn"
                                class:active=move || section.get() == s
                                on:click=move |_| set_section.set(s)
                            >
                                {s.label()}
                            </button>
                        })
                        .collect_view()}
                    <button class="admin__nav-btn admin__logout" on:click=handle_logout>
                        "🚪 Logout"
                    </button>
                </nav>
            </aside>

            <div class="admin__main">
                {move || match section.get() {
                    AdminSection::Overview => view! { <OverviewSection/> }.into_view(),
                    AdminSection::Upload => view! { <UploadSection/> }.into_view(),
                    AdminSection::Resources => view! { <ResourcesSection/> }.into_view(),
                    AdminSection::Reviews => view! {
                        <section>
                            <h2 class="admin__section-title">"Moderate Reviews"</h2>
                            <ReviewTable/>
                        </section>
                    }
                    .into_view(),
                    AdminSection::Users => view! { <UsersSection/> }.into_view(),
                }}
            </div>
        </main>
    }
}

#[component]
fn OverviewSection() -> impl IntoView {
    let ratings = use_ratings();
    let stats = data::analytics();
    let chart_max = stats
        .monthly_downloads
        .iter()
        .map(|m| m.value)
        .max()
        .unwrap_or(1);

    let review_stats = move || ratings.global_stats();

    view! {
        <section>
            <h2 class="admin__section-title">"Dashboard Overview"</h2>
            <div class="admin__analytics-grid">
                <AnalyticsCard
                    icon="📚"
                    label="Total Resources"
                    value=stats.total_resources.to_string()
                    sub="↑ 3 this month"
                    color="#1a56db"
                />
                <AnalyticsCard
                    icon="👥"
                    label="Registered Users"
                    value=group_thousands(stats.total_users)
                    sub="↑ 124 this month"
                    color="#10b981"
                />
                <AnalyticsCard
                    icon="⬇"
                    label="Total Downloads"
                    value=group_thousands(stats.total_downloads as u32)
                    sub="↑ 8,200 this month"
                    color="#f59e0b"
                />
                <AnalyticsCard
                    icon="💬"
                    label="Reader Reviews"
                    value=Signal::derive(move || review_stats().total_user_reviews.to_string())
                    sub="Submitted in this browser"
                    color="#8b5cf6"
                />
            </div>

            <div class="admin__chart-card">
                <h3>"Monthly Downloads (Mock Data)"</h3>
                <div class="admin__bar-chart">
                    {stats
                        .monthly_downloads
                        .iter()
                        .map(|m| {
                            let height = (f64::from(m.value) / f64::from(chart_max) * 160.0).round();
                            let bar_style = format!("height:{height}px");
                            let title = format!("{}: {}", m.month, group_thousands(m.value));
                            view! {
                                <div class="admin__bar-col">
                                    <div class="admin__bar" style=bar_style title=title></div>
                                    <span class="admin__bar-label">{m.month}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn UploadSection() -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (author, set_author) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (success, set_success) = create_signal(false);

    // Mock upload: show the banner, clear the form. Nothing is stored.
    let handle_upload = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_success.set(true);
        set_title.set(String::new());
        set_author.set(String::new());
        set_description.set(String::new());
        spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            gloo_timers::future::TimeoutFuture::new(4000).await;
            set_success.set(false);
        });
    };

    view! {
        <section>
            <h2 class="admin__section-title">"Upload New Resource"</h2>
            <Show when=move || success.get() fallback=|| ()>
                <div class="admin__success-banner">
                    "✅ Resource uploaded successfully! (Mock action)"
                </div>
            </Show>
            <form class="admin__upload-form" on:submit=handle_upload>
                <div class="form-row">
                    <div class="form-group">
                        <label class="form-label">"Resource Title " <span class="required">"*"</span></label>
                        <input
                            class="form-input"
                            placeholder="e.g. Linear Algebra Done Right"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Author(s) " <span class="required">"*"</span></label>
                        <input
                            class="form-input"
                            placeholder="e.g. Sheldon Axler"
                            prop:value=move || author.get()
                            on:input=move |ev| set_author.set(event_target_value(&ev))
                            required=true
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label class="form-label">"Category"</label>
                    <select class="form-input form-select">
                        <option value="textbooks">"Textbook"</option>
                        <option value="research">"Research Paper"</option>
                        <option value="guides">"Study Guide"</option>
                        <option value="tutorials">"Tutorial"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label class="form-label">"Description"</label>
                    <textarea
                        class="form-input form-textarea"
                        rows="4"
                        placeholder="Brief description of the resource…"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label class="form-label">"Upload File (PDF/EPUB)"</label>
                    <div class="admin__file-drop">
                        <span>"📁 Drag & drop file here or click to browse"</span>
                        <input type="file" class="admin__file-input" accept=".pdf,.epub"/>
                    </div>
                </div>
                <button type="submit" class="btn btn--primary btn--lg">"⬆ Upload Resource"</button>
            </form>
        </section>
    }
}

#[component]
fn ResourcesSection() -> impl IntoView {
    let ratings = use_ratings();
    let catalog = data::resources();

    view! {
        <section>
            <h2 class="admin__section-title">"Manage Resources"</h2>
            <div class="admin__table-wrap">
                <table class="admin__table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Title"</th>
                            <th>"Category"</th>
                            <th>"Year"</th>
                            <th>"Downloads"</th>
                            <th>"Rating"</th>
                            <th>"Reviews"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {catalog
                            .into_iter()
                            .map(|resource| {
                                let resource_id = resource.id;
                                let base_rating = resource.rating;
                                let avg = move || ratings.avg_rating(resource_id, base_rating);
                                let count = move || ratings.user_review_count(resource_id);
                                view! {
                                    <tr>
                                        <td>{resource.id}</td>
                                        <td>
                                            <div class="admin__table-resource">
                                                <img
                                                    src=resource.thumbnail.clone()
                                                    alt=resource.title.clone()
                                                    class="admin__table-thumb"
                                                />
                                                <span>{resource.title.clone()}</span>
                                            </div>
                                        </td>
                                        <td><span class="cat-tag">{resource.category.label()}</span></td>
                                        <td>{resource.year}</td>
                                        <td>{group_thousands(resource.downloads)}</td>
                                        <td>
                                            <span class="review__stars">{move || star_string(avg())}</span>
                                            " " {move || format!("{:.1}", avg())}
                                        </td>
                                        <td>{count}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[component]
fn UsersSection() -> impl IntoView {
    view! {
        <section>
            <h2 class="admin__section-title">"Manage Users"</h2>
            <div class="admin__table-wrap">
                <table class="admin__table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Joined"</th>
                            <th>"Downloads"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {data::registered_users()
                            .into_iter()
                            .map(|user| {
                                let role_class = format!("role-tag role-tag--{}", user.role.label());
                                let status_class =
                                    format!("status-tag status-tag--{}", user.status.label());
                                let avatar = user.name.chars().next().unwrap_or('?');
                                view! {
                                    <tr>
                                        <td>{user.id}</td>
                                        <td>
                                            <div class="admin__table-user">
                                                <div class="admin__user-avatar">{avatar}</div>
                                                <span>{user.name.clone()}</span>
                                            </div>
                                        </td>
                                        <td>{user.email.clone()}</td>
                                        <td><span class=role_class>{user.role.label()}</span></td>
                                        <td>{user.joined.clone()}</td>
                                        <td>{user.downloads}</td>
                                        <td><span class=status_class>{user.status.label()}</span></td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
