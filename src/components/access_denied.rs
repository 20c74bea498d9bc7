use leptos::*;
use leptos_router::use_navigate;

/// Shown in place of a dashboard when the session lacks the required role.
#[component]
pub fn AccessDenied(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <main class="access-denied">
            <div class="access-denied__card">
                <div class="access-denied__icon">"🛡"</div>
                <h2>{title}</h2>
                <p>{message}</p>
                <button
                    class="btn btn--primary"
                    on:click=move |_| navigate("/login", Default::default())
                >
                    "Go to Login"
                </button>
            </div>
        </main>
    }
}
