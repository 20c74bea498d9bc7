use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::auth::use_auth;

/// Fixed pause before resolving the mock login, purely for UX feedback.
#[cfg(not(feature = "ssr"))]
const LOGIN_DELAY_MS: u32 = 600;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let fill_student = move |_| {
        set_error.set(None);
        set_email.set("student@readspace.edu".to_string());
        set_password.set("student123".to_string());
    };
    let fill_admin = move |_| {
        set_error.set(None);
        set_email.set("admin@readspace.edu".to_string());
        set_password.set("admin123".to_string());
    };

    let handle_submit = {
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if loading.get_untracked() {
                return;
            }
            set_error.set(None);
            set_loading.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                #[cfg(not(feature = "ssr"))]
                gloo_timers::future::TimeoutFuture::new(LOGIN_DELAY_MS).await;
                let result = auth.login(&email.get_untracked(), &password.get_untracked());
                set_loading.set(false);
                match result {
                    Ok(user) => {
                        let target = if user.role.is_admin() { "/admin" } else { "/dashboard" };
                        navigate(target, Default::default());
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"📚"</div>
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__sub">"Sign in to your ReadSpace account"</p>

                <div class="auth-demo-btns">
                    <button class="btn btn--secondary btn--sm" on:click=fill_student>
                        "Demo Student"
                    </button>
                    <button class="btn btn--secondary btn--sm" on:click=fill_admin>
                        "Demo Admin"
                    </button>
                </div>

                {move || error.get().map(|msg| view! {
                    <div class="auth-error" role="alert" aria-live="assertive">
                        <span class="auth-error__icon" aria-hidden="true">"⚠"</span>
                        {msg}
                    </div>
                })}

                <form class="auth-form" on:submit=handle_submit novalidate=true>
                    <div class="form-group">
                        <label class="form-label" for="email">"Email address"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            class="form-input"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_error.set(None);
                                set_email.set(event_target_value(&ev));
                            }
                            autocomplete="email"
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="password">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            class="form-input"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_error.set(None);
                                set_password.set(event_target_value(&ev));
                            }
                            autocomplete="current-password"
                        />
                    </div>
                    <button type="submit" class="btn btn--primary btn--full btn--lg" disabled=loading>
                        {move || if loading.get() { "Signing in…" } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? " <A href="/signup">"Create one"</A>
                </p>
            </div>
        </main>
    }
}
