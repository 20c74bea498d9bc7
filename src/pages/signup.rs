use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::auth::use_auth;
use crate::components::captcha::{Captcha, CaptchaState};

#[cfg(not(feature = "ssr"))]
const SIGNUP_DELAY_MS: u32 = 600;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let captcha = CaptchaState::new();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (captcha_input, set_captcha_input) = create_signal(String::new());
    let (captcha_error, set_captcha_error) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let handle_submit = {
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if loading.get_untracked() {
                return;
            }
            set_error.set(None);
            set_captcha_error.set(None);

            if password.get_untracked() != confirm.get_untracked() {
                set_error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if !captcha.verify(&captcha_input.get_untracked()) {
                set_captcha_error.set(Some("Verification code does not match".to_string()));
                set_captcha_input.set(String::new());
                captcha.refresh();
                return;
            }

            set_loading.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                #[cfg(not(feature = "ssr"))]
                gloo_timers::future::TimeoutFuture::new(SIGNUP_DELAY_MS).await;
                let result = auth.signup(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                );
                set_loading.set(false);
                match result {
                    Ok(_) => navigate("/dashboard", Default::default()),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"📚"</div>
                <h1 class="auth-card__title">"Create your account"</h1>
                <p class="auth-card__sub">"Free forever. No credit card, no spam."</p>

                {move || error.get().map(|msg| view! {
                    <div class="auth-error" role="alert" aria-live="assertive">
                        <span class="auth-error__icon" aria-hidden="true">"⚠"</span>
                        {msg}
                    </div>
                })}

                <form class="auth-form" on:submit=handle_submit novalidate=true>
                    <div class="form-group">
                        <label class="form-label" for="name">"Full name"</label>
                        <input
                            id="name"
                            name="name"
                            type="text"
                            class="form-input"
                            placeholder="Ada Lovelace"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                set_error.set(None);
                                set_name.set(event_target_value(&ev));
                            }
                            autocomplete="name"
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="signup-email">"Email address"</label>
                        <input
                            id="signup-email"
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
                    <div class="form-row">
                        <div class="form-group">
                            <label class="form-label" for="signup-password">"Password"</label>
                            <input
                                id="signup-password"
                                name="password"
                                type="password"
                                class="form-input"
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    set_error.set(None);
                                    set_password.set(event_target_value(&ev));
                                }
                                autocomplete="new-password"
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="confirm">"Confirm password"</label>
                            <input
                                id="confirm"
                                name="confirm"
                                type="password"
                                class="form-input"
                                placeholder="••••••••"
                                prop:value=move || confirm.get()
                                on:input=move |ev| {
                                    set_error.set(None);
                                    set_confirm.set(event_target_value(&ev));
                                }
                                autocomplete="new-password"
                            />
                        </div>
                    </div>

                    <Captcha
                        state=captcha
                        value=captcha_input
                        on_change=move |input| {
                            set_captcha_error.set(None);
                            set_captcha_input.set(input);
                        }
                        error=captcha_error
                    />

                    <button type="submit" class="btn btn--primary btn--full btn--lg" disabled=loading>
                        {move || if loading.get() { "Creating account…" } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </main>
    }
}
