use leptos::*;
use leptos_router::{use_navigate, A};

use crate::auth::use_auth;
use crate::theme::{use_theme, Theme};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = create_signal(false);

    let close_menu = move |_| set_menu_open.set(false);
    let handle_logout = {
        let navigate = navigate.clone();
        move |_| {
            auth.logout();
            set_menu_open.set(false);
            navigate("/", Default::default());
        }
    };

    let theme_icon = move || match theme.theme() {
        Theme::Light => "🌙",
        Theme::Dark => "☀",
    };

    // Dashboard link target depends on the signed-in role.
    let dashboard_href = move || {
        if auth.is_admin() {
            "/admin"
        } else {
            "/dashboard"
        }
    };

    view! {
        <nav class="navbar">
            <div class="container navbar__inner">
                <A href="/" class="navbar__logo" on:click=close_menu>
                    <span class="navbar__logo-icon">"📚"</span>
                    <span class="navbar__logo-text">"Read" <strong>"Space"</strong></span>
                </A>

                <ul class="navbar__links">
                    <li><A href="/home">"Home"</A></li>
                    <li><A href="/categories">"Categories"</A></li>
                    <li><A href="/popular">"Popular"</A></li>
                    <li><A href="/latest">"Latest"</A></li>
                </ul>

                <div class="navbar__actions">
                    <button
                        class="navbar__theme-btn"
                        title="Toggle theme"
                        aria-label="Toggle color theme"
                        on:click=move |_| theme.toggle()
                    >
                        {theme_icon}
                    </button>

                    {move || match auth.current() {
                        Some(user) => view! {
                            <div class="navbar__user">
                                <A href=dashboard_href() class="navbar__user-name" on:click=close_menu>
                                    "👤 " {user.name.clone()}
                                </A>
                                <button class="btn btn--outline btn--sm" on:click=handle_logout.clone()>
                                    "Logout"
                                </button>
                            </div>
                        }
                        .into_view(),
                        None => view! {
                            <div class="navbar__auth">
                                <A href="/login" class="btn btn--ghost btn--sm" on:click=close_menu>"Login"</A>
                                <A href="/signup" class="btn btn--primary btn--sm" on:click=close_menu>"Sign Up"</A>
                            </div>
                        }
                        .into_view(),
                    }}
                </div>

                <button
                    class="navbar__hamburger"
                    class:open=menu_open
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span><span></span><span></span>
                </button>
            </div>

            <div class="navbar__mobile" class:open=menu_open>
                <A href="/home" on:click=close_menu>"Home"</A>
                <A href="/categories" on:click=close_menu>"Categories"</A>
                <A href="/popular" on:click=close_menu>"Popular"</A>
                <A href="/latest" on:click=close_menu>"Latest"</A>
                {move || match auth.current() {
                    Some(_) => view! {
                        <A href=dashboard_href() on:click=close_menu>
                            {if auth.is_admin() { "Admin Panel" } else { "My Dashboard" }}
                        </A>
                    }
                    .into_view(),
                    None => view! {
                        <A href="/login" on:click=close_menu>"Login"</A>
                    }
                    .into_view(),
                }}
            </div>
        </nav>
    }
}
