/// Application root: global providers (theme, auth, ratings), router and
/// page routes. Every page below shares the one ratings store provided here.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::auth;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::categories::CategoriesPage;
use crate::pages::home::HomePage;
use crate::pages::landing::LandingPage;
use crate::pages::latest::LatestPage;
use crate::pages::login::LoginPage;
use crate::pages::popular::PopularPage;
use crate::pages::signup::SignupPage;
use crate::pages::user_dashboard::UserDashboardPage;
use crate::ratings;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    theme::provide_theme();
    auth::provide_auth();
    ratings::provide_ratings(ratings::default_storage());

    view! {
        <Stylesheet id="leptos" href="/pkg/readspace.css"/>
        <Title text="ReadSpace — Open Educational Resources"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/home" view=HomePage/>
                    <Route path="/categories" view=CategoriesPage/>
                    <Route path="/popular" view=PopularPage/>
                    <Route path="/latest" view=LatestPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/dashboard" view=UserDashboardPage/>
                    <Route path="/admin" view=AdminDashboardPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2 class="not-found__code">"404"</h2>
            <p class="not-found__text">"Page not found."</p>
            <A href="/" class="btn btn--primary">"Back to ReadSpace"</A>
        </div>
    }
}
