use leptos::*;
use leptos_router::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <div class="footer__brand">
                    <span class="footer__logo">"📚 ReadSpace"</span>
                    <p class="footer__tagline">
                        "Free educational resources for every learner. Curated, previewed, downloadable."
                    </p>
                </div>

                <div class="footer__col">
                    <h4>"Browse"</h4>
                    <A href="/home">"All Resources"</A>
                    <A href="/categories">"Categories"</A>
                    <A href="/popular">"Popular"</A>
                    <A href="/latest">"Latest"</A>
                </div>

                <div class="footer__col">
                    <h4>"Account"</h4>
                    <A href="/login">"Login"</A>
                    <A href="/signup">"Sign Up"</A>
                    <A href="/dashboard">"My Dashboard"</A>
                </div>
            </div>

            <div class="footer__bottom">
                <span>"© 2026 ReadSpace. All resources are openly licensed."</span>
            </div>
        </footer>
    }
}
