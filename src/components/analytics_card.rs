use leptos::*;

#[component]
pub fn AnalyticsCard(
    #[prop(into)] icon: String,
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(into, default = String::new())] sub: String,
    #[prop(into, default = "#1a56db".to_string())] color: String,
) -> impl IntoView {
    let icon_style = format!("background:{color}1a;color:{color}");

    view! {
        <div class="analytics-card">
            <div class="analytics-card__icon" style=icon_style>{icon}</div>
            <div class="analytics-card__body">
                <p class="analytics-card__label">{label}</p>
                <p class="analytics-card__value">{value}</p>
                {(!sub.is_empty()).then(|| view! { <p class="analytics-card__sub">{sub}</p> })}
            </div>
        </div>
    }
}
