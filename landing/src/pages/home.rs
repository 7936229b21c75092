// Home page - hero + statistics
use crate::sections::HeroSection;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <HeroSection /> }
}
