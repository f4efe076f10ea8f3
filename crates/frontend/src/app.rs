use crate::shared::components::date_field::DateField;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <DateField />
        </main>
    }
}
