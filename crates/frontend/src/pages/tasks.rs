use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Tasks" subtitle="Casework and follow-ups for the day".to_string() />
            <div class="page__body">
                <p class="page__empty">"No tasks to show yet."</p>
            </div>
        </div>
    }
}
