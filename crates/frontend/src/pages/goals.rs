use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn GoalsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Financial Goals" subtitle="Savings targets and progress".to_string() />
            <div class="page__body">
                <p class="page__empty">"No goals defined yet."</p>
            </div>
        </div>
    }
}
