use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn SpendingPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Spending" subtitle="Where the money goes".to_string() />
            <div class="page__body">
                <p class="page__empty">"No spending recorded yet."</p>
            </div>
        </div>
    }
}
