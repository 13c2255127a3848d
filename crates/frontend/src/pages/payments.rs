use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn PaymentsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Payments" subtitle="Upcoming and scheduled payments".to_string() />
            <div class="page__body">
                <p class="page__empty">"No payments scheduled yet."</p>
            </div>
        </div>
    }
}
