//! TopHeader component - application top bar.
//!
//! Contains the application brand only; sidebar collapse lives in the
//! sidebar's own toggle button.

use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Agent Dashboard"</span>
            </div>
        </div>
    }
}
