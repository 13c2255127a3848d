//! Dashboard pages - единственный источник правды для маппинга page key → View
//! и для заголовков страниц.

pub mod goals;
pub mod payments;
pub mod spending;
pub mod tasks;

pub use goals::GoalsPage;
pub use payments::PaymentsPage;
pub use spending::SpendingPage;
pub use tasks::TasksPage;

use leptos::prelude::*;

/// Возвращает читаемый заголовок страницы для данного ключа. Fallback: сам ключ.
pub fn page_title_for_key(key: &str) -> &str {
    match key {
        "tasks" => "Tasks",
        "goals" => "Financial Goals",
        "spending" => "Spending",
        "payments" => "Payments",
        other => other,
    }
}

/// Рендерит контент страницы по её ключу.
///
/// # Returns
/// AnyView с содержимым страницы или placeholder для неизвестных ключей
pub fn render_page(key: &str) -> AnyView {
    match key {
        "tasks" => view! { <TasksPage /> }.into_any(),
        "goals" => view! { <GoalsPage /> }.into_any(),
        "spending" => view! { <SpendingPage /> }.into_any(),
        "payments" => view! { <PaymentsPage /> }.into_any(),
        unknown => {
            leptos::logging::log!("⚠️ render_page: unknown key '{}'", unknown);
            view! {
                <div class="page page--placeholder">
                    <p>{format!("Unknown page: {}", unknown)}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_key_has_a_title() {
        assert_eq!(page_title_for_key("tasks"), "Tasks");
        assert_eq!(page_title_for_key("goals"), "Financial Goals");
        assert_eq!(page_title_for_key("spending"), "Spending");
        assert_eq!(page_title_for_key("payments"), "Payments");
    }

    #[test]
    fn test_unknown_key_falls_back_to_itself() {
        assert_eq!(page_title_for_key("reports"), "reports");
        assert_eq!(page_title_for_key(""), "");
    }
}
