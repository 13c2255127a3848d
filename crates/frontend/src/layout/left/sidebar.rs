//! Sidebar component with collapsible menu items

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MenuItem {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
}

/// Fixed navigation menu, in display order.
fn menu_items() -> [MenuItem; 4] {
    [
        MenuItem { id: "tasks", label: "Tasks", icon: "list-todo" },
        MenuItem { id: "goals", label: "Financial Goals", icon: "pie-chart" },
        MenuItem { id: "spending", label: "Spending", icon: "wallet" },
        MenuItem { id: "payments", label: "Payments", icon: "calendar-check" },
    ]
}

fn item_class(active: bool) -> &'static str {
    if active {
        "app-sidebar__item app-sidebar__item--active"
    } else {
        "app-sidebar__item"
    }
}

// Collapsed mode swaps the icon background instead of highlighting the row.
fn icon_box_class(collapsed: bool, active: bool) -> &'static str {
    match (collapsed, active) {
        (true, true) => "app-sidebar__icon app-sidebar__icon--boxed app-sidebar__icon--boxed-active",
        (true, false) => "app-sidebar__icon app-sidebar__icon--boxed",
        (false, _) => "app-sidebar__icon",
    }
}

fn label_class(active: bool) -> &'static str {
    if active {
        "app-sidebar__label app-sidebar__label--active"
    } else {
        "app-sidebar__label"
    }
}

fn toggle_label(collapsed: bool) -> &'static str {
    if collapsed {
        "Expand sidebar"
    } else {
        "Collapse sidebar"
    }
}

#[component]
pub fn Sidebar(
    /// Identifier of the page currently shown, owned by the shell.
    #[prop(into)]
    active_page: Signal<String>,
    /// Called with the clicked item's id.
    set_active_page: Callback<String>,
) -> impl IntoView {
    let collapsed = RwSignal::new(false);

    view! {
        <aside class="app-sidebar" class:app-sidebar--collapsed=move || collapsed.get()>
            <div class="app-sidebar__top">
                <button
                    class="app-sidebar__toggle"
                    aria-label=move || toggle_label(collapsed.get())
                    title=move || toggle_label(collapsed.get())
                    on:click=move |_| collapsed.update(|value| *value = !*value)
                >
                    {move || if collapsed.get() { icon("chevron-right") } else { icon("chevron-left") }}
                </button>
            </div>

            <nav class="app-sidebar__nav">
                {menu_items().into_iter().map(|item| {
                    let id = item.id;
                    let is_item_active = move || active_page.get() == id;

                    view! {
                        <button
                            class=move || item_class(is_item_active())
                            on:click=move |_| set_active_page.run(id.to_string())
                        >
                            <div class="app-sidebar__icon-wrap">
                                <div class=move || icon_box_class(collapsed.get(), is_item_active())>
                                    {icon(item.icon)}
                                </div>
                                // Indicator dot, expanded mode only
                                <Show when=move || is_item_active() && !collapsed.get()>
                                    <span class="app-sidebar__dot"></span>
                                </Show>
                            </div>
                            <Show when=move || !collapsed.get()>
                                <span class=move || label_class(is_item_active())>{item.label}</span>
                            </Show>
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                <Show when=move || !collapsed.get()>
                    <span class="app-sidebar__footer-label">"Agent Dashboard"</span>
                </Show>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_is_fixed_and_ordered() {
        let ids: Vec<&str> = menu_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec!["tasks", "goals", "spending", "payments"]);
    }

    #[test]
    fn test_menu_ids_are_unique() {
        let items = menu_items();
        for (i, a) in items.iter().enumerate() {
            for b in items.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_menu_labels_and_icons() {
        let items = menu_items();
        assert_eq!(items[0].label, "Tasks");
        assert_eq!(items[1].label, "Financial Goals");
        assert_eq!(items[2].label, "Spending");
        assert_eq!(items[3].label, "Payments");
        assert_eq!(items[0].icon, "list-todo");
        assert_eq!(items[1].icon, "pie-chart");
        assert_eq!(items[2].icon, "wallet");
        assert_eq!(items[3].icon, "calendar-check");
    }

    #[test]
    fn test_at_most_one_item_matches_active_page() {
        let matches = |active: &str| menu_items().iter().filter(|item| item.id == active).count();
        assert_eq!(matches("goals"), 1);
        assert_eq!(matches("payments"), 1);
        assert_eq!(matches("unknown"), 0);
        assert_eq!(matches(""), 0);
    }

    #[test]
    fn test_item_class_marks_only_active() {
        assert!(item_class(true).contains("app-sidebar__item--active"));
        assert!(!item_class(false).contains("--active"));
    }

    #[test]
    fn test_icon_box_is_collapsed_only_treatment() {
        assert!(icon_box_class(true, true).contains("--boxed-active"));
        assert!(icon_box_class(true, false).contains("--boxed"));
        assert!(!icon_box_class(true, false).contains("--boxed-active"));
        assert!(!icon_box_class(false, true).contains("--boxed"));
        assert!(!icon_box_class(false, false).contains("--boxed"));
    }

    #[test]
    fn test_label_class_emphasis_follows_active() {
        assert!(label_class(true).contains("--active"));
        assert!(!label_class(false).contains("--active"));
    }

    #[test]
    fn test_toggle_label_announces_opposite_state() {
        assert_eq!(toggle_label(false), "Collapse sidebar");
        assert_eq!(toggle_label(true), "Expand sidebar");
    }
}
