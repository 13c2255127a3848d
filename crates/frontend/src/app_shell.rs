//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - основной layout приложения (Shell + Sidebar + контент страницы)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::pages::render_page;
use leptos::prelude::*;

/// Main application layout с Sidebar и контентом активной страницы.
///
/// Владеет выбором страницы через `AppGlobalContext`: Sidebar получает
/// `active_page` только на чтение и сообщает о кликах через callback.
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Keep document.title in sync with the active page. Runs once per shell.
    ctx.init_title_sync();

    let set_active_page = Callback::new(move |id: String| ctx.activate_page(&id));

    view! {
        <Shell
            left=move || {
                view! {
                    <Sidebar active_page=ctx.active_page set_active_page=set_active_page />
                }
                    .into_any()
            }
            center=move || {
                view! { {move || render_page(&ctx.active_page.get())} }.into_any()
            }
        />
    }
}
