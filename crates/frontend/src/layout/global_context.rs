use crate::pages::page_title_for_key;
use leptos::prelude::*;
use web_sys::window;

/// Default page shown on startup, first entry of the sidebar menu.
const DEFAULT_PAGE: &str = "tasks";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(DEFAULT_PAGE.to_string()),
        }
    }

    pub fn activate_page(&self, key: &str) {
        leptos::logging::log!("🔶 activate_page: key='{}'", key);
        self.active_page.set(key.to_string());
    }

    /// Mirrors the active page into `document.title`.
    pub fn init_title_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            let key = this.active_page.get();
            let title = format!("{} · Agent Dashboard", page_title_for_key(&key));

            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(&title);
            }
        });
    }
}
