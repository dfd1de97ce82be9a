use crate::menu::MenuBook;
use crate::preferences::PreferenceStore;
use crate::rotation::Rotation;
use crate::theme::{BASE_CSS, theme_definition};
use crate::types::{ThemeMode, ThemePreference};
use crate::views::{AboutView, MenuView};
use dioxus::prelude::*;

/// State built before launch and handed to the root component.
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    pub rotation: Rotation,
    pub menu: &'static MenuBook,
    pub preferences: PreferenceStore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Menu,
    About,
}

#[component]
pub fn App() -> Element {
    let context = use_context::<AppContext>();
    let theme = use_theme_preference(context.preferences.clone());
    let active_tab = use_signal(|| AppTab::Menu);

    // Nothing themed is drawn until the saved preference is known.
    let Some(mode) = theme().mode() else {
        return rsx! {};
    };

    rsx! {
        ThemeStyles { mode }
        div { class: "root",
            TabPanels { active_tab, context, theme }
            TabNavigation { active_tab }
        }
    }
}

/// Starts unloaded and resolves once from storage.
fn use_theme_preference(preferences: PreferenceStore) -> Signal<ThemePreference> {
    let mut theme = use_signal(ThemePreference::default);
    use_hook(move || {
        spawn(async move {
            let mode = preferences.load_theme().await;
            tracing::info!(theme = mode.as_stored(), "theme preference loaded");
            theme.set(mode.into());
        });
    });
    theme
}

/// Flips the theme and writes it back without waiting on the result.
pub fn toggle_theme(mut theme: Signal<ThemePreference>, preferences: PreferenceStore) {
    let next = theme().toggled();
    let Some(mode) = next.mode() else {
        return;
    };
    theme.set(next);
    spawn(async move {
        if let Err(err) = preferences.save_theme(mode).await {
            tracing::warn!(error = %err, "failed to save theme preference");
        }
    });
}

#[component]
fn ThemeStyles(mode: ThemeMode) -> Element {
    let definition = theme_definition(mode);
    rsx! {
        style { dangerous_inner_html: BASE_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn TabPanels(
    active_tab: Signal<AppTab>,
    context: AppContext,
    theme: Signal<ThemePreference>,
) -> Element {
    match active_tab() {
        AppTab::Menu => rsx! { MenuView { context, theme } },
        AppTab::About => rsx! { AboutView {} },
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Menu, label: "Menu" }
            TabButton { active_tab, tab: AppTab::About, label: "About" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab { "tab active" } else { "tab" };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, StorageResult};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// A store whose reads never complete, so the theme stays unloaded.
    struct StalledStore;

    #[async_trait]
    impl KeyValueStore for StalledStore {
        async fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            std::future::pending().await
        }

        async fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            std::future::pending().await
        }

        async fn remove(&self, _key: &str) -> StorageResult<()> {
            std::future::pending().await
        }
    }

    fn context_with(store: Arc<dyn KeyValueStore>) -> AppContext {
        AppContext {
            rotation: Rotation::default(),
            menu: MenuBook::bundled().unwrap(),
            preferences: PreferenceStore::new(store),
        }
    }

    #[tokio::test]
    async fn test_nothing_renders_before_theme_loads() {
        let mut dom = VirtualDom::new(App).with_root_context(context_with(Arc::new(StalledStore)));
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("<style"), "theme styles rendered: {html}");
        assert!(!html.contains("Weekly Menu"), "menu rendered: {html}");
        assert!(!html.contains("class=\"root\""), "layout rendered: {html}");
    }
}
