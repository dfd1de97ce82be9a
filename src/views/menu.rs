use crate::rotation::local_today;
use crate::theme::theme_definition;
use crate::types::{DayKey, Meal, ThemePreference, WeekKey};
use crate::ui::{AppContext, toggle_theme};
use dioxus::prelude::*;

fn chip_class(active: bool) -> &'static str {
    if active { "chip active" } else { "chip" }
}

#[component]
pub fn MenuView(context: AppContext, theme: Signal<ThemePreference>) -> Element {
    // Resolved once per activation; the chips only change what is shown.
    let today = use_hook(|| context.rotation.resolve(local_today()));
    let mut selected_week = use_signal(|| today.week);
    let mut selected_day = use_signal(|| today.day);

    let Some(mode) = theme().mode() else {
        return rsx! {};
    };
    let definition = theme_definition(mode);
    let today_label = today.day.label();
    let preferences = context.preferences.clone();

    let body = match context.menu.daily(selected_week(), selected_day()) {
        Some(daily) => rsx! {
            MealSection { title: "Lunch", meal: daily.lunch.clone() }
            MealSection { title: "Dinner", meal: daily.dinner.clone() }
        },
        None => rsx! {
            p { class: "item", "No menu for this day." }
        },
    };

    rsx! {
        div { class: "header",
            div {
                p { class: "header-day", "{today_label}" }
                p { class: "header-subtitle", "Weekly Menu" }
            }
            button {
                class: "theme-button",
                r#type: "button",
                title: definition.toggle_label,
                onclick: move |_| toggle_theme(theme, preferences.clone()),
                "{definition.toggle_icon}"
            }
        }
        div { class: "chip-row",
            for week in WeekKey::ALL {
                button {
                    key: "{week}",
                    class: chip_class(selected_week() == week),
                    r#type: "button",
                    onclick: move |_| selected_week.set(week),
                    {week.label()}
                }
            }
        }
        div { class: "chip-row",
            for day in DayKey::ALL {
                button {
                    key: "{day}",
                    class: chip_class(selected_day() == day),
                    r#type: "button",
                    onclick: move |_| selected_day.set(day),
                    {day.short_label()}
                }
            }
        }
        div { class: "content", {body} }
    }
}

#[component]
fn MealSection(title: &'static str, meal: Meal) -> Element {
    rsx! {
        div { class: "section",
            h2 { class: "section-title", "{title}" }
            CourseCard { title: "First Course", items: meal.first.clone() }
            CourseCard { title: "Main Course", items: meal.main.clone() }
        }
    }
}

#[component]
fn CourseCard(title: &'static str, items: Vec<String>) -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "card-title", "{title}" }
            div { class: "divider" }
            for item in items.iter() {
                p { class: "item", "• {item}" }
            }
        }
    }
}
