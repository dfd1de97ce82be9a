use dioxus::prelude::*;

const REPO_URL: &str = "https://github.com/michadasis/generic-restaurant-app";

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "content",
            div { class: "card",
                h2 { class: "card-title", "About this app" }
                div { class: "divider" }
                p { class: "item",
                    "This app was developed for the University of West Macedonia's students in order for them to have easier access to the weekly menu in a clean and simple way."
                }
                p { class: "item", "Built with Rust and Dioxus for mobile devices." }
                p { class: "item",
                    "Source code: "
                    a { class: "link", href: REPO_URL, target: "_blank", "GitHub Repo" }
                }
            }
        }
    }
}
