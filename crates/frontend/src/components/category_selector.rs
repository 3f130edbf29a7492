use dioxus::prelude::*;
use parkmap_shared::models::Category;
use parkmap_shared::ParkView;

use crate::components::map_marker::{category_color, category_icon};

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Attraction => "Attraksjoner",
        Category::Food => "Mat",
        Category::Restroom => "WC",
        Category::FirstAid => "Førstehjelp",
        Category::Show => "Show",
    }
}

/// Toggle buttons for each category. Pressing the active one clears it.
#[component]
pub fn CategorySelector(view: Signal<ParkView>) -> Element {
    let mut view = view;
    let selected = view.read().selected_category();
    let buttons: Vec<(Category, &'static str, String, &'static str, &'static str)> = Category::ALL
        .into_iter()
        .map(|category| {
            let active = selected == Some(category);
            let class = if active { "category active" } else { "category" };
            let style = if active {
                format!("background: {};", category_color(category))
            } else {
                String::new()
            };
            (category, class, style, category_icon(category), category_label(category))
        })
        .collect();

    rsx! {
        div { class: "category-selector",
            for (category, class, style, icon, label) in buttons {
                button {
                    key: "{category}",
                    class: "{class}",
                    style: "{style}",
                    onclick: move |_| view.write().toggle_category(category),
                    span { class: "category-icon", "{icon}" }
                    span { class: "category-label", "{label}" }
                }
            }
        }
    }
}
