use dioxus::prelude::*;
use parkmap_shared::GuidanceResult;

#[component]
pub fn DistanceBubble(guidance: GuidanceResult, compass_enabled: bool, target_name: String) -> Element {
    if !guidance.show_user_distance() {
        return rsx! {};
    }

    let distance = guidance.distance_from_user;
    let compass_distance = guidance.distance_from_compass;

    rsx! {
        div { class: "distance-bubbles",
            div { class: "distance-bubble",
                span { class: "distance-target", "{target_name}" }
                span { class: "distance-sep", "•" }
                span { class: "distance-value", "{distance} m" }
            }
            if compass_enabled && guidance.show_compass_distance() {
                div { class: "distance-bubble compass",
                    span { "Fra kompass" }
                    span { class: "distance-sep", "•" }
                    span { "{compass_distance} m" }
                }
            }
        }
    }
}
