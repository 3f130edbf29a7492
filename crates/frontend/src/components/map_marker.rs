use dioxus::prelude::*;
use parkmap_shared::models::{Category, Location, MarkerState};

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Attraction => "#a855f7",
        Category::Food => "#f97316",
        Category::Restroom => "#3b82f6",
        Category::FirstAid => "#ef4444",
        Category::Show => "#ec4899",
    }
}

pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Attraction => "🎢",
        Category::Food => "🍔",
        Category::Restroom => "🚻",
        Category::FirstAid => "🚑",
        Category::Show => "🎭",
    }
}

/// Inline style for a marker: faded when another category is active,
/// enlarged when highlighted.
fn marker_style(location: &Location, state: MarkerState) -> String {
    let opacity = if state.dimmed { 0.3 } else { 1.0 };
    let scale = if state.highlighted { 1.2 } else { 1.0 };
    format!(
        "left: {}px; top: {}px; opacity: {}; transform: translate(-50%, -50%) scale({});",
        location.x, location.y, opacity, scale
    )
}

#[component]
pub fn MapMarker(location: Location, state: MarkerState, on_select: EventHandler<String>) -> Element {
    let style = marker_style(&location, state);
    let color = category_color(location.category);
    let icon = category_icon(location.category);
    let class = if state.selected { "map-marker selected" } else { "map-marker" };
    let id = location.id.clone();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onclick: move |_| on_select.call(id.clone()),
            div { class: "marker-badge", style: "background: {color};", "{icon}" }
            if state.highlighted || state.selected {
                div { class: "marker-label", "{location.name}" }
            }
        }
    }
}

#[component]
pub fn EntranceMarker(x: f64, y: f64) -> Element {
    rsx! {
        div {
            class: "map-marker entrance",
            style: "left: {x}px; top: {y}px; transform: translate(-50%, -50%);",
            div { class: "marker-badge", "🚪" }
            div { class: "marker-label", "Inngang" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_style_dimmed() {
        let loc = Location::new("wc1", 450.0, 300.0, Category::Restroom, "WC Nord");
        let style = marker_style(
            &loc,
            MarkerState {
                dimmed: true,
                ..Default::default()
            },
        );
        assert!(style.contains("opacity: 0.3"));
        assert!(style.contains("scale(1)"));
        assert!(style.contains("left: 450px"));
    }

    #[test]
    fn test_marker_style_highlighted() {
        let loc = Location::new("wc1", 450.0, 300.0, Category::Restroom, "WC Nord");
        let style = marker_style(
            &loc,
            MarkerState {
                highlighted: true,
                ..Default::default()
            },
        );
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("scale(1.2)"));
    }
}
