pub mod category_selector;
pub mod distance_bubble;
pub mod map_marker;
pub mod map_view;
pub mod user_marker;
