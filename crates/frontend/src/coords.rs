use parkmap_shared::Point;

/// Convert client (viewport) coordinates to container-relative pixel coordinates.
pub fn client_to_container(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point::new(client_x - rect_left, client_y - rect_top)
}

/// Get the bounding client rect of an element by id.
pub fn container_rect(container_id: &str) -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    Some(element.get_bounding_client_rect())
}

/// Container-relative position of a pointer event, using the live layout.
pub fn client_to_container_point(client_x: f64, client_y: f64, container_id: &str) -> Option<Point> {
    let rect = container_rect(container_id)?;
    Some(client_to_container(client_x, client_y, rect.left(), rect.top()))
}

/// Rendered width and height of the container.
pub fn container_size(container_id: &str) -> Option<(f64, f64)> {
    let rect = container_rect(container_id)?;
    Some((rect.width(), rect.height()))
}

/// CSS transform placing the map layer at `offset`.
pub fn translate_style(offset: Point) -> String {
    format!("transform: translate({}px, {}px);", offset.x, offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_to_container_origin() {
        let p = client_to_container(100.0, 200.0, 100.0, 200.0);
        assert!((p.x - 0.0).abs() < 1e-9);
        assert!((p.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_to_container_offset() {
        let p = client_to_container(450.0, 350.0, 320.0, 50.0);
        assert!((p.x - 130.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_translate_style() {
        assert_eq!(
            translate_style(Point::new(-455.0, -175.5)),
            "transform: translate(-455px, -175.5px);"
        );
    }
}
