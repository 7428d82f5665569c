//! DOM implementation of the sheet surface.

use citybuild_core::SheetSurface;
use citybuild_core::snap::translate_y_css;
use web_sys::HtmlElement;
use yew::NodeRef;

/// Inline-style writer for the sheet element.
pub struct ElementSurface {
    element: HtmlElement,
}

impl ElementSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Resolves the mounted element behind `node`, if any.
    pub fn from_node_ref(node: &NodeRef) -> Option<Self> {
        node.cast::<HtmlElement>().map(Self::new)
    }

    fn set(&self, property: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(property, value) {
            tracing::warn!("failed to set sheet {}: {:?}", property, e);
        }
    }

    fn remove(&self, property: &str) {
        if let Err(e) = self.element.style().remove_property(property) {
            tracing::warn!("failed to clear sheet {}: {:?}", property, e);
        }
    }
}

impl SheetSurface for ElementSurface {
    fn current_transform(&self) -> Option<String> {
        self.element
            .style()
            .get_property_value("transform")
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_translate_y(&mut self, offset_px: f64) {
        self.set("transform", &translate_y_css(offset_px));
    }

    fn clear_translate(&mut self) {
        self.remove("transform");
    }

    fn set_transition(&mut self, transition: Option<&str>) {
        match transition {
            Some(value) => self.set("transition", value),
            None => self.remove("transition"),
        }
    }

    fn set_user_select(&mut self, enabled: bool) {
        if enabled {
            self.remove("user-select");
        } else {
            self.set("user-select", "none");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn surface() -> ElementSurface {
        let element = gloo::utils::document()
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        ElementSurface::new(element)
    }

    #[wasm_bindgen_test]
    fn test_translate_round_trips_through_style() {
        let mut surface = surface();
        assert_eq!(surface.current_transform(), None);

        surface.set_translate_y(42.0);
        let transform = surface.current_transform().unwrap();
        assert!((citybuild_core::snap::parse_translate_y(&transform) - 42.0).abs() < 1e-9);

        surface.clear_translate();
        assert_eq!(surface.current_transform(), None);
    }

    #[wasm_bindgen_test]
    fn test_transition_and_user_select() {
        let mut surface = surface();
        surface.set_transition(Some("none"));
        assert_eq!(
            surface.element.style().get_property_value("transition").unwrap(),
            "none"
        );
        surface.set_transition(None);
        assert_eq!(
            surface.element.style().get_property_value("transition").unwrap(),
            ""
        );

        surface.set_user_select(false);
        assert_eq!(
            surface.element.style().get_property_value("user-select").unwrap(),
            "none"
        );
        surface.set_user_select(true);
        assert_eq!(
            surface.element.style().get_property_value("user-select").unwrap(),
            ""
        );
    }

    #[wasm_bindgen_test]
    fn test_clearing_unset_properties_leaves_style_empty() {
        let mut surface = surface();
        surface.clear_translate();
        surface.set_transition(None);
        surface.set_user_select(true);

        assert_eq!(surface.current_transform(), None);
        assert_eq!(surface.element.style().css_text(), "");
    }
}
