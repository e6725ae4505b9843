//! A small chainable builder over `web_sys::Element`.
//!
//! Attribute, class and style setters ignore DOM exceptions: they only fail
//! for malformed names, which are literals here.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, SvgElement};

use crate::{error::Error, js};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Element under construction.
#[derive(Debug, Clone)]
pub(crate) struct El(Element);

impl El {
    pub(crate) fn new(tag: &str) -> Result<Self, Error> {
        js::document()?
            .create_element(tag)
            .map(Self)
            .map_err(|_| Error::element_creation_failed(tag))
    }

    pub(crate) fn svg(tag: &str) -> Result<Self, Error> {
        js::document()?
            .create_element_ns(Some(SVG_NS), tag)
            .map(Self)
            .map_err(|_| Error::element_creation_failed(tag))
    }

    /// An anchor; off-site targets open in a new browsing context.
    pub(crate) fn link(href: &str) -> Result<Self, Error> {
        let anchor = Self::new("a")?.attr("href", href);
        Ok(if is_external(href) {
            anchor.attr("target", "_blank").attr("rel", "noopener noreferrer")
        } else {
            anchor
        })
    }

    pub(crate) fn wrap(element: Element) -> Self {
        Self(element)
    }

    /// Adds one or more space separated classes.
    pub(crate) fn class(self, classes: &str) -> Self {
        let list = self.0.class_list();
        for class in classes.split_whitespace() {
            if let Err(e) = list.add_1(class) {
                tracing::trace!(class, error = ?e, "class not added");
            }
        }
        self
    }

    pub(crate) fn id(self, id: &str) -> Self {
        self.0.set_id(id);
        self
    }

    pub(crate) fn attr(self, name: &str, value: &str) -> Self {
        let _ = self.0.set_attribute(name, value);
        self
    }

    pub(crate) fn style(self, property: &str, value: &str) -> Self {
        set_style(&self.0, property, value);
        self
    }

    pub(crate) fn text(self, text: &str) -> Self {
        self.0.set_text_content(Some(text));
        self
    }

    pub(crate) fn child(self, child: El) -> Self {
        let _ = self.0.append_child(&child.0);
        self
    }

    pub(crate) fn children(self, children: impl IntoIterator<Item = El>) -> Self {
        for child in children {
            let _ = self.0.append_child(&child.0);
        }
        self
    }

    /// Appends the built element to `parent`.
    pub(crate) fn append_to(self, parent: &Element) -> Element {
        let _ = parent.append_child(&self.0);
        self.0
    }

    pub(crate) fn element(&self) -> &Element {
        &self.0
    }

    pub(crate) fn build(self) -> Element {
        self.0
    }
}

impl From<El> for Element {
    fn from(el: El) -> Self {
        el.0
    }
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    let style = if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style()
    } else if let Some(svg) = element.dyn_ref::<SvgElement>() {
        svg.style()
    } else {
        return;
    };

    let _ = style.set_property(property, value);
}

pub(crate) fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub(crate) fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        tracing::trace!(class, on, error = ?e, "class not toggled");
    }
}

/// Viewport-relative top and bottom edge of an element.
pub(crate) fn vertical_bounds(element: &Element) -> (f32, f32) {
    let rect = element.get_bounding_client_rect();
    (rect.top() as f32, rect.bottom() as f32)
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_urls_are_external() {
        assert!(is_external("https://github.com/faroqomar"));
        assert!(!is_external("#projects"));
        assert!(!is_external("mailto:someone@example.com"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn classes_are_split_and_toggled() {
        let element = El::new("div").unwrap().class("card  revealed").build();
        assert_eq!(element.class_name(), "card revealed");

        toggle_class(&element, "revealed", false);
        toggle_class(&element, "active", true);
        toggle_class(&element, "active", true);
        assert_eq!(element.class_name(), "card active");
    }
}
