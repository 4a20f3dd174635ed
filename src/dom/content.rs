//! Card and text rendering into the page skeleton.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::content::{Card, ContentSink};

use super::js_error;

pub struct DomContent {
    window: Window,
    document: Document,
}

impl DomContent {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn build_card(&self, card: &Card) -> Result<Element, JsValue> {
        let item = self.document.create_element("div")?;
        item.set_class_name(&card.classes().join(" "));

        let heading = self.document.create_element(card.kind.heading_tag())?;
        match &card.link {
            Some(url) => {
                heading.append_with_str_1(&card.heading_prefix())?;
                let link = self.document.create_element("a")?;
                link.set_attribute("href", url)?;
                link.set_attribute("target", "_blank")?;
                link.set_attribute("rel", "noopener noreferrer")?;
                link.set_text_content(Some(&card.title));
                heading.append_with_node_1(&link)?;
            }
            None => heading.set_text_content(Some(&format!("{}{}", card.heading_prefix(), card.title))),
        }
        item.append_with_node_1(&heading)?;

        let text = self.document.create_element("p")?;
        text.set_text_content(Some(&card.text));
        item.append_with_node_1(&text)?;

        if let Some(url) = &card.link {
            if let Some(html) = item.dyn_ref::<HtmlElement>() {
                html.style().set_property("cursor", "pointer")?;
            }
            self.open_on_click(&item, url.clone())?;
        }
        Ok(item)
    }

    /// Clicking the card outside its link opens `url` in a new tab.
    fn open_on_click(&self, item: &Element, url: String) -> Result<(), JsValue> {
        let window = self.window.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let on_link = event
                .target()
                .and_then(|target| target.dyn_ref::<Element>().map(Element::tag_name))
                .is_some_and(|tag| tag.eq_ignore_ascii_case("a"));
            if on_link {
                return;
            }
            if let Err(e) = window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer") {
                log::warn!("failed to open {url}: {}", js_error(&e));
            }
        });
        item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }
}

impl ContentSink for DomContent {
    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.document.get_element_by_id(id) {
            element.set_text_content(Some(text));
        }
    }

    fn replace_cards(&mut self, container_id: &str, cards: &[Card]) {
        let Some(container) = self.document.get_element_by_id(container_id) else {
            return;
        };
        container.set_text_content(None);
        for card in cards {
            let appended = self
                .build_card(card)
                .and_then(|item| container.append_with_node_1(&item));
            if let Err(e) = appended {
                log::warn!("failed to render card '{}' in #{container_id}: {}", card.title, js_error(&e));
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }
}
