//! Tab controls and regions as found in the page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::consts::{ACTIVE_CLASS, TAB_ATTRIBUTE, TAB_REGION_CLASS};
use crate::tabs::{TabHost, TabLayout};

use super::js_error;

pub struct DomTabs {
    window: Window,
    controls: Vec<Element>,
    regions: Vec<(String, Element)>,
}

impl DomTabs {
    /// Collect `[data-tab]` controls and `.tab-content` regions once, in
    /// document order. Regions without an id cannot be addressed and are
    /// dropped.
    #[must_use]
    pub fn discover(window: Window, document: &Document) -> (Self, TabLayout) {
        let controls = query_all(document, &format!("[{TAB_ATTRIBUTE}]"));
        let regions: Vec<(String, Element)> = query_all(document, &format!(".{TAB_REGION_CLASS}"))
            .into_iter()
            .map(|region| (region.id(), region))
            .filter(|(id, _)| !id.is_empty())
            .collect();

        let layout = TabLayout {
            controls: controls
                .iter()
                .map(|control| control.get_attribute(TAB_ATTRIBUTE).unwrap_or_default())
                .collect(),
            regions: regions.iter().map(|(id, _)| id.clone()).collect(),
        };
        log::debug!("found {} tab controls, {} regions", layout.controls.len(), layout.regions.len());
        (Self { window, controls, regions }, layout)
    }

    /// Controls in document order, for event wiring.
    #[must_use]
    pub fn controls(&self) -> &[Element] {
        &self.controls
    }
}

impl TabHost for DomTabs {
    fn set_control_state(&mut self, index: usize, selected: bool) {
        let Some(control) = self.controls.get(index) else {
            return;
        };
        if let Err(e) = control.class_list().toggle_with_force(ACTIVE_CLASS, selected) {
            log::warn!("failed to mark tab control: {}", js_error(&e));
        }
        let aria = if selected { "true" } else { "false" };
        if let Err(e) = control.set_attribute("aria-selected", aria) {
            log::warn!("failed to set aria-selected: {}", js_error(&e));
        }
    }

    fn set_region_state(&mut self, key: &str, active: bool) {
        for (_, region) in self.regions.iter().filter(|(id, _)| id == key) {
            if let Err(e) = region.class_list().toggle_with_force(ACTIVE_CLASS, active) {
                log::warn!("failed to mark tab region '{key}': {}", js_error(&e));
            }
        }
    }

    fn focus_control(&mut self, index: usize) {
        let Some(control) = self.controls.get(index).and_then(|c| c.dyn_ref::<HtmlElement>()) else {
            return;
        };
        if let Err(e) = control.focus() {
            log::warn!("failed to focus tab control: {}", js_error(&e));
        }
    }

    fn push_fragment(&mut self, key: &str) {
        if let Err(e) = self.window.location().set_hash(key) {
            log::warn!("failed to set location hash: {}", js_error(&e));
        }
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("query '{selector}' failed: {}", js_error(&e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}
