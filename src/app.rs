//! Application bootstrap: wires the controllers to the live page.
//!
//! Order matters only for the theme, which is applied first so the page
//! never flashes the wrong colors. The content fetch is spawned last and
//! nothing waits on it; the tabs work with the skeleton's built-in text
//! until (and unless) the document arrives.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, KeyboardEvent, MediaQueryListEvent, Window};

use crate::config;
use crate::consts::THEME_TOGGLE_ID;
use crate::content;
use crate::dom::content::DomContent;
use crate::dom::js_error;
use crate::dom::storage::LocalStore;
use crate::dom::tabs::DomTabs;
use crate::dom::theme::{BodyTheme, dark_scheme_query};
use crate::options::SiteOptions;
use crate::tabs::TabRouter;
use crate::theme::{Theme, ThemeController};

/// WASM entry point. Boots now, or once the DOM has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", Closure::<dyn FnMut()>::new(boot));
    } else {
        boot();
    }
}

fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    let options = SiteOptions::from_attributes(attr);
    if console_log::init_with_level(options.log_level).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(raw) = &options.rejected_log_level {
        log::warn!("unknown log level '{raw}', using {}", options.log_level);
    }

    start_theme(&window, &document);
    start_tabs(&window, &document, &options.default_tab);
    spawn_content(window, document, options.config_url);

    log::info!("site initialized");
}

fn start_theme(window: &Window, document: &Document) {
    let query = dark_scheme_query(window);
    let system = query.as_ref().map(|q| Theme::from_prefers_dark(q.matches()));
    let controller = Rc::new(RefCell::new(ThemeController::init(
        LocalStore::open(window),
        BodyTheme::new(document.clone()),
        system,
    )));

    if let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let controller = Rc::clone(&controller);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            controller.borrow_mut().toggle();
        });
        listen(&button, "click", on_click);
    }

    if let Some(query) = query {
        let controller = Rc::clone(&controller);
        let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            controller.borrow_mut().on_system_change(Theme::from_prefers_dark(event.matches()));
        });
        listen(&query, "change", on_change);
    }
}

fn start_tabs(window: &Window, document: &Document, default_tab: &str) {
    let (host, layout) = DomTabs::discover(window.clone(), document);
    let controls = host.controls().to_vec();
    let router = Rc::new(RefCell::new(TabRouter::new(host, layout, default_tab)));

    for (index, control) in controls.iter().enumerate() {
        let click_router = Rc::clone(&router);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            click_router.borrow_mut().activate_control(index);
        });
        listen(control, "click", on_click);

        let key_router = Rc::clone(&router);
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if key_router.borrow_mut().handle_keyboard_nav(&event.key(), index) {
                event.prevent_default();
            }
        });
        listen(control, "keydown", on_key);
    }

    let history_router = Rc::clone(&router);
    let history_window = window.clone();
    let on_hash = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        history_router.borrow_mut().on_fragment_change(&current_fragment(&history_window));
    });
    listen(window, "hashchange", on_hash);

    router.borrow_mut().start(&current_fragment(window));
}

fn spawn_content(window: Window, document: Document, url: String) {
    wasm_bindgen_futures::spawn_local(async move {
        match config::fetch(&url).await {
            Ok(site) => {
                content::project(&site, &mut DomContent::new(window, document));
                log::debug!("content projected from {url}");
            }
            Err(e) => log::error!("content not loaded, keeping default page: {e}"),
        }
    });
}

fn current_fragment(window: &Window) -> String {
    match window.location().hash() {
        Ok(hash) => hash,
        Err(e) => {
            log::warn!("failed to read location hash: {}", js_error(&e));
            String::new()
        }
    }
}

/// Register `handler` for the page lifetime.
fn listen<T>(target: &EventTarget, event: &str, handler: Closure<T>)
where
    T: ?Sized + WasmClosure,
{
    if let Err(e) = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {event}: {}", js_error(&e));
    }
    handler.forget();
}
