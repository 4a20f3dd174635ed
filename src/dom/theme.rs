//! Theme rendering on `<body>` and the OS dark-mode signal.

use web_sys::{Document, MediaQueryList, Window};

use crate::consts::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_ICON_ID};
use crate::theme::{Theme, ThemeSurface};

use super::js_error;

/// Writes `data-theme` on `<body>` and the glyph in `#themeIcon`.
pub struct BodyTheme {
    document: Document,
}

impl BodyTheme {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ThemeSurface for BodyTheme {
    fn set_theme_attribute(&mut self, theme: Theme) {
        let Some(body) = self.document.body() else {
            return;
        };
        if let Err(e) = body.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("failed to set {THEME_ATTRIBUTE}: {}", js_error(&e));
        }
    }

    fn set_icon(&mut self, glyph: &str) {
        if let Some(icon) = self.document.get_element_by_id(THEME_ICON_ID) {
            icon.set_text_content(Some(glyph));
        }
    }
}

/// The `prefers-color-scheme: dark` query, if the browser supports it.
#[must_use]
pub fn dark_scheme_query(window: &Window) -> Option<MediaQueryList> {
    match window.match_media(DARK_SCHEME_QUERY) {
        Ok(query) => query,
        Err(e) => {
            log::warn!("color-scheme query unsupported: {}", js_error(&e));
            None
        }
    }
}
