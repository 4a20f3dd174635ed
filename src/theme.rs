//! Light/dark theme state and its persistence rules.
//!
//! DESIGN
//! ======
//! `ThemeController` is the single writer of the current theme. It never
//! touches the browser directly: the document side goes through
//! [`ThemeSurface`] and persistence through [`PreferenceStore`], so the
//! precedence rules (stored choice, then OS signal, then light) are tested
//! natively.
//!
//! An explicit choice is anything that went through [`ThemeController::apply_theme`].
//! Once one exists, OS color-scheme notifications are ignored. Startup reads
//! but never writes the store, so a first visit keeps following the OS.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and otherwise ignored; the theme still
//! changes for the session and the in-memory explicit flag keeps the
//! user's choice sticky.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_STORAGE_KEY;
use crate::store::PreferenceStore;

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the stored/attribute form. Anything else is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme implied by a `prefers-color-scheme: dark` match state.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown in the theme icon element.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}\u{fe0f}",
            Self::Dark => "\u{1f319}",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document side of the theme: the body attribute and the optional icon.
///
/// Implementations skip elements that are absent from the page.
pub trait ThemeSurface {
    fn set_theme_attribute(&mut self, theme: Theme);
    fn set_icon(&mut self, glyph: &str);
}

/// Owns the current theme and keeps document and store in step with it.
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    current: Theme,
    session_explicit: bool,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    /// Resolve the initial theme and render it.
    ///
    /// Precedence: a valid stored preference, then `system` (the OS
    /// signal, `None` when the platform offers none), then light.
    pub fn init(store: S, surface: D, system: Option<Theme>) -> Self {
        let stored = read_stored(&store, log::Level::Warn);
        let current = stored.or(system).unwrap_or_default();
        let mut controller = Self { store, surface, current, session_explicit: false };
        controller.render();
        log::debug!("theme initialized: {current} (stored: {})", stored.is_some());
        controller
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Store and surface handles; the browser wiring never reads them
    /// back, tests do.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Whether the user has made a choice that overrides the OS signal.
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        self.session_explicit || read_stored(&self.store, log::Level::Debug).is_some()
    }

    /// Render `theme` and persist it as the explicit preference.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.current = theme;
        self.session_explicit = true;
        self.render();
        if let Err(e) = self.store.write(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
    }

    /// Switch to the opposite theme. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.opposite();
        self.apply_theme(next);
        log::debug!("theme toggled to {next}");
        next
    }

    /// React to an OS color-scheme change.
    ///
    /// Returns `true` if the theme followed the OS, `false` if an explicit
    /// preference pinned it.
    pub fn on_system_change(&mut self, system: Theme) -> bool {
        if self.has_explicit_preference() {
            log::debug!("ignoring system theme {system}: explicit preference set");
            return false;
        }
        self.apply_theme(system);
        true
    }

    fn render(&mut self) {
        self.surface.set_theme_attribute(self.current);
        self.surface.set_icon(self.current.icon());
    }
}

/// Stored theme, with unreadable or corrupt values treated as absent.
///
/// Problems are reported at `level`: `warn` once at startup, `debug` on
/// the re-checks each OS notification triggers.
fn read_stored<S: PreferenceStore>(store: &S, level: log::Level) -> Option<Theme> {
    match store.read(THEME_STORAGE_KEY) {
        Ok(Some(raw)) => {
            let theme = Theme::parse(&raw);
            if theme.is_none() {
                log::log!(level, "ignoring unrecognized theme preference '{raw}'");
            }
            theme
        }
        Ok(None) => None,
        Err(e) => {
            log::log!(level, "theme preference unreadable: {e}");
            None
        }
    }
}
