//! DOM contract and storage names shared by the controllers and adapters.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<body>` carrying the active theme for stylesheets.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query whose match state is the OS dark-mode signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Optional button that toggles the theme.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Optional element whose text shows the theme glyph.
pub const THEME_ICON_ID: &str = "themeIcon";

// ── Tabs ────────────────────────────────────────────────────────

/// Attribute marking a tab control; its value is the tab key.
pub const TAB_ATTRIBUTE: &str = "data-tab";

/// Class shared by every tab content region.
pub const TAB_REGION_CLASS: &str = "tab-content";

/// Class marking the active control and region.
pub const ACTIVE_CLASS: &str = "active";

/// Tab shown when the fragment is empty or names no region.
pub const DEFAULT_TAB: &str = "home";

// ── Boot ────────────────────────────────────────────────────────

/// Where the content document is fetched from, relative to the page.
pub const DEFAULT_CONFIG_URL: &str = "config.json";

/// Suffix appended to `site.title` for the document title.
pub const TITLE_SUFFIX: &str = " - Chirag & Jiggi's Journey Together";
