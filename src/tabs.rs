//! Tab routing: which content section is visible, and how it gets there.
//!
//! `TabRouter` is built once from a [`TabLayout`] (control keys in document
//! order plus the set of region keys) and drives a [`TabHost`] that owns the
//! real elements. Clicks, history navigation and arrow-key navigation all
//! end in [`TabRouter::show_tab`], which re-renders every marker from
//! scratch, so repeated or overlapping activations are harmless.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// Tab keys discovered at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabLayout {
    /// Key of each `[data-tab]` control, in document order.
    pub controls: Vec<String>,
    /// Element id of each content region.
    pub regions: Vec<String>,
}

/// Element-level operations the router needs from the page.
pub trait TabHost {
    /// Mark control `index` active and `aria-selected`, or neither.
    fn set_control_state(&mut self, index: usize, selected: bool);
    /// Show or hide the region whose id is `key`.
    fn set_region_state(&mut self, key: &str, active: bool);
    fn focus_control(&mut self, index: usize);
    /// Set the location fragment, creating a history entry.
    fn push_fragment(&mut self, key: &str);
    /// Smooth-scroll the viewport back to the top.
    fn scroll_to_top(&mut self);
}

/// Keys that move between tab controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
    First,
    Last,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value. Unrelated keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowUp" => Some(Self::Previous),
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }

    /// Control index reached from `current` among `len` controls, wrapping
    /// at both ends. `None` when there are no controls.
    #[must_use]
    pub fn target(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let last = len - 1;
        let index = match self {
            Self::Previous if current == 0 => last,
            Self::Previous => (current - 1).min(last),
            Self::Next if current >= last => 0,
            Self::Next => current + 1,
            Self::First => 0,
            Self::Last => last,
        };
        Some(index)
    }
}

/// Owns the active tab and keeps the host's markers in step with it.
pub struct TabRouter<H> {
    host: H,
    layout: TabLayout,
    default_tab: String,
    active: Option<String>,
}

impl<H: TabHost> TabRouter<H> {
    #[must_use]
    pub fn new(host: H, layout: TabLayout, default_tab: &str) -> Self {
        Self { host, layout, default_tab: default_tab.to_owned(), active: None }
    }

    /// Activate the initial tab from the location fragment at load.
    ///
    /// An empty or unknown fragment falls back to the default tab. The
    /// initial activation never pushes a history entry.
    pub fn start(&mut self, fragment: &str) {
        let key = strip_hash(fragment);
        if !key.is_empty() && self.show_tab(key, false) {
            return;
        }
        if !key.is_empty() {
            log::debug!("fragment '{key}' names no tab, showing '{}'", self.default_tab);
        }
        let default_tab = self.default_tab.clone();
        if !self.show_tab(&default_tab, false) {
            log::warn!("default tab '{default_tab}' has no content region");
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Host handle; the browser wiring never reads it back, tests do.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn is_known(&self, key: &str) -> bool {
        self.layout.regions.iter().any(|region| region == key)
    }

    /// Make `key` the visible tab.
    ///
    /// Unknown keys are a no-op and return `false`. On success the fragment
    /// is updated when `update_fragment` is set, and the viewport scrolls to
    /// the top.
    pub fn show_tab(&mut self, key: &str, update_fragment: bool) -> bool {
        if !self.is_known(key) {
            log::debug!("no content region for tab '{key}'");
            return false;
        }

        for region in &self.layout.regions {
            self.host.set_region_state(region, region == key);
        }
        for (index, control) in self.layout.controls.iter().enumerate() {
            self.host.set_control_state(index, control == key);
        }
        self.active = Some(key.to_owned());

        if update_fragment {
            self.host.push_fragment(key);
        }
        self.host.scroll_to_top();
        log::debug!("tab '{key}' active");
        true
    }

    /// Click on control `index`.
    pub fn activate_control(&mut self, index: usize) -> bool {
        match self.layout.controls.get(index).cloned() {
            Some(key) => self.show_tab(&key, true),
            None => false,
        }
    }

    /// Back/forward navigation landed on `fragment`. History already holds
    /// the entry, so the fragment is not written again.
    ///
    /// An empty fragment is the page as first loaded and shows the default
    /// tab. Unknown keys are ignored.
    pub fn on_fragment_change(&mut self, fragment: &str) -> bool {
        let key = strip_hash(fragment);
        if key.is_empty() {
            let default_tab = self.default_tab.clone();
            return self.show_tab(&default_tab, false);
        }
        self.show_tab(key, false)
    }

    /// Keydown on control `current`.
    ///
    /// Returns `true` when the key was a navigation key; the caller must then
    /// suppress the browser's default action.
    pub fn handle_keyboard_nav(&mut self, key: &str, current: usize) -> bool {
        let Some(nav) = NavKey::from_key(key) else {
            return false;
        };
        let Some(target) = nav.target(current, self.layout.controls.len()) else {
            return false;
        };
        self.host.focus_control(target);
        self.activate_control(target);
        true
    }
}

/// Fragment text without its leading `#`.
fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}
