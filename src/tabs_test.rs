use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Debug, Default)]
struct RecordingHost {
    selected: Vec<bool>,
    regions: Vec<(String, bool)>,
    focused: Option<usize>,
    fragments: Vec<String>,
    scrolls: usize,
}

impl RecordingHost {
    fn with(layout: &TabLayout) -> Self {
        Self {
            selected: vec![false; layout.controls.len()],
            regions: layout.regions.iter().map(|r| (r.clone(), false)).collect(),
            ..Self::default()
        }
    }

    fn active_regions(&self) -> Vec<&str> {
        self.regions.iter().filter(|(_, on)| *on).map(|(k, _)| k.as_str()).collect()
    }

    fn selected_controls(&self) -> Vec<usize> {
        self.selected.iter().enumerate().filter(|(_, on)| **on).map(|(i, _)| i).collect()
    }
}

impl TabHost for RecordingHost {
    fn set_control_state(&mut self, index: usize, selected: bool) {
        self.selected[index] = selected;
    }

    fn set_region_state(&mut self, key: &str, active: bool) {
        if let Some(entry) = self.regions.iter_mut().find(|(k, _)| k == key) {
            entry.1 = active;
        }
    }

    fn focus_control(&mut self, index: usize) {
        self.focused = Some(index);
    }

    fn push_fragment(&mut self, key: &str) {
        self.fragments.push(key.to_owned());
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

const KEYS: [&str; 4] = ["home", "chirag", "jiggi", "projects"];

fn layout() -> TabLayout {
    TabLayout {
        controls: KEYS.iter().map(|k| (*k).to_owned()).collect(),
        regions: KEYS.iter().map(|k| (*k).to_owned()).collect(),
    }
}

fn router() -> TabRouter<RecordingHost> {
    let layout = layout();
    TabRouter::new(RecordingHost::with(&layout), layout, "home")
}

fn started(fragment: &str) -> TabRouter<RecordingHost> {
    let mut r = router();
    r.start(fragment);
    r
}

fn assert_only_active(r: &TabRouter<RecordingHost>, key: &str) {
    let index = KEYS.iter().position(|k| *k == key).unwrap();
    assert_eq!(r.active(), Some(key));
    assert_eq!(r.host().active_regions(), vec![key]);
    assert_eq!(r.host().selected_controls(), vec![index]);
}

// =============================================================
// NavKey
// =============================================================

#[test]
fn nav_key_maps_arrows_home_end() {
    assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Previous));
    assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Previous));
    assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
    assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Next));
    assert_eq!(NavKey::from_key("Home"), Some(NavKey::First));
    assert_eq!(NavKey::from_key("End"), Some(NavKey::Last));
    assert_eq!(NavKey::from_key("Enter"), None);
    assert_eq!(NavKey::from_key("a"), None);
}

#[test]
fn nav_key_target_wraps_both_ends() {
    assert_eq!(NavKey::Previous.target(0, 4), Some(3));
    assert_eq!(NavKey::Previous.target(2, 4), Some(1));
    assert_eq!(NavKey::Next.target(3, 4), Some(0));
    assert_eq!(NavKey::Next.target(1, 4), Some(2));
    assert_eq!(NavKey::First.target(2, 4), Some(0));
    assert_eq!(NavKey::Last.target(0, 4), Some(3));
}

#[test]
fn nav_key_target_single_control_stays_put() {
    for nav in [NavKey::Previous, NavKey::Next, NavKey::First, NavKey::Last] {
        assert_eq!(nav.target(0, 1), Some(0));
    }
}

#[test]
fn nav_key_target_without_controls_is_none() {
    assert_eq!(NavKey::Next.target(0, 0), None);
}

// =============================================================
// start
// =============================================================

#[test]
fn start_with_empty_fragment_shows_default_without_history() {
    let r = started("");
    assert_only_active(&r, "home");
    assert!(r.host().fragments.is_empty());
    assert_eq!(r.host().scrolls, 1);
}

#[test]
fn start_with_known_fragment_shows_it_without_history() {
    let r = started("#projects");
    assert_only_active(&r, "projects");
    assert!(r.host().fragments.is_empty());
}

#[test]
fn start_accepts_fragment_without_hash() {
    let r = started("jiggi");
    assert_only_active(&r, "jiggi");
}

#[test]
fn start_with_unknown_fragment_falls_back_to_default() {
    let r = started("#nowhere");
    assert_only_active(&r, "home");
}

#[test]
fn start_without_default_region_leaves_nothing_active() {
    let layout = TabLayout { controls: vec!["about".into()], regions: vec!["about".into()] };
    let mut r = TabRouter::new(RecordingHost::with(&layout), layout, "home");
    r.start("");
    assert_eq!(r.active(), None);
    assert_eq!(r.host().scrolls, 0);
}

// =============================================================
// show_tab
// =============================================================

#[test]
fn show_tab_marks_exactly_one_control_and_region_for_every_key() {
    let mut r = started("");
    for key in KEYS {
        assert!(r.show_tab(key, true));
        assert_only_active(&r, key);
    }
}

#[test]
fn show_tab_pushes_fragment_and_scrolls() {
    let mut r = started("");
    r.show_tab("chirag", true);
    assert_eq!(r.host().fragments, vec!["chirag".to_owned()]);
    assert_eq!(r.host().scrolls, 2);
}

#[test]
fn show_tab_without_fragment_update_still_scrolls() {
    let mut r = started("");
    r.show_tab("chirag", false);
    assert!(r.host().fragments.is_empty());
    assert_eq!(r.host().scrolls, 2);
}

#[test]
fn show_unknown_tab_changes_nothing() {
    let mut r = started("#jiggi");
    let regions = r.host().regions.clone();
    let selected = r.host().selected.clone();

    assert!(!r.show_tab("missing", true));
    assert_only_active(&r, "jiggi");
    assert_eq!(r.host().regions, regions);
    assert_eq!(r.host().selected, selected);
    assert!(r.host().fragments.is_empty());
    assert_eq!(r.host().scrolls, 1);
}

#[test]
fn show_tab_is_idempotent() {
    let mut r = started("");
    r.show_tab("projects", true);
    r.show_tab("projects", true);
    assert_only_active(&r, "projects");
}

#[test]
fn show_tab_selects_every_control_sharing_the_key() {
    let layout = TabLayout {
        controls: vec!["home".into(), "about".into(), "home".into(), "about".into()],
        regions: vec!["home".into(), "about".into()],
    };
    let mut r = TabRouter::new(RecordingHost::with(&layout), layout, "home");
    r.start("");
    r.show_tab("about", true);
    assert_eq!(r.host().selected_controls(), vec![1, 3]);
    assert_eq!(r.host().active_regions(), vec!["about"]);
}

// =============================================================
// Clicks and history
// =============================================================

#[test]
fn activate_control_shows_its_tab_and_pushes_history() {
    let mut r = started("");
    assert!(r.activate_control(2));
    assert_only_active(&r, "jiggi");
    assert_eq!(r.host().fragments, vec!["jiggi".to_owned()]);
}

#[test]
fn activate_control_out_of_range_is_ignored() {
    let mut r = started("");
    assert!(!r.activate_control(9));
    assert_only_active(&r, "home");
}

#[test]
fn fragment_change_activates_without_pushing() {
    let mut r = started("");
    assert!(r.on_fragment_change("#chirag"));
    assert_only_active(&r, "chirag");
    assert!(r.host().fragments.is_empty());
}

#[test]
fn unknown_fragment_change_is_ignored() {
    let mut r = started("#projects");
    assert!(!r.on_fragment_change("#bogus"));
    assert_only_active(&r, "projects");
}

#[test]
fn empty_fragment_change_shows_default_without_pushing() {
    let mut r = started("#projects");
    assert!(r.on_fragment_change(""));
    assert_only_active(&r, "home");
    r.show_tab("jiggi", false);
    assert!(r.on_fragment_change("#"));
    assert_only_active(&r, "home");
    assert!(r.host().fragments.is_empty());
}

#[test]
fn back_to_bare_url_after_first_click_returns_home() {
    let mut r = started("");
    r.activate_control(1);
    assert_only_active(&r, "chirag");

    assert!(r.on_fragment_change(""));
    assert_only_active(&r, "home");
    assert_eq!(r.host().fragments, vec!["chirag".to_owned()]);
}

// =============================================================
// Keyboard navigation
// =============================================================

#[test]
fn next_from_last_wraps_to_first() {
    let mut r = started("#projects");
    assert!(r.handle_keyboard_nav("ArrowRight", 3));
    assert_only_active(&r, "home");
    assert_eq!(r.host().focused, Some(0));
}

#[test]
fn previous_from_first_wraps_to_last() {
    let mut r = started("");
    assert!(r.handle_keyboard_nav("ArrowUp", 0));
    assert_only_active(&r, "projects");
    assert_eq!(r.host().focused, Some(3));
}

#[test]
fn home_and_end_jump_to_ends() {
    let mut r = started("#chirag");
    assert!(r.handle_keyboard_nav("End", 1));
    assert_only_active(&r, "projects");
    assert!(r.handle_keyboard_nav("Home", 3));
    assert_only_active(&r, "home");
}

#[test]
fn keyboard_activation_pushes_history() {
    let mut r = started("");
    r.handle_keyboard_nav("ArrowDown", 0);
    assert_eq!(r.host().fragments, vec!["chirag".to_owned()]);
}

#[test]
fn unrecognized_key_has_no_effect() {
    let mut r = started("#jiggi");
    let scrolls = r.host().scrolls;
    assert!(!r.handle_keyboard_nav("Tab", 2));
    assert!(!r.handle_keyboard_nav("Enter", 2));
    assert_only_active(&r, "jiggi");
    assert_eq!(r.host().focused, None);
    assert_eq!(r.host().scrolls, scrolls);
}
