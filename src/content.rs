//! Projection of the content document onto the page skeleton.
//!
//! The projector decides *what* goes where; a [`ContentSink`] owns the
//! elements. All text reaches the page as text nodes, so config values are
//! never interpreted as markup.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::config::{Passion, SiteConfig, StoryCard};
use crate::consts::TITLE_SUFFIX;

/// Container receiving one card per passion.
pub const PASSIONS_CONTAINER: &str = "chiragPassions";
/// Container receiving one card per story section.
pub const SECTIONS_CONTAINER: &str = "jiggiSections";

/// Element-level writes the projector needs. Absent elements are skipped.
pub trait ContentSink {
    fn set_text(&mut self, id: &str, text: &str);
    /// Clear `container_id` and append one element per card.
    fn replace_cards(&mut self, container_id: &str, cards: &[Card]);
    fn set_title(&mut self, title: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Passion,
    Story,
}

impl CardKind {
    #[must_use]
    pub fn heading_tag(self) -> &'static str {
        match self {
            Self::Passion => "h4",
            Self::Story => "h3",
        }
    }

    fn base_classes(self) -> &'static [&'static str] {
        match self {
            Self::Passion => &["passion-item"],
            Self::Story => &["jiggi-card", "card"],
        }
    }
}

/// One rendered card: heading (optionally iconned and linked) and a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub icon: Option<&'static str>,
    pub title: String,
    pub text: String,
    /// Opens in a new tab from the title link or a click on the card.
    pub link: Option<String>,
}

impl Card {
    #[must_use]
    pub fn passion(passion: &Passion) -> Self {
        Self {
            kind: CardKind::Passion,
            icon: Some(passion_icon(&passion.name)),
            title: passion.name.clone(),
            text: passion.desc.clone(),
            link: passion.link().map(str::to_owned),
        }
    }

    #[must_use]
    pub fn story(section: &StoryCard) -> Self {
        Self {
            kind: CardKind::Story,
            icon: None,
            title: section.title.clone(),
            text: section.text.clone(),
            link: None,
        }
    }

    /// CSS classes for the card element.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = self.kind.base_classes().to_vec();
        if self.link.is_some() {
            classes.push("clickable");
        }
        classes
    }

    /// Heading text preceding the (possibly linked) title.
    #[must_use]
    pub fn heading_prefix(&self) -> String {
        self.icon.map_or_else(String::new, |icon| format!("{icon} "))
    }
}

/// Icon for a passion, chosen from keywords in its name.
#[must_use]
pub fn passion_icon(name: &str) -> &'static str {
    let name = name.to_lowercase();
    if name.contains("geet") || name.contains("music") {
        "\u{1f3b5}"
    } else if name.contains("tool") || name.contains("automation") {
        "\u{1f527}"
    } else {
        "\u{1f4a1}"
    }
}

#[must_use]
pub fn page_title(site_title: &str) -> String {
    format!("{site_title}{TITLE_SUFFIX}")
}

/// Write every populated field of `config` into `sink`.
pub fn project<S: ContentSink>(config: &SiteConfig, sink: &mut S) {
    set_text(sink, "homeIntro", config.home.intro.as_deref());
    set_text(sink, "homeDescription", config.home.description.as_deref());

    set_text(sink, "chiragAbout", config.chirag.about_me.as_deref());
    set_text(sink, "chiragWork", config.chirag.my_work.as_deref());
    set_text(sink, "chiragSpiritual", config.chirag.spiritual_side.as_deref());
    if let Some(passions) = &config.chirag.passions {
        let cards: Vec<Card> = passions.iter().map(Card::passion).collect();
        sink.replace_cards(PASSIONS_CONTAINER, &cards);
    }

    set_text(sink, "jiggiIntro", config.jiggi.intro.as_deref());
    if let Some(sections) = &config.jiggi.sections {
        let cards: Vec<Card> = sections.iter().map(Card::story).collect();
        sink.replace_cards(SECTIONS_CONTAINER, &cards);
    }

    set_text(sink, "footerText", config.site.footer.as_deref());

    if let Some(title) = config.site.title.as_deref().filter(|t| !t.is_empty()) {
        sink.set_title(&page_title(title));
    }
}

// Empty strings keep the skeleton's text.
fn set_text<S: ContentSink>(sink: &mut S, id: &str, text: Option<&str>) {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        sink.set_text(id, text);
    }
}
