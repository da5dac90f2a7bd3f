// SPDX-License-Identifier: MPL-2.0
//! Static content catalog backing every browsing view.
//!
//! The catalog is built once at startup from seed literals and handed to
//! the application as configuration. It is read-only for the lifetime of
//! the process; nothing in the UI mutates it.

pub mod seed;

/// Marketing badge shown on a content card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    New,
    Trending,
    TopTen,
    LeavingSoon,
}

impl Badge {
    /// Returns the i18n message key for this badge.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Badge::New => "badge-new",
            Badge::Trending => "badge-trending",
            Badge::TopTen => "badge-top-ten",
            Badge::LeavingSoon => "badge-leaving-soon",
        }
    }
}

/// One piece of browsable media.
///
/// Items are immutable seed data; `id` is unique within the containing row.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Placeholder thumbnail reference (no real media transport exists).
    pub thumbnail: String,
    pub badge: Option<Badge>,
    pub genre: Option<String>,
    pub rating: Option<f32>,
    pub year: Option<u16>,
    pub duration_mins: Option<u16>,
}

impl ContentItem {
    /// Short metadata line shown under the title on hover (e.g. "2021 · Drama · 1h 52m").
    pub fn meta_line(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(year) = self.year {
            parts.push(year.to_string());
        }
        if let Some(genre) = &self.genre {
            parts.push(genre.clone());
        }
        if let Some(mins) = self.duration_mins {
            parts.push(format!("{}h {:02}m", mins / 60, mins % 60));
        }
        parts.join(" · ")
    }
}

/// A named, ordered horizontal grouping of content items.
///
/// The item ordering is display order and is meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRow {
    pub id: String,
    /// i18n key for the row heading.
    pub title_key: String,
    pub items: Vec<ContentItem>,
}

impl ContentRow {
    pub fn item(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// A featured entry in the hero carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub thumbnail: String,
}

/// Read-only collection of hero slides and content rows for one storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    hero: Vec<HeroSlide>,
    rows: Vec<ContentRow>,
}

impl Catalog {
    pub fn new(hero: Vec<HeroSlide>, rows: Vec<ContentRow>) -> Self {
        Self { hero, rows }
    }

    pub fn hero_slides(&self) -> &[HeroSlide] {
        &self.hero
    }

    pub fn rows(&self) -> &[ContentRow] {
        &self.rows
    }

    /// Looks up a row by id. Unknown ids yield `None`, never an error.
    pub fn row(&self, id: &str) -> Option<&ContentRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_has_hero_and_rows() {
        let catalog = seed::demo_catalog();
        assert!(!catalog.hero_slides().is_empty());
        assert!(!catalog.rows().is_empty());
    }

    #[test]
    fn item_ids_are_unique_within_each_row() {
        let catalog = seed::demo_catalog();
        for row in catalog.rows() {
            for (i, item) in row.items.iter().enumerate() {
                for other in &row.items[i + 1..] {
                    assert_ne!(item.id, other.id, "duplicate id in row {}", row.id);
                }
            }
        }
    }

    #[test]
    fn row_lookup_finds_known_and_misses_unknown() {
        let catalog = seed::demo_catalog();
        let first = &catalog.rows()[0];
        assert!(catalog.row(&first.id).is_some());
        assert!(catalog.row("no-such-row").is_none());
    }

    #[test]
    fn item_lookup_within_row() {
        let catalog = seed::demo_catalog();
        let row = &catalog.rows()[0];
        let item = &row.items[0];
        assert_eq!(row.item(&item.id), Some(item));
        assert_eq!(row.item("no-such-item"), None);
    }

    #[test]
    fn meta_line_joins_available_fields() {
        let item = ContentItem {
            id: "x".into(),
            title: "X".into(),
            thumbnail: "x.png".into(),
            badge: None,
            genre: Some("Drama".into()),
            rating: None,
            year: Some(2021),
            duration_mins: Some(112),
        };
        assert_eq!(item.meta_line(), "2021 · Drama · 1h 52m");
    }

    #[test]
    fn meta_line_is_empty_when_no_fields_set() {
        let item = ContentItem {
            id: "x".into(),
            title: "X".into(),
            thumbnail: "x.png".into(),
            badge: None,
            genre: None,
            rating: None,
            year: None,
            duration_mins: None,
        };
        assert_eq!(item.meta_line(), "");
    }
}
