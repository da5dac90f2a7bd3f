// SPDX-License-Identifier: MPL-2.0
//! Demo catalog seed data.
//!
//! These literals stand in for a real catalog backend. Thumbnails are
//! placeholder references; no media is fetched or decoded.

use super::{Badge, Catalog, ContentItem, ContentRow, HeroSlide};

fn item(
    id: &str,
    title: &str,
    badge: Option<Badge>,
    genre: &str,
    rating: f32,
    year: u16,
    duration_mins: u16,
) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        thumbnail: format!("thumbnails/{id}.png"),
        badge,
        genre: Some(genre.to_string()),
        rating: Some(rating),
        year: Some(year),
        duration_mins: Some(duration_mins),
    }
}

/// Builds the storefront catalog shown on the Home tab.
pub fn demo_catalog() -> Catalog {
    let hero = vec![
        HeroSlide {
            id: "hero-ashfall".into(),
            title: "Ashfall".into(),
            tagline: "The mountain kept its secret for a thousand years.".into(),
            thumbnail: "hero/ashfall.png".into(),
        },
        HeroSlide {
            id: "hero-midnight-static".into(),
            title: "Midnight Static".into(),
            tagline: "Every frequency tells a story.".into(),
            thumbnail: "hero/midnight_static.png".into(),
        },
        HeroSlide {
            id: "hero-the-long-thaw".into(),
            title: "The Long Thaw".into(),
            tagline: "Spring came late. So did the truth.".into(),
            thumbnail: "hero/the_long_thaw.png".into(),
        },
    ];

    let rows = vec![
        ContentRow {
            id: "trending".into(),
            title_key: "row-trending".into(),
            items: vec![
                item("ashfall", "Ashfall", Some(Badge::Trending), "Thriller", 8.1, 2024, 118),
                item("glasshouse", "Glasshouse", Some(Badge::TopTen), "Drama", 7.6, 2023, 104),
                item("night-market", "Night Market", None, "Documentary", 7.9, 2024, 89),
                item("paper-suns", "Paper Suns", Some(Badge::New), "Animation", 8.4, 2025, 96),
                item("driftwood", "Driftwood", None, "Drama", 6.8, 2022, 112),
                item("copper-canyon", "Copper Canyon", None, "Western", 7.2, 2021, 127),
            ],
        },
        ContentRow {
            id: "new-releases".into(),
            title_key: "row-new-releases".into(),
            items: vec![
                item("midnight-static", "Midnight Static", Some(Badge::New), "Sci-Fi", 7.7, 2025, 101),
                item("the-long-thaw", "The Long Thaw", Some(Badge::New), "Mystery", 8.0, 2025, 109),
                item("salt-and-signal", "Salt and Signal", None, "Documentary", 7.4, 2025, 78),
                item("harbor-lights", "Harbor Lights", None, "Romance", 6.9, 2025, 94),
                item("wirewalkers", "Wirewalkers", Some(Badge::Trending), "Action", 7.1, 2025, 122),
            ],
        },
        ContentRow {
            id: "friends-watching".into(),
            title_key: "row-friends-watching".into(),
            items: vec![
                item("glasshouse-fw", "Glasshouse", None, "Drama", 7.6, 2023, 104),
                item("night-market-fw", "Night Market", None, "Documentary", 7.9, 2024, 89),
                item("copper-canyon-fw", "Copper Canyon", None, "Western", 7.2, 2021, 127),
            ],
        },
        ContentRow {
            id: "leaving-soon".into(),
            title_key: "row-leaving-soon".into(),
            items: vec![
                item("orchard-end", "Orchard End", Some(Badge::LeavingSoon), "Drama", 7.0, 2019, 116),
                item("static-garden", "Static Garden", Some(Badge::LeavingSoon), "Sci-Fi", 6.5, 2018, 99),
                item("brine", "Brine", Some(Badge::LeavingSoon), "Horror", 6.2, 2020, 87),
                item("lanterns", "Lanterns", None, "Family", 7.8, 2017, 92),
            ],
        },
    ];

    Catalog::new(hero, rows)
}
