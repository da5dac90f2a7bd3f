// SPDX-License-Identifier: MPL-2.0
//! Demo campfire seed data.

use super::campfire::Campfire;
use chrono::{Duration, Utc};

/// Builds the seeded campfires shown on the Campfires tab.
///
/// Activity timestamps are derived from launch time so the relative
/// labels stay plausible however long the demo has been sitting around.
pub fn demo_campfires() -> Vec<Campfire> {
    let now = Utc::now();

    vec![
        Campfire {
            id: "movie-night".into(),
            name: "Friday Movie Night".into(),
            member_ids: vec!["sarah".into(), "marcus".into(), "dev".into()],
            message_count: 47,
            clip_count: 12,
            last_activity: now - Duration::minutes(8),
            is_active: true,
        },
        Campfire {
            id: "doc-club".into(),
            name: "Documentary Club".into(),
            member_ids: vec!["sarah".into(), "yuki".into()],
            message_count: 23,
            clip_count: 5,
            last_activity: now - Duration::hours(3),
            is_active: true,
        },
        Campfire {
            id: "western-wednesdays".into(),
            name: "Western Wednesdays".into(),
            member_ids: vec!["marcus".into(), "dev".into(), "yuki".into()],
            message_count: 9,
            clip_count: 2,
            last_activity: now - Duration::days(2),
            is_active: false,
        },
        Campfire {
            id: "animation-station".into(),
            name: "Animation Station".into(),
            member_ids: vec!["elena".into(), "sarah".into()],
            message_count: 31,
            clip_count: 18,
            last_activity: now - Duration::minutes(35),
            is_active: true,
        },
    ]
}
