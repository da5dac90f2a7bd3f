// SPDX-License-Identifier: MPL-2.0
//! Campfire entities and the chat participant view-model.

use crate::directory::User;
use chrono::{DateTime, Utc};

/// A named group chat bundling members and activity counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Campfire {
    pub id: String,
    pub name: String,
    /// Ordered member ids; non-empty for an active campfire.
    pub member_ids: Vec<String>,
    pub message_count: u32,
    pub clip_count: u32,
    pub last_activity: DateTime<Utc>,
    pub is_active: bool,
}

impl Campfire {
    /// Human-readable relative activity label ("just now", "5m ago", ...).
    pub fn activity_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.last_activity);
        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 60 * 24 {
            format!("{}h ago", elapsed.num_hours())
        } else {
            format!("{}d ago", elapsed.num_days())
        }
    }
}

/// What a chat participant is, beyond its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantKind {
    /// A campfire; carries its member count.
    Group { member_count: usize },
    /// A single user; carries their presence flag.
    Direct { online: bool },
}

/// Uniform view-model addressing the chat panel.
///
/// Derived from either a campfire or a single user. Selection builds one
/// of these; it never mutates the underlying seed record.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatParticipant {
    pub id: String,
    pub display_name: String,
    pub kind: ParticipantKind,
}

impl ChatParticipant {
    pub fn from_campfire(campfire: &Campfire) -> Self {
        Self {
            id: campfire.id.clone(),
            display_name: campfire.name.clone(),
            kind: ParticipantKind::Group {
                member_count: campfire.member_ids.len(),
            },
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            display_name: user.name.clone(),
            kind: ParticipantKind::Direct {
                online: user.online,
            },
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ParticipantKind::Group { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn campfire_at(last_activity: DateTime<Utc>) -> Campfire {
        Campfire {
            id: "cf".into(),
            name: "Test Fire".into(),
            member_ids: vec!["a".into(), "b".into()],
            message_count: 3,
            clip_count: 1,
            last_activity,
            is_active: true,
        }
    }

    #[test]
    fn activity_label_buckets_by_elapsed_time() {
        let now = Utc::now();
        assert_eq!(campfire_at(now).activity_label(now), "just now");
        assert_eq!(
            campfire_at(now - Duration::minutes(5)).activity_label(now),
            "5m ago"
        );
        assert_eq!(
            campfire_at(now - Duration::hours(3)).activity_label(now),
            "3h ago"
        );
        assert_eq!(
            campfire_at(now - Duration::days(2)).activity_label(now),
            "2d ago"
        );
    }

    #[test]
    fn participant_from_campfire_carries_member_count() {
        let campfire = campfire_at(Utc::now());
        let participant = ChatParticipant::from_campfire(&campfire);
        assert_eq!(participant.display_name, "Test Fire");
        assert!(participant.is_group());
        assert_eq!(
            participant.kind,
            ParticipantKind::Group { member_count: 2 }
        );
    }

    #[test]
    fn participant_from_user_carries_presence() {
        let user = crate::directory::User {
            id: "u".into(),
            name: "U".into(),
            bio: String::new(),
            online: true,
            status: String::new(),
            currently_watching: None,
        };
        let participant = ChatParticipant::from_user(&user);
        assert!(!participant.is_group());
        assert_eq!(participant.kind, ParticipantKind::Direct { online: true });
    }

    #[test]
    fn seeded_active_campfires_have_members() {
        for campfire in crate::social::seed::demo_campfires() {
            if campfire.is_active {
                assert!(!campfire.member_ids.is_empty());
            }
        }
    }
}
