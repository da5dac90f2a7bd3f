// SPDX-License-Identifier: MPL-2.0
//! In-memory message system.
//!
//! `initialize_user_chats` is called whenever the active user changes and
//! seeds that user's thread list from the directory (direct threads for
//! friends) and the campfires they belong to. Threads live only in memory
//! and are rebuilt on every initialization.

use super::campfire::{Campfire, ChatParticipant};
use crate::directory::UserDirectory;
use std::collections::HashMap;

/// One entry in a user's chat list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatThread {
    pub participant: ChatParticipant,
    /// Last-message preview line shown in the chat list.
    pub preview: String,
    pub unread: u32,
}

/// Holds per-user chat threads, keyed by user id.
#[derive(Debug, Default)]
pub struct MessageSystem {
    threads: HashMap<String, Vec<ChatThread>>,
}

impl MessageSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds (or re-seeds) the chat threads for a user.
    ///
    /// Direct threads come from the user's friends, group threads from
    /// the campfires the user is a member of. Calling this again for the
    /// same user discards the previous threads.
    pub fn initialize_user_chats(
        &mut self,
        user_id: &str,
        directory: &UserDirectory,
        campfires: &[Campfire],
    ) {
        let mut threads = Vec::new();

        for friend in directory.friends_of(user_id) {
            let preview = if friend.online {
                friend.status.clone()
            } else {
                "Catch you later!".to_string()
            };
            threads.push(ChatThread {
                participant: ChatParticipant::from_user(friend),
                preview,
                unread: u32::from(friend.online),
            });
        }

        for campfire in campfires {
            if campfire.member_ids.iter().any(|id| id == user_id) {
                threads.push(ChatThread {
                    participant: ChatParticipant::from_campfire(campfire),
                    preview: format!("{} messages · {} clips", campfire.message_count, campfire.clip_count),
                    unread: campfire.message_count.min(9),
                });
            }
        }

        self.threads.insert(user_id.to_string(), threads);
    }

    /// Threads for a user; empty if that user was never initialized.
    pub fn threads_for(&self, user_id: &str) -> &[ChatThread] {
        self.threads.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the user has any initialized threads.
    pub fn is_initialized(&self, user_id: &str) -> bool {
        self.threads.contains_key(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::demo_directory;
    use crate::social::seed::demo_campfires;

    #[test]
    fn uninitialized_user_has_no_threads() {
        let system = MessageSystem::new();
        assert!(system.threads_for("sarah").is_empty());
        assert!(!system.is_initialized("sarah"));
    }

    #[test]
    fn initialize_seeds_friend_and_campfire_threads() {
        let directory = demo_directory();
        let campfires = demo_campfires();
        let mut system = MessageSystem::new();

        system.initialize_user_chats("sarah", &directory, &campfires);

        let threads = system.threads_for("sarah");
        assert!(!threads.is_empty());

        let friend_count = directory.friends_of("sarah").len();
        let campfire_count = campfires
            .iter()
            .filter(|c| c.member_ids.iter().any(|id| id == "sarah"))
            .count();
        assert_eq!(threads.len(), friend_count + campfire_count);
    }

    #[test]
    fn reinitializing_replaces_previous_threads() {
        let directory = demo_directory();
        let campfires = demo_campfires();
        let mut system = MessageSystem::new();

        system.initialize_user_chats("sarah", &directory, &campfires);
        let first_len = system.threads_for("sarah").len();
        system.initialize_user_chats("sarah", &directory, &campfires);

        assert_eq!(system.threads_for("sarah").len(), first_len);
    }

    #[test]
    fn unknown_user_initializes_to_empty_threads() {
        let directory = demo_directory();
        let campfires = demo_campfires();
        let mut system = MessageSystem::new();

        system.initialize_user_chats("nobody", &directory, &campfires);

        assert!(system.is_initialized("nobody"));
        assert!(system.threads_for("nobody").is_empty());
    }
}
