// SPDX-License-Identifier: MPL-2.0
//! Demo user directory with credential matching and friend lookups.
//!
//! The directory is a static seed: selecting an account reassigns the
//! composer's current-user pointer, it never mutates these records.
//! Lookups are total — unknown ids and mismatched credentials produce
//! `None` or an empty list, never an error.

pub mod seed;

/// A demo account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub online: bool,
    /// Free-form status line shown next to the avatar.
    pub status: String,
    pub currently_watching: Option<String>,
}

/// Demo login pair for a seeded user.
///
/// Plaintext by design: these are showcase credentials displayed in the
/// User Accounts tab, not a security mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub user_id: String,
}

/// Static directory of demo users, credentials, and friend relations.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
    credentials: Vec<Credential>,
    /// owner id -> friend ids, in display order.
    friendships: Vec<(String, Vec<String>)>,
}

impl UserDirectory {
    pub fn new(
        users: Vec<User>,
        credentials: Vec<Credential>,
        friendships: Vec<(String, Vec<String>)>,
    ) -> Self {
        Self {
            users,
            credentials,
            friendships,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let credential = self.credentials.iter().find(|c| c.email == email)?;
        self.user(&credential.user_id)
    }

    /// Case-sensitive exact match against the credential table.
    ///
    /// Returns `None` on any mismatch rather than erroring, so callers
    /// must null-check.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&User> {
        let credential = self
            .credentials
            .iter()
            .find(|c| c.email == email && c.password == password)?;
        self.user(&credential.user_id)
    }

    /// Returns the credential record for a user, if one is seeded.
    pub fn credential_for(&self, user_id: &str) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.user_id == user_id)
    }

    /// Ordered friends of a user. Unknown ids yield an empty list.
    pub fn friends_of(&self, user_id: &str) -> Vec<&User> {
        self.friendships
            .iter()
            .find(|(owner, _)| owner == user_id)
            .map(|(_, friend_ids)| {
                friend_ids
                    .iter()
                    .filter_map(|id| self.user(id))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_credentials_reference_existing_users() {
        let directory = seed::demo_directory();
        for credential in directory.credentials() {
            assert!(
                directory.user(&credential.user_id).is_some(),
                "credential {} references unknown user {}",
                credential.email,
                credential.user_id
            );
        }
    }

    #[test]
    fn authenticate_matches_exact_pair() {
        let directory = seed::demo_directory();
        let user = directory.authenticate("sarah@example.com", "password123");
        assert!(user.is_some());
        assert_eq!(user.unwrap().name, "Sarah Chen");
    }

    #[test]
    fn authenticate_rejects_wrong_password() {
        let directory = seed::demo_directory();
        assert!(directory.authenticate("sarah@example.com", "Password123").is_none());
        assert!(directory.authenticate("sarah@example.com", "").is_none());
    }

    #[test]
    fn authenticate_rejects_unknown_email() {
        let directory = seed::demo_directory();
        assert!(directory.authenticate("nobody@example.com", "password123").is_none());
    }

    #[test]
    fn friends_of_unknown_user_is_empty() {
        let directory = seed::demo_directory();
        assert!(directory.friends_of("no-such-user").is_empty());
    }

    #[test]
    fn friends_of_preserves_seed_order() {
        let directory = seed::demo_directory();
        let sarah = directory.user_by_email("sarah@example.com").unwrap();
        let friends = directory.friends_of(&sarah.id);
        assert!(!friends.is_empty());
        // Seed order, not alphabetical.
        let ids: Vec<&str> = friends.iter().map(|u| u.id.as_str()).collect();
        let expected = directory
            .friendships_for_test(&sarah.id)
            .expect("sarah has a friendship entry");
        assert_eq!(ids, expected);
    }

    #[test]
    fn user_ids_are_unique() {
        let directory = seed::demo_directory();
        let users = directory.users();
        for (i, user) in users.iter().enumerate() {
            for other in &users[i + 1..] {
                assert_ne!(user.id, other.id);
            }
        }
    }

    #[test]
    fn referenced_friends_exist_in_directory() {
        let directory = seed::demo_directory();
        for user in directory.users() {
            for friend in directory.friends_of(&user.id) {
                assert!(directory.user(&friend.id).is_some());
            }
        }
    }
}

#[cfg(test)]
impl UserDirectory {
    /// Raw friendship ids for assertions on seed ordering.
    fn friendships_for_test(&self, owner_id: &str) -> Option<Vec<&str>> {
        self.friendships
            .iter()
            .find(|(owner, _)| owner == owner_id)
            .map(|(_, ids)| ids.iter().map(String::as_str).collect())
    }
}
