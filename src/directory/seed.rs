// SPDX-License-Identifier: MPL-2.0
//! Demo directory seed: users, credentials, and friend relations.
//!
//! Credentials are plaintext showcase pairs surfaced in the User Accounts
//! tab so anyone can try the demo. They are not a security contract.

use super::{Credential, User, UserDirectory};

fn user(
    id: &str,
    name: &str,
    bio: &str,
    online: bool,
    status: &str,
    currently_watching: Option<&str>,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        online,
        status: status.to_string(),
        currently_watching: currently_watching.map(str::to_string),
    }
}

fn credential(email: &str, password: &str, user_id: &str) -> Credential {
    Credential {
        email: email.to_string(),
        password: password.to_string(),
        user_id: user_id.to_string(),
    }
}

/// Builds the demo user directory.
pub fn demo_directory() -> UserDirectory {
    let users = vec![
        user(
            "sarah",
            "Sarah Chen",
            "Documentary binger. Will pause anything to share a clip.",
            true,
            "Clipping the good parts",
            Some("Night Market"),
        ),
        user(
            "marcus",
            "Marcus Webb",
            "Western completionist, one canyon at a time.",
            true,
            "Around the campfire",
            Some("Copper Canyon"),
        ),
        user(
            "elena",
            "Elena Rodriguez",
            "Animation first, everything else second.",
            false,
            "Away",
            None,
        ),
        user(
            "dev",
            "Devon Park",
            "Here for the thrillers and the leaderboard.",
            true,
            "Chasing a streak",
            Some("Ashfall"),
        ),
        user(
            "yuki",
            "Yuki Tanaka",
            "Slow TV enthusiast. No spoilers, ever.",
            false,
            "Do not disturb",
            None,
        ),
    ];

    let credentials = vec![
        credential("sarah@example.com", "password123", "sarah"),
        credential("marcus@example.com", "campfire42", "marcus"),
        credential("elena@example.com", "paper-suns", "elena"),
        credential("dev@example.com", "hunter2hunter2", "dev"),
        credential("yuki@example.com", "quietplease", "yuki"),
    ];

    let friendships = vec![
        (
            "sarah".to_string(),
            vec!["marcus".to_string(), "dev".to_string(), "elena".to_string()],
        ),
        (
            "marcus".to_string(),
            vec!["sarah".to_string(), "yuki".to_string()],
        ),
        (
            "elena".to_string(),
            vec!["sarah".to_string()],
        ),
        (
            "dev".to_string(),
            vec!["sarah".to_string(), "marcus".to_string(), "yuki".to_string()],
        ),
        ("yuki".to_string(), vec!["marcus".to_string(), "dev".to_string()]),
    ];

    UserDirectory::new(users, credentials, friendships)
}
