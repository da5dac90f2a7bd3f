// SPDX-License-Identifier: MPL-2.0
//! UI components, styling, and ephemeral per-component state machines.

pub mod account_settings;
pub mod campfires;
pub mod chat_panel;
pub mod content_row;
pub mod design_tokens;
pub mod friends;
pub mod hero_carousel;
pub mod home;
pub mod leaderboard;
pub mod popover;
pub mod sign_in_prompt;
pub mod styles;
pub mod theming;
pub mod user_accounts;
pub mod voice_visualizer;
