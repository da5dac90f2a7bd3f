// SPDX-License-Identifier: MPL-2.0
//! Social layer: campfires (group chats), chat view-models, and the
//! in-memory message system.
//!
//! Everything here is memory-resident demo state. `MessageSystem` is
//! re-seeded whenever the active user changes and forgets everything on
//! relaunch.

pub mod campfire;
pub mod messages;
pub mod seed;

pub use campfire::{Campfire, ChatParticipant, ParticipantKind};
pub use messages::{ChatThread, MessageSystem};
