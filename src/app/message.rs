// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Tab;
use crate::ui::account_settings;
use crate::ui::campfires;
use crate::ui::chat_panel;
use crate::ui::friends;
use crate::ui::home;
use crate::ui::sign_in_prompt;
use crate::ui::user_accounts;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A tab bar entry was clicked.
    TabSelected(Tab),
    /// ArrowRight: step to the next tab, clamped at the end.
    NextTab,
    /// ArrowLeft: step to the previous tab, clamped at the start.
    PreviousTab,
    /// Escape: clear the selected campfire, wherever it was set.
    EscapePressed,
    /// The window was resized (tracked for popover clamping).
    WindowResized(Size),
    Home(home::Message),
    Friends(friends::Message),
    Campfires(campfires::Message),
    ChatPanel(chat_panel::Message),
    SignInPrompt(sign_in_prompt::Message),
    UserAccounts(user_accounts::Message),
    AccountSettings(account_settings::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional demo account email to start signed in as.
    pub user_email: Option<String>,
}
