// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The composer invariants are enforced here:
//! - the chat panel selection only survives on the Campfires tab,
//! - switching the current user always clears the selection,
//! - arrow-key navigation clamps at both ends of the tab sequence.

use super::{App, Message, Tab};
use crate::social::ChatParticipant;
use crate::ui::account_settings::{self, Event as SettingsEvent};
use crate::ui::campfires;
use crate::ui::chat_panel;
use crate::ui::sign_in_prompt;
use crate::ui::user_accounts;
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.select_tab(tab);
                Task::none()
            }
            Message::NextTab => {
                self.select_tab(self.active_tab.next());
                Task::none()
            }
            Message::PreviousTab => {
                self.select_tab(self.active_tab.previous());
                Task::none()
            }
            Message::EscapePressed => {
                // Unconditional: Escape clears the selection wherever set.
                self.selected_campfire = None;
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::Home(msg) => {
                self.home.update(msg);
                Task::none()
            }
            Message::Friends(msg) => {
                self.friends.update(msg);
                Task::none()
            }
            Message::Campfires(campfires::Message::CampfireSelected(id)) => {
                self.select_campfire(&id);
                Task::none()
            }
            Message::ChatPanel(chat_panel::Message::Close) => {
                self.selected_campfire = None;
                Task::none()
            }
            Message::SignInPrompt(sign_in_prompt::Message::GoToAccounts) => {
                self.select_tab(Tab::UserAccounts);
                Task::none()
            }
            Message::UserAccounts(msg) => self.handle_user_accounts(msg),
            Message::AccountSettings(msg) => {
                let event = self.settings.update(msg);
                self.handle_settings_event(event);
                Task::none()
            }
        }
    }

    /// Sets the active tab. Leaving Campfires drops the chat selection so
    /// the panel is only ever visible there.
    pub(super) fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if tab != Tab::Campfires {
            self.selected_campfire = None;
        }
    }

    /// Makes `user_id` the current user and re-seeds their chats.
    ///
    /// `return_home` is true only for the explicit "switch to this
    /// account" action from the accounts list.
    pub(super) fn select_user(&mut self, user_id: &str, return_home: bool) {
        self.current_user_id = Some(user_id.to_string());
        self.message_system
            .initialize_user_chats(user_id, &self.directory, &self.campfires);
        self.selected_campfire = None;
        if return_home {
            self.active_tab = Tab::Home;
        }
    }

    /// Derives a `ChatParticipant` for the campfire and stores it as the
    /// selection. Only observable on the Campfires tab.
    pub(super) fn select_campfire(&mut self, campfire_id: &str) {
        if let Some(campfire) = self.campfires.iter().find(|c| c.id == campfire_id) {
            self.selected_campfire = Some(ChatParticipant::from_campfire(campfire));
        }
    }

    fn handle_user_accounts(&mut self, message: user_accounts::Message) -> Task<Message> {
        match message {
            user_accounts::Message::SwitchTo(user_id) => {
                self.select_user(&user_id, true);
                Task::none()
            }
            user_accounts::Message::CopyCredentials(user_id) => {
                match self.directory.credential_for(&user_id) {
                    // Fire-and-forget; the clipboard task surfaces no error state.
                    Some(credential) => iced::clipboard::write(format!(
                        "{} / {}",
                        credential.email, credential.password
                    )),
                    None => {
                        eprintln!("No credential seeded for user: {}", user_id);
                        Task::none()
                    }
                }
            }
        }
    }

    fn handle_settings_event(&mut self, event: SettingsEvent) {
        match event {
            SettingsEvent::None => {}
            SettingsEvent::ThemeChanged(mode) => {
                self.theme_mode = mode;
                self.persist_config();
            }
            SettingsEvent::AutoplayChanged(enabled) => {
                self.carousel_autoplay = enabled;
                self.home.set_carousel_autoplay(enabled);
                self.persist_config();
            }
            SettingsEvent::LocaleChanged(locale) => {
                self.i18n.set_locale(locale);
                self.persist_config();
            }
        }
    }

    fn persist_config(&self) {
        let config = crate::config::Config {
            language: Some(self.i18n.current_locale().to_string()),
            theme_mode: self.theme_mode,
            carousel_autoplay: Some(self.carousel_autoplay),
        };
        if let Err(err) = crate::config::save(&config) {
            eprintln!("Failed to save config: {}", err);
        }
    }
}
