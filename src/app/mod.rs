// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront tabs.
//!
//! The `App` struct is the view composer: it owns the page-level tab, the
//! current-user pointer, and the selected-campfire view-model, and wires
//! the static seeds (catalog, directory, campfires) into the tab views.
//! Policy decisions (tab side effects, chat panel reservation, sign-in
//! gating) live next to the update loop so user-facing behavior is easy
//! to audit.

mod message;
mod subscription;
mod tab;
mod update;
mod view;

pub use message::{Flags, Message};
pub use tab::Tab;

use crate::catalog::{seed as catalog_seed, Catalog};
use crate::config::{self, Config};
use crate::directory::{seed as directory_seed, UserDirectory};
use crate::i18n::fluent::I18n;
use crate::social::{seed as social_seed, Campfire, ChatParticipant, MessageSystem};
use crate::ui::account_settings;
use crate::ui::friends;
use crate::ui::home;
use crate::ui::theming::ThemeMode;
use iced::{window, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state bridging the seeds, localization, and the
/// per-tab component states.
pub struct App {
    pub i18n: I18n,
    active_tab: Tab,
    current_user_id: Option<String>,
    selected_campfire: Option<ChatParticipant>,
    catalog: Catalog,
    directory: UserDirectory,
    campfires: Vec<Campfire>,
    message_system: MessageSystem,
    theme_mode: ThemeMode,
    carousel_autoplay: bool,
    home: home::State,
    friends: friends::State,
    settings: account_settings::State,
    /// Tracked from resize events, used to clamp popovers.
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_tab", &self.active_tab)
            .field("current_user_id", &self.current_user_id)
            .field("selected_campfire", &self.selected_campfire.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config, seeds, and CLI flags.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load config: {}", err);
            Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog = catalog_seed::demo_catalog();
        let directory = directory_seed::demo_directory();
        let campfires = social_seed::demo_campfires();

        let carousel_autoplay = config.carousel_autoplay.unwrap_or(true);
        let mut home = home::State::new(catalog.hero_slides().len());
        home.set_carousel_autoplay(carousel_autoplay);

        let mut app = App {
            i18n,
            active_tab: Tab::Home,
            current_user_id: None,
            selected_campfire: None,
            catalog,
            directory,
            campfires,
            message_system: MessageSystem::new(),
            theme_mode: config.theme_mode,
            carousel_autoplay,
            home,
            friends: friends::State::new(),
            settings: account_settings::State::new(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        };

        if let Some(email) = &flags.user_email {
            match app.directory.user_by_email(email).map(|u| u.id.clone()) {
                Some(id) => app.select_user(&id, false),
                None => eprintln!("Unknown demo account: {}", email),
            }
        }

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        "Firelight".to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self),
        ])
    }

    // --- composer state, readable by the view layer and tests ---

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.current_user_id.as_deref()
    }

    pub fn selected_campfire(&self) -> Option<&ChatParticipant> {
        self.selected_campfire.as_ref()
    }

    /// Whether the content region reserves leading space for the chat
    /// panel. Derived from selection state, never stored.
    pub fn chat_panel_reserved(&self) -> bool {
        self.active_tab == Tab::Campfires && self.selected_campfire.is_some()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default()).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_signed_out_on_home() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.active_tab(), Tab::Home);
        assert_eq!(app.current_user_id(), None);
        assert!(app.selected_campfire().is_none());
        assert!(!app.chat_panel_reserved());
    }

    #[test]
    fn user_flag_preselects_account() {
        let (app, _task) = App::new(Flags {
            lang: None,
            user_email: Some("sarah@example.com".to_string()),
        });
        assert_eq!(app.current_user_id(), Some("sarah"));
        // Startup selection stays on Home either way.
        assert_eq!(app.active_tab(), Tab::Home);
    }

    #[test]
    fn unknown_user_flag_is_ignored() {
        let (app, _task) = App::new(Flags {
            lang: None,
            user_email: Some("nobody@example.com".to_string()),
        });
        assert_eq!(app.current_user_id(), None);
    }
}
