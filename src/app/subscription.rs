// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Keyboard navigation and window resizes are routed through a single
//! `listen_with` subscription. Timers are created only while the component
//! that consumes them is live, so leaving a tab tears its timer down.

use super::{App, Message, Tab};
use crate::ui::hero_carousel;
use crate::ui::voice_visualizer;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};

/// Creates the native event subscription.
///
/// Arrow keys step through the tab sequence and Escape clears the chat
/// selection. Only events no widget captured are considered, so text
/// inputs keep their own arrow-key behavior.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        if status == event::Status::Captured {
            return None;
        }

        if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = &event {
            return match key.as_ref() {
                Key::Named(Named::ArrowRight) => Some(Message::NextTab),
                Key::Named(Named::ArrowLeft) => Some(Message::PreviousTab),
                Key::Named(Named::Escape) => Some(Message::EscapePressed),
                _ => None,
            };
        }

        None
    })
}

/// Creates the timer subscriptions that are active for the current state.
///
/// - Hero auto-advance ticks only on the Home tab of a signed-in user
///   while the carousel wants to advance.
/// - The waveform tick runs only while a recording is in progress on the
///   Account Settings tab.
pub fn create_tick_subscription(app: &App) -> Subscription<Message> {
    let mut timers = Vec::new();

    if app.active_tab() == Tab::Home
        && app.current_user_id().is_some()
        && app.home.carousel().should_auto_advance()
    {
        timers.push(
            time::every(hero_carousel::AUTO_ADVANCE_INTERVAL).map(|_| {
                Message::Home(crate::ui::home::Message::Carousel(
                    hero_carousel::Message::AutoAdvance,
                ))
            }),
        );
    }

    if app.active_tab() == Tab::AccountSettings && app.settings.visualizer().is_recording() {
        timers.push(time::every(voice_visualizer::SAMPLE_INTERVAL).map(|_| {
            Message::AccountSettings(crate::ui::account_settings::Message::Visualizer(
                voice_visualizer::Message::Tick,
            ))
        }));
    }

    Subscription::batch(timers)
}
