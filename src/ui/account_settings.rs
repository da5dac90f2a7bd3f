// SPDX-License-Identifier: MPL-2.0
//! Account Settings tab: profile summary, voice status recorder, and
//! persisted UI preferences (theme, language, carousel autoplay).

use crate::directory::User;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::voice_visualizer::{self, Event as VisualizerEvent};
use iced::widget::{button, container, scrollable, toggler, Column, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub enum Message {
    Visualizer(voice_visualizer::Message),
    ThemeSelected(ThemeMode),
    AutoplayToggled(bool),
    LocaleSelected(LanguageIdentifier),
}

/// Events propagated to the composer (which persists preferences).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ThemeChanged(ThemeMode),
    AutoplayChanged(bool),
    LocaleChanged(LanguageIdentifier),
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    visualizer: voice_visualizer::State,
}

impl State {
    pub fn new() -> Self {
        Self {
            visualizer: voice_visualizer::State::new(),
        }
    }

    pub fn visualizer(&self) -> &voice_visualizer::State {
        &self.visualizer
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Visualizer(msg) => {
                if self.visualizer.update(msg) == VisualizerEvent::MaxDurationReached {
                    // We are the caller enforcing the cap.
                    self.visualizer
                        .update(voice_visualizer::Message::StopRecording);
                }
                Event::None
            }
            Message::ThemeSelected(mode) => Event::ThemeChanged(mode),
            Message::AutoplayToggled(enabled) => Event::AutoplayChanged(enabled),
            Message::LocaleSelected(locale) => Event::LocaleChanged(locale),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Context required to render the settings tab.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub user: &'a User,
    pub theme_mode: ThemeMode,
    pub carousel_autoplay: bool,
}

/// Renders the Account Settings tab for the signed-in user.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let profile = container(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(env.user.name.clone()).size(typography::TITLE))
            .push(Text::new(env.user.bio.clone()).size(typography::BODY))
            .push(Text::new(env.user.status.clone()).size(typography::CAPTION)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel);

    let recorder = container(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(env.i18n.tr("settings-voice-status")).size(typography::SUBTITLE))
            .push(
                voice_visualizer::view(
                    state.visualizer(),
                    env.i18n.tr("recorder-record"),
                    env.i18n.tr("recorder-stop"),
                    env.i18n.tr("recorder-discard"),
                )
                .map(Message::Visualizer),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel);

    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark] {
        let label = Text::new(env.i18n.tr(mode.i18n_key())).size(typography::BODY);
        let entry = if mode == env.theme_mode {
            button(label).style(styles::button::selected)
        } else {
            button(label)
                .on_press(Message::ThemeSelected(mode))
                .style(styles::button::quiet)
        };
        theme_row = theme_row.push(entry.padding(spacing::XS));
    }

    let mut locale_row = Row::new().spacing(spacing::XS);
    for locale in &env.i18n.available_locales {
        let label = Text::new(locale.to_string()).size(typography::BODY);
        let entry = if locale == env.i18n.current_locale() {
            button(label).style(styles::button::selected)
        } else {
            button(label)
                .on_press(Message::LocaleSelected(locale.clone()))
                .style(styles::button::quiet)
        };
        locale_row = locale_row.push(entry.padding(spacing::XS));
    }

    let preferences = container(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(env.i18n.tr("settings-preferences")).size(typography::SUBTITLE))
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(iced::Alignment::Center)
                    .push(Text::new(env.i18n.tr("settings-theme")).size(typography::BODY))
                    .push(theme_row),
            )
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(iced::Alignment::Center)
                    .push(Text::new(env.i18n.tr("settings-language")).size(typography::BODY))
                    .push(locale_row),
            )
            .push(
                toggler(env.carousel_autoplay)
                    .label(env.i18n.tr("settings-autoplay"))
                    .on_toggle(Message::AutoplayToggled),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel);

    scrollable(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(Text::new(env.i18n.tr("settings-title")).size(typography::TITLE))
            .push(profile)
            .push(recorder)
            .push(preferences),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::demo_directory;
    use crate::ui::voice_visualizer::Phase;
    use std::time::Duration;

    #[test]
    fn theme_selection_emits_event() {
        let mut state = State::new();
        let event = state.update(Message::ThemeSelected(ThemeMode::Dark));
        assert_eq!(event, Event::ThemeChanged(ThemeMode::Dark));
    }

    #[test]
    fn autoplay_toggle_emits_event() {
        let mut state = State::new();
        let event = state.update(Message::AutoplayToggled(false));
        assert_eq!(event, Event::AutoplayChanged(false));
    }

    #[test]
    fn recorder_is_stopped_when_max_duration_hits() {
        let mut state = State {
            visualizer: voice_visualizer::State::with_max_duration(Duration::from_millis(150)),
        };
        state.update(Message::Visualizer(voice_visualizer::Message::StartRecording));
        state.update(Message::Visualizer(voice_visualizer::Message::Tick));
        assert_eq!(state.visualizer().phase(), Phase::Recorded);
    }

    #[test]
    fn view_renders_for_signed_in_user() {
        let directory = demo_directory();
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(
            &state,
            ViewEnv {
                i18n: &i18n,
                user: directory.user("sarah").unwrap(),
                theme_mode: ThemeMode::System,
                carousel_autoplay: true,
            },
        );
    }
}
