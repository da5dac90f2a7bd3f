// SPDX-License-Identifier: MPL-2.0
//! Campfires tab: seeded campfire list with activity counters.
//!
//! Selecting a campfire is handled by the composer, which derives a
//! `ChatParticipant` view-model and opens the chat panel.

use crate::i18n::fluent::I18n;
use crate::social::Campfire;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::widget::{button, container, scrollable, Column, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    CampfireSelected(String),
}

/// Context required to render the campfire list.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub campfires: &'a [Campfire],
    pub selected_id: Option<&'a str>,
    pub now: DateTime<Utc>,
}

/// Renders the campfire list.
pub fn view<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::SM);

    for campfire in env.campfires {
        let activity = Text::new(campfire.activity_label(env.now)).size(typography::CAPTION);
        let counters = Text::new(format!(
            "{} · {}",
            format_count(campfire.message_count, &env.i18n.tr("campfire-messages")),
            format_count(campfire.clip_count, &env.i18n.tr("campfire-clips")),
        ))
        .size(typography::CAPTION);

        let dot = Space::new()
            .width(Length::Fixed(sizing::PRESENCE_DOT))
            .height(Length::Fixed(sizing::PRESENCE_DOT));
        let flame = if campfire.is_active {
            container(dot).style(|_theme: &iced::Theme| iced::widget::container::Style {
                background: Some(palette::EMBER_400.into()),
                border: iced::Border {
                    radius: (sizing::PRESENCE_DOT / 2.0).into(),
                    ..iced::Border::default()
                },
                ..iced::widget::container::Style::default()
            })
        } else {
            container(dot)
        };

        let body = Row::new()
            .spacing(spacing::SM)
            .align_y(iced::Alignment::Center)
            .push(flame)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(campfire.name.clone()).size(typography::SUBTITLE))
                    .push(counters)
                    .width(Length::Fill),
            )
            .push(activity);

        let is_selected = env.selected_id == Some(campfire.id.as_str());
        let entry = button(container(body).padding(spacing::SM).width(Length::Fill))
            .on_press(Message::CampfireSelected(campfire.id.clone()))
            .width(Length::Fill);
        let entry = if is_selected {
            entry.style(styles::button::selected)
        } else {
            entry.style(styles::button::quiet)
        };

        list = list.push(entry);
    }

    scrollable(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(Text::new(env.i18n.tr("campfires-title")).size(typography::TITLE))
            .push(list),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn format_count(count: u32, noun: &str) -> String {
    format!("{} {}", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::social::seed::demo_campfires;

    #[test]
    fn view_renders_with_and_without_selection() {
        let campfires = demo_campfires();
        let i18n = I18n::default();
        let now = Utc::now();

        let _element = view(ViewEnv {
            i18n: &i18n,
            campfires: &campfires,
            selected_id: None,
            now,
        });
        let _element = view(ViewEnv {
            i18n: &i18n,
            campfires: &campfires,
            selected_id: Some(campfires[0].id.as_str()),
            now,
        });
    }

    #[test]
    fn format_count_joins_count_and_noun() {
        assert_eq!(format_count(3, "clips"), "3 clips");
    }
}
