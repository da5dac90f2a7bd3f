// SPDX-License-Identifier: MPL-2.0
//! Chat panel shown alongside the campfire list when a campfire is
//! selected. The panel itself is presentational; its fixed width is
//! reserved by the composer's layout, derived from selection state.

use crate::i18n::fluent::I18n;
use crate::social::{ChatParticipant, ChatThread, ParticipantKind};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Context required to render the chat panel.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub participant: &'a ChatParticipant,
    pub threads: &'a [ChatThread],
}

/// Renders the chat panel for the selected participant.
pub fn view<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    let subtitle = match env.participant.kind {
        ParticipantKind::Group { member_count } => {
            format!("{} {}", member_count, env.i18n.tr("chat-members"))
        }
        ParticipantKind::Direct { online: true } => env.i18n.tr("chat-online"),
        ParticipantKind::Direct { online: false } => env.i18n.tr("chat-offline"),
    };

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(env.participant.display_name.clone()).size(typography::SUBTITLE))
                .push(Text::new(subtitle).size(typography::CAPTION))
                .width(Length::Fill),
        )
        .push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::Close)
                .style(styles::button::quiet)
                .padding(spacing::XS),
        );

    let mut threads = Column::new().spacing(spacing::SM);
    if env.threads.is_empty() {
        threads = threads.push(Text::new(env.i18n.tr("chat-empty")).size(typography::BODY));
    }
    for thread in env.threads {
        let mut line = Row::new()
            .spacing(spacing::SM)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(thread.participant.display_name.clone()).size(typography::BODY))
                    .push(Text::new(thread.preview.clone()).size(typography::CAPTION))
                    .width(Length::Fill),
            );
        if thread.unread > 0 {
            line = line.push(
                container(Text::new(thread.unread.to_string()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::badge),
            );
        }
        threads = threads.push(line);
    }

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(scrollable(threads).height(Length::Fill)),
    )
    .width(Length::Fixed(sizing::CHAT_PANEL_WIDTH))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}
