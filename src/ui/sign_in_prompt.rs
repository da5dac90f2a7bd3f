// SPDX-License-Identifier: MPL-2.0
//! Call-to-action shown when no user is signed in.
//!
//! Tabs other than User Accounts are still valid without a user; instead
//! of failing they render this prompt, which routes to the accounts tab.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    GoToAccounts,
}

/// Renders the centered sign-in prompt.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(iced::Alignment::Center)
        .push(Text::new(i18n.tr("sign-in-title")).size(typography::TITLE))
        .push(Text::new(i18n.tr("sign-in-hint")).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("sign-in-button")))
                .on_press(Message::GoToAccounts)
                .style(styles::button::primary)
                .padding([spacing::SM, spacing::LG]),
        );

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
