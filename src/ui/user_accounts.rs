// SPDX-License-Identifier: MPL-2.0
//! User Accounts tab: every demo account with its showcase credentials.
//!
//! Credentials are displayed in plaintext on purpose — this is demo
//! scaffolding so anyone can try the storefront, not a security surface.
//! The copy button writes `email / password` to the system clipboard as a
//! fire-and-forget task owned by the composer.

use crate::directory::UserDirectory;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// The explicit "switch to this account" action.
    SwitchTo(String),
    /// Copy this account's credentials to the clipboard.
    CopyCredentials(String),
}

/// Context required to render the accounts list.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub directory: &'a UserDirectory,
    pub current_user_id: Option<&'a str>,
}

/// Renders the accounts list.
pub fn view<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::MD);

    for user in env.directory.users() {
        let credential = env.directory.credential_for(&user.id);
        let is_current = env.current_user_id == Some(user.id.as_str());

        let mut details = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(user.name.clone()).size(typography::SUBTITLE))
            .push(Text::new(user.bio.clone()).size(typography::CAPTION));
        if let Some(credential) = credential {
            details = details.push(
                Text::new(format!("{} / {}", credential.email, credential.password))
                    .size(typography::CAPTION),
            );
        }

        let switch_label = if is_current {
            env.i18n.tr("accounts-current")
        } else {
            env.i18n.tr("accounts-switch")
        };
        let switch = if is_current {
            button(Text::new(switch_label)).style(styles::button::disabled())
        } else {
            button(Text::new(switch_label))
                .on_press(Message::SwitchTo(user.id.clone()))
                .style(styles::button::primary)
        };

        let mut actions = Row::new().spacing(spacing::SM).push(switch);
        if credential.is_some() {
            actions = actions.push(
                button(Text::new(env.i18n.tr("accounts-copy")))
                    .on_press(Message::CopyCredentials(user.id.clone()))
                    .style(styles::button::quiet),
            );
        }

        list = list.push(
            container(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(iced::Alignment::Center)
                    .push(details.width(Length::Fill))
                    .push(actions),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::panel),
        );
    }

    scrollable(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(Text::new(env.i18n.tr("accounts-title")).size(typography::TITLE))
            .push(Text::new(env.i18n.tr("accounts-hint")).size(typography::BODY))
            .push(list),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::demo_directory;

    #[test]
    fn view_renders_signed_out_and_signed_in() {
        let directory = demo_directory();
        let i18n = I18n::default();

        let _element = view(ViewEnv {
            i18n: &i18n,
            directory: &directory,
            current_user_id: None,
        });
        let _element = view(ViewEnv {
            i18n: &i18n,
            directory: &directory,
            current_user_id: Some("sarah"),
        });
    }
}
