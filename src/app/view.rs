// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition: tab bar, sign-in gating, and per-tab
//! content, including the chat panel split on the Campfires tab.

use super::{App, Message, Tab};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::{
    account_settings, campfires, chat_panel, friends, home, sign_in_prompt, user_accounts,
};
use chrono::Utc;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        Column::new()
            .push(self.tab_bar())
            .push(self.tab_content())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn tab_bar(&self) -> Element<'_, Message> {
        let mut bar = Row::new()
            .spacing(spacing::XS)
            .align_y(iced::Alignment::Center);

        for tab in Tab::ALL {
            let label = Text::new(self.i18n.tr(tab.i18n_key())).size(typography::BODY);
            let entry = if tab == self.active_tab() {
                button(label).style(styles::button::selected)
            } else {
                button(label)
                    .on_press(Message::TabSelected(tab))
                    .style(styles::button::quiet)
            };
            bar = bar.push(entry.padding([spacing::XS, spacing::MD]));
        }

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TAB_BAR_HEIGHT))
            .padding([0.0, spacing::MD])
            .align_y(iced::Alignment::Center)
            .style(styles::container::panel)
            .into()
    }

    fn tab_content(&self) -> Element<'_, Message> {
        // Every tab except User Accounts needs a signed-in user.
        let Some(user_id) = self.current_user_id() else {
            return match self.active_tab() {
                Tab::UserAccounts => self.user_accounts_view(),
                _ => sign_in_prompt::view(&self.i18n).map(Message::SignInPrompt),
            };
        };

        match self.active_tab() {
            Tab::Home => home::view(
                &self.home,
                home::ViewEnv {
                    i18n: &self.i18n,
                    catalog: &self.catalog,
                    viewport: self.window_size,
                },
            )
            .map(Message::Home),
            Tab::Friends => friends::view(
                &self.friends,
                friends::ViewEnv {
                    i18n: &self.i18n,
                    directory: &self.directory,
                    current_user_id: user_id,
                    viewport: self.window_size,
                },
            )
            .map(Message::Friends),
            Tab::Campfires => self.campfires_view(user_id),
            Tab::AccountSettings => self.account_settings_view(user_id),
            Tab::UserAccounts => self.user_accounts_view(),
        }
    }

    /// Campfire list, with the chat panel occupying its reserved width on
    /// the leading edge while a campfire is selected.
    fn campfires_view(&self, user_id: &str) -> Element<'_, Message> {
        let list = campfires::view(campfires::ViewEnv {
            i18n: &self.i18n,
            campfires: &self.campfires,
            selected_id: self.selected_campfire().map(|p| p.id.as_str()),
            now: Utc::now(),
        })
        .map(Message::Campfires);

        if let Some(participant) = self.selected_campfire() {
            let panel = chat_panel::view(chat_panel::ViewEnv {
                i18n: &self.i18n,
                participant,
                threads: self.message_system.threads_for(user_id),
            })
            .map(Message::ChatPanel);

            Row::new()
                .push(panel)
                .push(list)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            list
        }
    }

    fn account_settings_view(&self, user_id: &str) -> Element<'_, Message> {
        match self.directory.user(user_id) {
            Some(user) => account_settings::view(
                &self.settings,
                account_settings::ViewEnv {
                    i18n: &self.i18n,
                    user,
                    theme_mode: self.theme_mode,
                    carousel_autoplay: self.carousel_autoplay,
                },
            )
            .map(Message::AccountSettings),
            // A current id that is not in the directory means the seeds
            // changed under us; degrade to the sign-in prompt.
            None => sign_in_prompt::view(&self.i18n).map(Message::SignInPrompt),
        }
    }

    fn user_accounts_view(&self) -> Element<'_, Message> {
        user_accounts::view(user_accounts::ViewEnv {
            i18n: &self.i18n,
            directory: &self.directory,
            current_user_id: self.current_user_id(),
        })
        .map(Message::UserAccounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_tabs_render_without_panicking() {
        let mut app = App::default();
        for tab in Tab::ALL {
            app.select_tab(tab);
            let _element = app.view();
        }
    }

    #[test]
    fn signed_in_tabs_render_without_panicking() {
        let mut app = App::default();
        app.select_user("sarah", false);
        for tab in Tab::ALL {
            app.select_tab(tab);
            let _element = app.view();
        }
    }

    #[test]
    fn campfires_tab_renders_with_selection() {
        let mut app = App::default();
        app.select_user("sarah", false);
        app.select_tab(Tab::Campfires);
        let id = app.campfires[0].id.clone();
        app.select_campfire(&id);
        assert!(app.chat_panel_reserved());
        let _element = app.view();
    }
}
