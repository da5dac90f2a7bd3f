// SPDX-License-Identifier: MPL-2.0
//! Friends tab: friend list with presence, account-info popovers, and the
//! tabbed leaderboard panel.

use crate::directory::UserDirectory;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::leaderboard;
use crate::ui::popover;
use crate::ui::styles;
use iced::widget::{container, mouse_area, scrollable, Column, Row, Space, Stack, Text};
use iced::{Element, Length, Padding, Point, Rectangle, Size};

/// Context required to render the Friends tab.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub directory: &'a UserDirectory,
    pub current_user_id: &'a str,
    pub viewport: Size,
}

#[derive(Debug, Clone)]
pub enum Message {
    Leaderboard(leaderboard::Message),
    FriendHoverEntered { index: usize, user_id: String },
    FriendHoverExited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    leaderboard: leaderboard::State,
    hovered_friend: Option<(usize, String)>,
}

impl State {
    pub fn new() -> Self {
        Self {
            leaderboard: leaderboard::State::new(),
            hovered_friend: None,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Leaderboard(msg) => self.leaderboard.update(msg),
            Message::FriendHoverEntered { index, user_id } => {
                self.hovered_friend = Some((index, user_id));
            }
            Message::FriendHoverExited => self.hovered_friend = None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Friend list entry height, used to anchor the info popover.
const FRIEND_ROW_HEIGHT: f32 = 44.0;

fn friend_row_rect(index: usize) -> Rectangle {
    let y = spacing::MD + index as f32 * (FRIEND_ROW_HEIGHT + spacing::XS);
    Rectangle::new(
        Point::new(spacing::MD, y),
        Size::new(280.0, FRIEND_ROW_HEIGHT),
    )
}

/// Renders the Friends tab.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let friends = env.directory.friends_of(env.current_user_id);

    let mut list = Column::new().spacing(spacing::XS);
    if friends.is_empty() {
        list = list.push(Text::new(env.i18n.tr("friends-empty")).size(typography::BODY));
    }
    for (index, friend) in friends.iter().enumerate() {
        let dot_color = if friend.online {
            palette::ONLINE
        } else {
            palette::OFFLINE
        };
        let dot = container(
            Space::new()
                .width(Length::Fixed(sizing::PRESENCE_DOT))
                .height(Length::Fixed(sizing::PRESENCE_DOT)),
        )
        .style(move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(dot_color.into()),
            border: iced::Border {
                radius: (sizing::PRESENCE_DOT / 2.0).into(),
                ..iced::Border::default()
            },
            ..iced::widget::container::Style::default()
        });

        let entry = Row::new()
            .spacing(spacing::SM)
            .align_y(iced::Alignment::Center)
            .push(dot)
            .push(Text::new(friend.name.clone()).size(typography::BODY).width(Length::Fill))
            .push(Text::new(friend.status.clone()).size(typography::CAPTION));

        let row = container(entry)
            .padding(spacing::SM)
            .height(Length::Fixed(FRIEND_ROW_HEIGHT))
            .width(Length::Fixed(300.0))
            .style(styles::container::panel);

        let hovered = Message::FriendHoverEntered {
            index,
            user_id: friend.id.clone(),
        };
        list = list.push(
            mouse_area(row)
                .on_enter(hovered)
                .on_exit(Message::FriendHoverExited),
        );
    }

    let board = leaderboard::view(&state.leaderboard, env.i18n, env.directory)
        .map(Message::Leaderboard);

    let content = scrollable(
        Row::new()
            .spacing(spacing::XL)
            .padding(spacing::MD)
            .push(
                Column::new()
                    .spacing(spacing::MD)
                    .push(Text::new(env.i18n.tr("friends-title")).size(typography::TITLE))
                    .push(list),
            )
            .push(board),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = Stack::new().push(content);
    if let Some(popup) = account_popover(state, &env) {
        layers = layers.push(popup);
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

/// Account-info popover for the hovered friend.
fn account_popover<'a>(state: &'a State, env: &ViewEnv<'a>) -> Option<Element<'a, Message>> {
    let (index, user_id) = state.hovered_friend.as_ref()?;
    let user = env.directory.user(user_id)?;

    let trigger = friend_row_rect(*index);
    let popup_size = Size::new(sizing::POPOVER_WIDTH, sizing::POPOVER_HEIGHT);
    let position = popover::anchored_position(trigger, popup_size, env.viewport);

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(user.name.clone()).size(typography::SUBTITLE))
        .push(Text::new(user.bio.clone()).size(typography::CAPTION))
        .push(Text::new(user.status.clone()).size(typography::CAPTION));
    if let Some(watching) = &user.currently_watching {
        body = body.push(
            Text::new(format!("{} {}", env.i18n.tr("friends-watching-label"), watching))
                .size(typography::CAPTION),
        );
    }

    let popup = container(body)
        .width(Length::Fixed(sizing::POPOVER_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::popover);

    Some(
        container(popup)
            .padding(Padding {
                top: position.y,
                left: position.x,
                right: 0.0,
                bottom: 0.0,
            })
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::demo_directory;

    fn env<'a>(i18n: &'a I18n, directory: &'a UserDirectory) -> ViewEnv<'a> {
        ViewEnv {
            i18n,
            directory,
            current_user_id: "sarah",
            viewport: Size::new(1280.0, 800.0),
        }
    }

    #[test]
    fn hover_tracks_friend_entries() {
        let mut state = State::new();
        state.update(Message::FriendHoverEntered {
            index: 1,
            user_id: "dev".into(),
        });
        assert_eq!(state.hovered_friend, Some((1, "dev".to_string())));
        state.update(Message::FriendHoverExited);
        assert!(state.hovered_friend.is_none());
    }

    #[test]
    fn view_renders_for_user_with_friends() {
        let directory = demo_directory();
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(&state, env(&i18n, &directory));
    }

    #[test]
    fn view_renders_for_user_without_friends() {
        let directory = demo_directory();
        let i18n = I18n::default();
        let state = State::new();
        let e = ViewEnv {
            current_user_id: "no-such-user",
            ..env(&i18n, &directory)
        };
        let _element = view(&state, e);
    }

    #[test]
    fn popover_skipped_for_stale_hover() {
        let directory = demo_directory();
        let i18n = I18n::default();
        let mut state = State::new();
        state.update(Message::FriendHoverEntered {
            index: 0,
            user_id: "gone".into(),
        });
        let e = env(&i18n, &directory);
        assert!(account_popover(&state, &e).is_none());
    }
}
