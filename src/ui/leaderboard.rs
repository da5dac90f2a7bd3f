// SPDX-License-Identifier: MPL-2.0
//! Tabbed leaderboard panel shown on the Friends tab.
//!
//! Its active tab is a small local enumeration, independent of the
//! page-level tab state. Standings are derived from the static seeds.

use crate::directory::UserDirectory;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

/// Leaderboard categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardTab {
    TopClips,
    Streaks,
    WatchTime,
}

impl LeaderboardTab {
    pub const ALL: [LeaderboardTab; 3] = [
        LeaderboardTab::TopClips,
        LeaderboardTab::Streaks,
        LeaderboardTab::WatchTime,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            LeaderboardTab::TopClips => "leaderboard-top-clips",
            LeaderboardTab::Streaks => "leaderboard-streaks",
            LeaderboardTab::WatchTime => "leaderboard-watch-time",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(LeaderboardTab),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    active: LeaderboardTab,
}

impl State {
    pub fn new() -> Self {
        Self {
            active: LeaderboardTab::TopClips,
        }
    }

    pub fn active(&self) -> LeaderboardTab {
        self.active
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::TabSelected(tab) => self.active = tab,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo standings for one category, derived from seed order.
///
/// Scores decay linearly with rank and bottom out at zero, so the
/// standings stay valid for directories larger than the shipped seed.
fn standings(tab: LeaderboardTab, directory: &UserDirectory) -> Vec<(String, String)> {
    directory
        .users()
        .iter()
        .enumerate()
        .map(|(rank, user)| {
            let score = match tab {
                LeaderboardTab::TopClips => {
                    format!("{} clips", 42usize.saturating_sub(rank * 7))
                }
                LeaderboardTab::Streaks => {
                    format!("{} days", 21usize.saturating_sub(rank * 3))
                }
                LeaderboardTab::WatchTime => {
                    format!("{}h", 120usize.saturating_sub(rank * 18))
                }
            };
            (user.name.clone(), score)
        })
        .collect()
}

/// Renders the leaderboard panel.
pub fn view<'a>(state: &State, i18n: &I18n, directory: &UserDirectory) -> Element<'a, Message> {
    let mut tabs = Row::new().spacing(spacing::XS);
    for tab in LeaderboardTab::ALL {
        let label = Text::new(i18n.tr(tab.i18n_key())).size(typography::BODY);
        let entry = if tab == state.active() {
            button(label).style(styles::button::selected)
        } else {
            button(label)
                .on_press(Message::TabSelected(tab))
                .style(styles::button::quiet)
        };
        tabs = tabs.push(entry.padding(spacing::XS));
    }

    let mut rows = Column::new().spacing(spacing::SM);
    for (rank, (name, score)) in standings(state.active(), directory).into_iter().enumerate() {
        rows = rows.push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(format!("{}.", rank + 1)).size(typography::BODY))
                .push(Text::new(name).size(typography::BODY).width(Length::Fill))
                .push(Text::new(score).size(typography::BODY)),
        );
    }

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("leaderboard-title")).size(typography::TITLE))
            .push(tabs)
            .push(rows),
    )
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::demo_directory;

    #[test]
    fn default_tab_is_top_clips() {
        assert_eq!(State::new().active(), LeaderboardTab::TopClips);
    }

    #[test]
    fn tab_selection_switches_active_tab() {
        let mut state = State::new();
        state.update(Message::TabSelected(LeaderboardTab::WatchTime));
        assert_eq!(state.active(), LeaderboardTab::WatchTime);
        state.update(Message::TabSelected(LeaderboardTab::Streaks));
        assert_eq!(state.active(), LeaderboardTab::Streaks);
    }

    #[test]
    fn standings_cover_every_seeded_user() {
        let directory = demo_directory();
        for tab in LeaderboardTab::ALL {
            assert_eq!(standings(tab, &directory).len(), directory.users().len());
        }
    }

    #[test]
    fn standings_bottom_out_at_zero_for_large_directories() {
        let users = (0..10)
            .map(|n| crate::directory::User {
                id: format!("user-{}", n),
                name: format!("User {}", n),
                bio: String::new(),
                online: false,
                status: String::new(),
                currently_watching: None,
            })
            .collect();
        let directory = UserDirectory::new(users, Vec::new(), Vec::new());

        for tab in LeaderboardTab::ALL {
            let rows = standings(tab, &directory);
            assert_eq!(rows.len(), 10);
            // Low ranks decay to a zero score instead of underflowing.
            assert!(rows[9].1.starts_with('0'));
        }
    }

    #[test]
    fn view_renders_for_each_tab() {
        let directory = demo_directory();
        let i18n = I18n::default();
        for tab in LeaderboardTab::ALL {
            let mut state = State::new();
            state.update(Message::TabSelected(tab));
            let _element = view(&state, &i18n, &directory);
        }
    }
}
