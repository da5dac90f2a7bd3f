// SPDX-License-Identifier: MPL-2.0
//! Hero carousel state machine and view.
//!
//! The carousel auto-advances on a fixed interval while auto-play is on.
//! Any manual navigation (prev/next/go-to) turns auto-play off for good;
//! hovering only pauses it, leaving resumes. The index wraps modulo the
//! slide count in both directions.
//!
//! The auto-advance timer itself lives in the app subscription, gated on
//! [`State::should_auto_advance`], so it disappears with the component.

use crate::catalog::HeroSlide;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, Column, Row, Space, Text};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// Interval between automatic slide advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

/// Messages emitted by the carousel.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    HoverEntered,
    HoverExited,
    /// Fired by the subscription timer, never by user input.
    AutoAdvance,
}

/// Per-instance carousel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    current: usize,
    len: usize,
    auto_playing: bool,
    hovered: bool,
}

impl State {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            auto_playing: true,
            hovered: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    /// Applies the persisted autoplay preference.
    pub fn set_auto_playing(&mut self, on: bool) {
        self.auto_playing = on;
    }

    /// Whether the subscription should keep the auto-advance timer alive.
    pub fn should_auto_advance(&self) -> bool {
        self.auto_playing && !self.hovered && self.len > 1
    }

    pub fn update(&mut self, message: Message) {
        if self.len == 0 {
            return;
        }
        match message {
            Message::Next => {
                self.auto_playing = false;
                self.advance();
            }
            Message::Previous => {
                self.auto_playing = false;
                self.current = (self.current + self.len - 1) % self.len;
            }
            Message::GoTo(index) => {
                self.auto_playing = false;
                if index < self.len {
                    self.current = index;
                }
            }
            Message::HoverEntered => self.hovered = true,
            Message::HoverExited => self.hovered = false,
            Message::AutoAdvance => {
                if self.should_auto_advance() {
                    self.advance();
                }
            }
        }
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }
}

/// Renders the hero carousel for the given slides.
pub fn view<'a>(state: &State, slides: &'a [HeroSlide]) -> Element<'a, Message> {
    let Some(slide) = slides.get(state.current()) else {
        return Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HERO_HEIGHT))
            .into();
    };

    let headline = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(slide.title.clone()).size(typography::HERO))
        .push(Text::new(slide.tagline.clone()).size(typography::SUBTITLE));

    let mut dots = Row::new().spacing(spacing::XS);
    for index in 0..slides.len() {
        let marker = if index == state.current() { "●" } else { "○" };
        dots = dots.push(
            button(Text::new(marker).size(typography::CAPTION))
                .on_press(Message::GoTo(index))
                .style(styles::button::quiet)
                .padding(spacing::XXS),
        );
    }

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(
            button(Text::new("‹").size(typography::TITLE))
                .on_press(Message::Previous)
                .style(styles::button::quiet)
                .padding(spacing::XS),
        )
        .push(dots)
        .push(
            button(Text::new("›").size(typography::TITLE))
                .on_press(Message::Next)
                .style(styles::button::quiet)
                .padding(spacing::XS),
        );

    let body = Column::new()
        .spacing(spacing::MD)
        .push(headline)
        .push(controls);

    let hero = container(body)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding(spacing::XL)
        .style(styles::container::hero_backdrop);

    mouse_area(hero)
        .on_enter(Message::HoverEntered)
        .on_exit(Message::HoverExited)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_advance_wraps_back_to_start() {
        let mut state = State::new(3);
        for _ in 0..3 {
            state.update(Message::AutoAdvance);
        }
        assert_eq!(state.current(), 0);
        assert!(state.is_auto_playing());
    }

    #[test]
    fn next_n_times_returns_to_slide_zero() {
        let mut state = State::new(4);
        for _ in 0..4 {
            state.update(Message::Next);
        }
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut state = State::new(4);
        state.update(Message::Previous);
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn manual_navigation_disables_auto_play() {
        let mut state = State::new(3);
        assert!(state.is_auto_playing());
        state.update(Message::Next);
        assert!(!state.is_auto_playing());

        let mut state = State::new(3);
        state.update(Message::Previous);
        assert!(!state.is_auto_playing());

        let mut state = State::new(3);
        state.update(Message::GoTo(2));
        assert!(!state.is_auto_playing());
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn hover_pauses_and_resume_restores_auto_advance() {
        let mut state = State::new(3);
        assert!(state.should_auto_advance());

        state.update(Message::HoverEntered);
        assert!(!state.should_auto_advance());
        // Tick arriving while hovered must not advance.
        state.update(Message::AutoAdvance);
        assert_eq!(state.current(), 0);

        state.update(Message::HoverExited);
        assert!(state.should_auto_advance());
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut state = State::new(3);
        state.update(Message::GoTo(7));
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn empty_carousel_never_advances() {
        let mut state = State::new(0);
        state.update(Message::Next);
        state.update(Message::AutoAdvance);
        assert_eq!(state.current(), 0);
        assert!(!state.should_auto_advance());
    }

    #[test]
    fn single_slide_does_not_keep_timer_alive() {
        let state = State::new(1);
        assert!(!state.should_auto_advance());
    }
}
