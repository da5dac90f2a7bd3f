// SPDX-License-Identifier: MPL-2.0
//! Home tab: hero carousel over the catalog rows.

use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::content_row::{self, HoveredCard};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::hero_carousel;
use crate::ui::popover;
use crate::ui::styles;
use iced::widget::{container, scrollable, Column, Stack, Text};
use iced::{Element, Length, Padding, Size};

/// Context required to render the Home tab.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    /// Current window size, for popover clamping.
    pub viewport: Size,
}

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(hero_carousel::Message),
    Row(content_row::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    carousel: hero_carousel::State,
    hovered: Option<HoveredCard>,
}

impl State {
    pub fn new(hero_len: usize) -> Self {
        Self {
            carousel: hero_carousel::State::new(hero_len),
            hovered: None,
        }
    }

    pub fn carousel(&self) -> &hero_carousel::State {
        &self.carousel
    }

    /// Applies the persisted autoplay preference to the carousel.
    pub fn set_carousel_autoplay(&mut self, on: bool) {
        self.carousel.set_auto_playing(on);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Carousel(msg) => self.carousel.update(msg),
            Message::Row(content_row::Message::HoverEntered(card)) => {
                self.hovered = Some(card);
            }
            Message::Row(content_row::Message::HoverExited) => {
                self.hovered = None;
            }
        }
    }
}

/// Where the first content row starts, below the hero block.
fn rows_origin_y() -> f32 {
    sizing::HERO_HEIGHT + spacing::LG
}

/// Renders the Home tab.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let hero = hero_carousel::view(&state.carousel, env.catalog.hero_slides()).map(Message::Carousel);

    let mut rows = Column::new().spacing(spacing::LG);
    for (index, row) in env.catalog.rows().iter().enumerate() {
        rows = rows.push(content_row::view(index, row, env.i18n).map(Message::Row));
    }

    let content = scrollable(
        Column::new()
            .spacing(spacing::LG)
            .push(hero)
            .push(rows)
            .padding(spacing::MD),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = Stack::new().push(content);

    if let Some(popup) = hovered_popover(state, &env) {
        layers = layers.push(popup);
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

/// Builds the hover-label popover for the hovered card, if any.
fn hovered_popover<'a>(state: &'a State, env: &ViewEnv<'a>) -> Option<Element<'a, Message>> {
    let hovered = state.hovered.as_ref()?;
    let row = env.catalog.rows().get(hovered.row_index)?;
    let item = row.item(&hovered.item_id)?;

    let trigger = content_row::card_rect(hovered.row_index, hovered.item_index, rows_origin_y());
    let popup_size = Size::new(sizing::POPOVER_WIDTH, sizing::POPOVER_HEIGHT);
    let position = popover::anchored_position(trigger, popup_size, env.viewport);

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(item.title.clone()).size(typography::SUBTITLE));
    let meta = item.meta_line();
    if !meta.is_empty() {
        body = body.push(Text::new(meta).size(typography::CAPTION));
    }
    if let Some(rating) = item.rating {
        body = body.push(Text::new(format!("★ {:.1}", rating)).size(typography::CAPTION));
    }

    let popup = container(body)
        .width(Length::Fixed(sizing::POPOVER_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::popover);

    let positioned = container(popup).padding(Padding {
        top: position.y,
        left: position.x,
        right: 0.0,
        bottom: 0.0,
    });

    Some(positioned.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_catalog;

    fn env<'a>(i18n: &'a I18n, catalog: &'a Catalog) -> ViewEnv<'a> {
        ViewEnv {
            i18n,
            catalog,
            viewport: Size::new(1280.0, 800.0),
        }
    }

    #[test]
    fn hover_enter_and_exit_track_the_card() {
        let catalog = demo_catalog();
        let mut state = State::new(catalog.hero_slides().len());

        let card = HoveredCard {
            row_index: 0,
            item_index: 1,
            item_id: catalog.rows()[0].items[1].id.clone(),
        };
        state.update(Message::Row(content_row::Message::HoverEntered(card.clone())));
        assert_eq!(state.hovered.as_ref(), Some(&card));

        state.update(Message::Row(content_row::Message::HoverExited));
        assert!(state.hovered.is_none());
    }

    #[test]
    fn carousel_messages_reach_the_carousel() {
        let catalog = demo_catalog();
        let mut state = State::new(catalog.hero_slides().len());
        state.update(Message::Carousel(hero_carousel::Message::Next));
        assert_eq!(state.carousel().current(), 1);
        assert!(!state.carousel().is_auto_playing());
    }

    #[test]
    fn view_renders_with_and_without_hover() {
        let catalog = demo_catalog();
        let i18n = I18n::default();
        let mut state = State::new(catalog.hero_slides().len());
        let _element = view(&state, env(&i18n, &catalog));
        drop(_element);

        state.update(Message::Row(content_row::Message::HoverEntered(HoveredCard {
            row_index: 0,
            item_index: 0,
            item_id: catalog.rows()[0].items[0].id.clone(),
        })));
        let _element = view(&state, env(&i18n, &catalog));
    }

    #[test]
    fn stale_hover_for_unknown_item_renders_no_popover() {
        let catalog = demo_catalog();
        let i18n = I18n::default();
        let mut state = State::new(catalog.hero_slides().len());
        state.update(Message::Row(content_row::Message::HoverEntered(HoveredCard {
            row_index: 0,
            item_index: 0,
            item_id: "gone".into(),
        })));
        let e = env(&i18n, &catalog);
        assert!(hovered_popover(&state, &e).is_none());
    }
}
