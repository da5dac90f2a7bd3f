// SPDX-License-Identifier: MPL-2.0
//! Catalog row rendering with hover-label popovers.
//!
//! Cards have fixed dimensions, so the trigger rectangle for the hover
//! popover is derived from the row/column indices and the layout
//! constants rather than from widget introspection.

use crate::catalog::ContentRow;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, mouse_area, Column, Row, Space, Text};
use iced::{Element, Length, Point, Rectangle, Size};

/// Identifies the card currently under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoveredCard {
    pub row_index: usize,
    pub item_index: usize,
    pub item_id: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    HoverEntered(HoveredCard),
    HoverExited,
}

/// Vertical space taken by a row heading plus its padding.
const ROW_HEADER_HEIGHT: f32 = 36.0;

/// Full vertical extent of one row block (heading + cards + gap).
pub fn row_block_height() -> f32 {
    ROW_HEADER_HEIGHT + sizing::CARD_HEIGHT + spacing::LG
}

/// Approximate on-screen rectangle of a card, from layout constants.
///
/// `origin_y` is where the first row block starts (below the hero).
pub fn card_rect(row_index: usize, item_index: usize, origin_y: f32) -> Rectangle {
    let x = spacing::MD + item_index as f32 * (sizing::CARD_WIDTH + spacing::SM);
    let y = origin_y + row_index as f32 * row_block_height() + ROW_HEADER_HEIGHT;
    Rectangle::new(
        Point::new(x, y),
        Size::new(sizing::CARD_WIDTH, sizing::CARD_HEIGHT),
    )
}

/// Renders one catalog row.
pub fn view<'a>(row_index: usize, row: &'a ContentRow, i18n: &I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr(&row.title_key)).size(typography::SUBTITLE);

    let mut cards = Row::new().spacing(spacing::SM);
    for (item_index, item) in row.items.iter().enumerate() {
        let mut card_body = Column::new()
            .push(Space::new().width(Length::Fill).height(Length::Fill))
            .push(Text::new(item.title.clone()).size(typography::CAPTION));

        if let Some(badge) = item.badge {
            card_body = card_body.push(
                container(Text::new(i18n.tr(badge.i18n_key())).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::badge),
            );
        }

        let card = container(card_body)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_HEIGHT))
            .padding(spacing::XS)
            .style(styles::container::panel);

        let hovered = HoveredCard {
            row_index,
            item_index,
            item_id: item.id.clone(),
        };

        cards = cards.push(
            mouse_area(card)
                .on_enter(Message::HoverEntered(hovered))
                .on_exit(Message::HoverExited),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(cards)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_catalog;

    #[test]
    fn card_rect_steps_by_card_width_plus_gap() {
        let first = card_rect(0, 0, 100.0);
        let second = card_rect(0, 1, 100.0);
        assert_eq!(second.x - first.x, sizing::CARD_WIDTH + spacing::SM);
        assert_eq!(first.y, second.y);
    }

    #[test]
    fn card_rect_steps_rows_by_block_height() {
        let first = card_rect(0, 0, 100.0);
        let below = card_rect(1, 0, 100.0);
        assert_eq!(below.y - first.y, row_block_height());
    }

    #[test]
    fn view_renders_each_seeded_row() {
        let catalog = demo_catalog();
        let i18n = I18n::default();
        for (index, row) in catalog.rows().iter().enumerate() {
            let _element = view(index, row, &i18n);
        }
    }
}
