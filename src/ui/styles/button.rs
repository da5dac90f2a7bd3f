// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Brand surfaces come from the [`ColorScheme`] matching the active
//! theme; neutral rest states come from the Iced extended palette.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (sign in, switch account).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(scheme.brand_primary)),
            text_color: scheme.overlay_text,
            border: Border {
                color: scheme.brand_secondary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(scheme.brand_secondary)),
            text_color: scheme.overlay_text,
            border: Border {
                color: scheme.brand_primary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
        _ => button::Style::default(),
    }
}

/// Selected state in toggle groups (active tab, selected campfire).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    match status {
        button::Status::Active | button::Status::Pressed | button::Status::Hovered => {
            button::Style {
                background: Some(Background::Color(scheme.brand_secondary)),
                text_color: scheme.overlay_text,
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        }
        _ => {
            let palette = theme.extended_palette();
            button::Style {
                background: None,
                text_color: palette.background.weak.text,
                ..button::Style::default()
            }
        }
    }
}

/// Quiet button for list entries (chat threads, tab bar items at rest).
pub fn quiet(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            ..button::Style::default()
        },
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            ..button::Style::default()
        },
    }
}

/// Grayed out, non-interactive.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        button::Style {
            background: Some(Background::Color(scheme.surface_tertiary)),
            text_color: scheme.text_secondary,
            border: Border {
                color: scheme.surface_tertiary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        }
    }
}
