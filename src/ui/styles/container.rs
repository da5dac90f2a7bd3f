// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Generic panel surface (leaderboard, chat panel, settings sections).
///
/// Derived from the active Iced `Theme` background so panels stay
/// readable in both light and dark modes without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Floating popover surface (account info, card labels).
pub fn popover(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: scheme.surface_tertiary,
        },
        ..container::Style::default()
    }
}

/// Badge chip shown on content cards.
pub fn badge(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.brand_secondary)),
        text_color: Some(scheme.overlay_text),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Dimmed hero backdrop behind the carousel text.
pub fn hero_backdrop(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.overlay_background)),
        text_color: Some(scheme.overlay_text),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_surfaces_track_the_color_scheme() {
        for theme in [Theme::Dark, Theme::Light] {
            let scheme = ColorScheme::for_theme(&theme);
            assert_eq!(
                badge(&theme).background,
                Some(Background::Color(scheme.brand_secondary))
            );
            assert_eq!(
                hero_backdrop(&theme).background,
                Some(Background::Color(scheme.overlay_background))
            );
            assert_eq!(
                popover(&theme).background,
                Some(Background::Color(scheme.surface_secondary))
            );
        }
    }
}
