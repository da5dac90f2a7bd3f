// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors (ember brand scale + grayscale)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//!
//! Tokens are designed to be consistent; keep the ratios intact when
//! changing them (e.g. `MD = XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.22, 0.26);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);

    // Brand colors (ember scale)
    pub const EMBER_400: Color = Color::from_rgb(1.0, 0.62, 0.31);
    pub const EMBER_500: Color = Color::from_rgb(0.95, 0.48, 0.16);
    pub const EMBER_600: Color = Color::from_rgb(0.85, 0.38, 0.1);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    // Presence
    pub const ONLINE: Color = SUCCESS_500;
    pub const OFFLINE: Color = GRAY_400;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_STRONG: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of the tab bar at the top of every screen.
    pub const TAB_BAR_HEIGHT: f32 = 48.0;
    /// Fixed width reserved for the chat panel when a campfire is selected.
    pub const CHAT_PANEL_WIDTH: f32 = 320.0;
    /// Content card dimensions in catalog rows.
    pub const CARD_WIDTH: f32 = 180.0;
    pub const CARD_HEIGHT: f32 = 101.0;
    /// Hero carousel height on the Home tab.
    pub const HERO_HEIGHT: f32 = 280.0;
    /// Popover dimensions.
    pub const POPOVER_WIDTH: f32 = 240.0;
    pub const POPOVER_HEIGHT: f32 = 120.0;
    /// Waveform bar width in the voice visualizer.
    pub const WAVEFORM_BAR_WIDTH: f32 = 4.0;
    pub const WAVEFORM_MAX_BAR_HEIGHT: f32 = 40.0;
    /// Presence dot diameter.
    pub const PRESENCE_DOT: f32 = 10.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTITLE: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const HERO: f32 = 32.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}
