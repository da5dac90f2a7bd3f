// SPDX-License-Identifier: MPL-2.0
//! Hover popover positioning.
//!
//! Popovers (account info, content-card labels) are anchored to the
//! bounding rectangle of their trigger. The computed position keeps the
//! popup inside the viewport horizontally and flips it above the trigger
//! when it would overflow the bottom edge.
//!
//! Visibility itself is a plain hover boolean owned by the component that
//! shows the popover; rapid mouse movement may thrash it, which is
//! accepted behavior here.

use iced::{Point, Rectangle, Size};

/// Minimum gap kept between the popup and the viewport edges.
pub const VIEWPORT_MARGIN: f32 = 10.0;

/// Vertical gap between the trigger and the popup.
pub const TRIGGER_GAP: f32 = 6.0;

/// Computes the top-left position for a popup anchored to `trigger`.
///
/// The popup is centered horizontally on the trigger, clamped so its
/// right edge stays at least [`VIEWPORT_MARGIN`] from the viewport edge.
/// Vertically it sits below the trigger, flipping above when the bottom
/// would overflow.
pub fn anchored_position(trigger: Rectangle, popup: Size, viewport: Size) -> Point {
    let desired_left = trigger.x + (trigger.width - popup.width) / 2.0;
    let max_left = (viewport.width - popup.width - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let left = desired_left.clamp(VIEWPORT_MARGIN, max_left);

    let below = trigger.y + trigger.height + TRIGGER_GAP;
    let top = if below + popup.height > viewport.height - VIEWPORT_MARGIN {
        trigger.y - popup.height - TRIGGER_GAP
    } else {
        below
    };

    Point::new(left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POPUP: Size = Size::new(240.0, 120.0);
    const VIEWPORT: Size = Size::new(1000.0, 700.0);

    #[test]
    fn centered_trigger_centers_popup() {
        let trigger = Rectangle::new(Point::new(480.0, 100.0), Size::new(40.0, 30.0));
        let pos = anchored_position(trigger, POPUP, VIEWPORT);
        assert_eq!(pos.x, 480.0 + (40.0 - 240.0) / 2.0);
        assert_eq!(pos.y, 100.0 + 30.0 + TRIGGER_GAP);
    }

    #[test]
    fn popup_never_overflows_right_edge() {
        let trigger = Rectangle::new(Point::new(960.0, 100.0), Size::new(40.0, 30.0));
        let pos = anchored_position(trigger, POPUP, VIEWPORT);
        assert!(pos.x + POPUP.width <= VIEWPORT.width - VIEWPORT_MARGIN);
    }

    #[test]
    fn popup_never_overflows_left_edge() {
        let trigger = Rectangle::new(Point::new(0.0, 100.0), Size::new(40.0, 30.0));
        let pos = anchored_position(trigger, POPUP, VIEWPORT);
        assert!(pos.x >= VIEWPORT_MARGIN);
    }

    #[test]
    fn popup_flips_above_near_bottom_edge() {
        let trigger = Rectangle::new(Point::new(480.0, 650.0), Size::new(40.0, 30.0));
        let pos = anchored_position(trigger, POPUP, VIEWPORT);
        assert_eq!(pos.y, 650.0 - POPUP.height - TRIGGER_GAP);
        assert!(pos.y < trigger.y);
    }

    #[test]
    fn popup_stays_below_when_room_exists() {
        let trigger = Rectangle::new(Point::new(480.0, 50.0), Size::new(40.0, 30.0));
        let pos = anchored_position(trigger, POPUP, VIEWPORT);
        assert!(pos.y > trigger.y + trigger.height);
    }

    #[test]
    fn narrow_viewport_does_not_panic() {
        // Popup wider than the viewport: clamp degenerates to the margin.
        let trigger = Rectangle::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
        let pos = anchored_position(trigger, POPUP, Size::new(100.0, 700.0));
        assert_eq!(pos.x, VIEWPORT_MARGIN);
    }
}
