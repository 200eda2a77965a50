// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame arithmetic shared by the overlay controller and its states.
//!
//! Frames are axis-aligned [`Rect`]s in some parent coordinate space. A frame
//! may carry a surface transform; such transforms are always interpreted
//! relative to the frame's center, which is how a toolkit view applies its
//! own transform.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Tolerance used by [`frames_match`].
pub const FRAME_EPSILON: f64 = 1e-6;

/// Returns `true` when two frames are equal up to [`FRAME_EPSILON`] on every edge.
///
/// Frames computed along different paths (for example a predicted viewport
/// frame and an animated overlay frame) rarely agree bit-for-bit.
#[must_use]
pub fn frames_match(a: Rect, b: Rect) -> bool {
    (a.x0 - b.x0).abs() <= FRAME_EPSILON
        && (a.y0 - b.y0).abs() <= FRAME_EPSILON
        && (a.x1 - b.x1).abs() <= FRAME_EPSILON
        && (a.y1 - b.y1).abs() <= FRAME_EPSILON
}

/// Offset between the origins of two frames, `frame.origin - other.origin`.
///
/// Adding this to a content offset keeps content visually fixed when a
/// scrolling frame moves from `other` to `frame`.
#[must_use]
pub fn origin_difference(frame: Rect, other: Rect) -> Vec2 {
    frame.origin() - other.origin()
}

/// Applies `transform` to `frame` about the frame's center and returns the
/// axis-aligned bounding box of the result.
#[must_use]
pub fn transformed_frame(frame: Rect, transform: Affine) -> Rect {
    if transform == Affine::IDENTITY {
        return frame;
    }
    let center = frame.center().to_vec2();
    let about_center = Affine::translate(center) * transform * Affine::translate(-center);
    bounding_box(about_center, frame)
}

/// Scales `frame` by `scale`, keeping the point `center_offset` (measured from
/// the frame's center) fixed.
///
/// With a zero offset this grows the frame symmetrically; with an offset it
/// grows away from a touch location, so the touched content stays under the
/// finger.
#[must_use]
pub fn scaled_about(frame: Rect, scale: f64, center_offset: Vec2) -> Rect {
    let anchor = frame.center() + center_offset;
    let scale_point = |p: Point| anchor + (p - anchor) * scale;
    Rect::from_points(scale_point(frame.origin()), scale_point(Point::new(frame.x1, frame.y1)))
}

/// Builds the surface transform used while a pinch/pan gesture drives a surface.
///
/// The surface is scaled by `scale` about `center_offset` (relative to the
/// surface center) and then moved by `translation`.
#[must_use]
pub fn gesture_transform(scale: f64, translation: Vec2, center_offset: Option<Vec2>) -> Affine {
    let scaling = match center_offset {
        Some(c) => Affine::translate(c) * Affine::scale(scale) * Affine::translate(-c),
        None => Affine::scale(scale),
    };
    Affine::translate(translation) * scaling
}

/// Frame that grows `frame` until it fills `container` along its tighter axis.
///
/// The scale is chosen from whichever dimension needs the smaller increase. The
/// result is pinned to the leading edge and keeps the frame's vertical origin;
/// callers reposition it through the viewport frame logic. Degenerate input
/// returns [`Rect::ZERO`].
#[must_use]
pub fn container_fitting_frame(frame: Rect, container: Size) -> Rect {
    let size = frame.size();
    if size.width <= 0.0 || size.height <= 0.0 {
        return Rect::ZERO;
    }
    let width_increase = container.width - size.width;
    let height_increase = container.height - size.height;
    let scale = if width_increase < height_increase {
        container.width / size.width
    } else {
        container.height / size.height
    };
    Rect::from_origin_size(Point::new(0.0, frame.y0), size * scale)
}

/// Computes the frame a pannable viewport should occupy inside its container.
///
/// - `initial` is the source surface's frame in container space at setup time.
/// - `container` is the container size.
/// - `content` is the viewport's current content size.
///
/// Horizontal growth is distributed in proportion to where the source sat
/// between the container edges (a source flush with the leading edge grows only
/// to the trailing side). Vertical growth is centered. Origins are clamped to be
/// non-negative and the size never exceeds the container.
#[must_use]
pub fn adjusted_viewport_frame(initial: Rect, container: Size, content: Size) -> Rect {
    let leading_space = initial.x0;
    let horizontal_space = container.width - initial.width();
    let leading_ratio = if horizontal_space != 0.0 {
        leading_space / horizontal_space
    } else {
        0.0
    };

    let width_growth = content.width - initial.width();
    let height_growth = content.height - initial.height();

    let origin = Point::new(
        (initial.x0 - width_growth * leading_ratio).max(0.0),
        (initial.y0 - height_growth / 2.0).max(0.0),
    );
    let size = Size::new(
        content.width.min(container.width),
        content.height.min(container.height),
    );
    Rect::from_origin_size(origin, size)
}

/// Axis-aligned bounds of `rect` after mapping its corners through `transform`.
pub(crate) fn bounding_box(transform: Affine, rect: Rect) -> Rect {
    let corners = [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x1, rect.y1),
    ];
    let mut min = transform * corners[0];
    let mut max = min;
    for corner in &corners[1..] {
        let q = transform * *corner;
        min.x = min.x.min(q.x);
        min.y = min.y.min(q.y);
        max.x = max.x.max(q.x);
        max.y = max.y.max(q.y);
    }
    Rect::from_points(min, max)
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size, Vec2};

    use super::*;

    #[test]
    fn identity_transform_keeps_frame() {
        let frame = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(transformed_frame(frame, Affine::IDENTITY), frame);
    }

    #[test]
    fn scale_transform_grows_about_center() {
        let frame = Rect::new(0.0, 0.0, 100.0, 50.0);
        let scaled = transformed_frame(frame, Affine::scale(2.0));
        assert!(frames_match(scaled, Rect::new(-50.0, -25.0, 150.0, 75.0)));
        assert_eq!(scaled.center(), frame.center());
    }

    #[test]
    fn scaled_about_keeps_anchor_fixed() {
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Anchor at the top-left corner.
        let scaled = scaled_about(frame, 3.0, Vec2::new(-50.0, -50.0));
        assert!(frames_match(scaled, Rect::new(0.0, 0.0, 300.0, 300.0)));
    }

    #[test]
    fn gesture_transform_matches_scaled_about() {
        let frame = Rect::new(40.0, 40.0, 140.0, 90.0);
        let offset = Vec2::new(20.0, -10.0);
        let via_transform = transformed_frame(frame, gesture_transform(1.5, Vec2::ZERO, Some(offset)));
        let via_helper = scaled_about(frame, 1.5, offset);
        assert!(frames_match(via_transform, via_helper));
    }

    #[test]
    fn gesture_transform_applies_translation_last() {
        let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
        let moved = transformed_frame(frame, gesture_transform(1.0, Vec2::new(5.0, 7.0), None));
        assert!(frames_match(moved, Rect::new(5.0, 7.0, 15.0, 17.0)));
    }

    #[test]
    fn origin_difference_is_frame_minus_other() {
        let a = Rect::new(30.0, 10.0, 40.0, 20.0);
        let b = Rect::new(10.0, 15.0, 90.0, 95.0);
        assert_eq!(origin_difference(a, b), Vec2::new(20.0, -5.0));
    }

    #[test]
    fn fitting_frame_uses_tighter_axis() {
        let container = Size::new(400.0, 800.0);
        // Width needs +300, height needs +700: width is tighter.
        let frame = Rect::new(50.0, 100.0, 150.0, 200.0);
        let fitted = container_fitting_frame(frame, container);
        assert_eq!(fitted.origin(), Point::new(0.0, 100.0));
        assert!((fitted.width() - 400.0).abs() < 1e-9);
        assert!((fitted.height() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn fitting_degenerate_frame_is_zero() {
        let fitted = container_fitting_frame(Rect::new(5.0, 5.0, 5.0, 9.0), Size::new(100.0, 100.0));
        assert_eq!(fitted, Rect::ZERO);
    }

    #[test]
    fn adjusted_frame_pins_leading_edge_when_flush_left() {
        let container = Size::new(400.0, 800.0);
        let initial = Rect::new(0.0, 300.0, 200.0, 400.0);
        for growth in [0.0, 50.0, 200.0, 1_000.0] {
            let content = Size::new(200.0 + growth, 100.0 + growth / 2.0);
            let frame = adjusted_viewport_frame(initial, container, content);
            assert_eq!(frame.x0, 0.0, "leading edge moved for growth {growth}");
        }
    }

    #[test]
    fn adjusted_frame_distributes_growth_proportionally() {
        let container = Size::new(400.0, 800.0);
        // 150 of 200 available horizontal points are leading: ratio 0.75.
        let initial = Rect::new(150.0, 300.0, 350.0, 400.0);
        let frame = adjusted_viewport_frame(initial, container, Size::new(300.0, 150.0));
        assert!((frame.x0 - 75.0).abs() < 1e-9);
        // Vertical growth of 50 is centered.
        assert!((frame.y0 - 275.0).abs() < 1e-9);
        assert_eq!(frame.size(), Size::new(300.0, 150.0));
    }

    #[test]
    fn adjusted_frame_clamps_to_container() {
        let container = Size::new(400.0, 800.0);
        let initial = Rect::new(100.0, 20.0, 300.0, 120.0);
        let frame = adjusted_viewport_frame(initial, container, Size::new(2_000.0, 1_000.0));
        assert!(frame.x0 >= 0.0);
        assert!(frame.y0 >= 0.0);
        assert_eq!(frame.size(), container);
    }

    #[test]
    fn full_width_source_uses_zero_ratio() {
        let container = Size::new(400.0, 800.0);
        let initial = Rect::new(0.0, 0.0, 400.0, 300.0);
        let frame = adjusted_viewport_frame(initial, container, Size::new(800.0, 600.0));
        assert_eq!(frame.x0, 0.0);
    }
}
