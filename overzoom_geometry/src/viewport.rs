// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::overscroll::BounceOffsets;

/// Headless model of a pannable, zoomable viewport (a scroll view).
///
/// The viewport shows a window of size `frame.size()` onto content of size
/// [`content_size`](Self::content_size). The content is positioned by a
/// content offset: the content point shown at the viewport's top-left corner.
/// It can be used to:
/// - Predict how a real scroll view will clamp a content offset.
/// - Measure overscroll (bounce) past each content edge.
/// - Zoom about an anchor point, keeping the content under it fixed.
///
/// Offsets are not clamped while scrolling, so overscroll can be observed;
/// [`settle`](Self::settle) snaps back into bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct PannableViewport {
    frame: Rect,
    content_base_size: Size,
    content_size: Size,
    content_offset: Point,
    zoom_scale: f64,
    min_zoom: f64,
    max_zoom: f64,
    insets: Insets,
}

impl Default for PannableViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl PannableViewport {
    /// Creates an empty viewport.
    ///
    /// - Frame, content and offset are zero.
    /// - Zoom scale and both zoom limits are `1.0`.
    /// - Insets are zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            content_base_size: Size::ZERO,
            content_size: Size::ZERO,
            content_offset: Point::ZERO,
            zoom_scale: 1.0,
            min_zoom: 1.0,
            max_zoom: 1.0,
            insets: Insets::ZERO,
        }
    }

    /// Frame of the viewport in its parent (container) space.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Sets the frame of the viewport; the content offset is left untouched.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Size of the unzoomed content (for an image, its natural size).
    #[must_use]
    pub fn content_base_size(&self) -> Size {
        self.content_base_size
    }

    /// Sets the unzoomed content size and recomputes the content size.
    pub fn set_content_base_size(&mut self, size: Size) {
        self.content_base_size = size;
        self.content_size = size * self.zoom_scale;
    }

    /// Current content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Overrides the content size without changing the zoom scale.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// Current content offset.
    #[must_use]
    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    /// Sets the content offset as-is, without clamping.
    pub fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = offset;
    }

    /// Safe-area style insets around the content.
    #[must_use]
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Sets the content insets (`x0`/`y0` leading, `x1`/`y1` trailing).
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    /// Current zoom scale.
    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    /// Minimum zoom scale.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Maximum zoom scale.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the minimum and maximum zoom scales.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom scale is clamped into the new range. Non-finite limits
    /// are ignored and the previous limits kept.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        if !min_zoom.is_finite() || !max_zoom.is_finite() {
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom_scale(self.zoom_scale);
    }

    /// Sets the zoom scale, clamped into the zoom limits, and resizes the content.
    ///
    /// A non-finite `zoom` is ignored.
    pub fn set_zoom_scale(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        self.zoom_scale = clamped;
        self.content_size = self.content_base_size * clamped;
    }

    /// Zooms to `zoom` (clamped) keeping the content under `anchor` fixed.
    ///
    /// `anchor` is expressed relative to the viewport's top-left corner.
    pub fn zoom_about(&mut self, anchor: Point, zoom: f64) {
        let old_zoom = self.zoom_scale;
        if old_zoom <= 0.0 {
            return;
        }
        let anchor = anchor.to_vec2();
        let content_point = (self.content_offset.to_vec2() + anchor) / old_zoom;
        self.set_zoom_scale(zoom);
        let offset = content_point * self.zoom_scale - anchor;
        self.content_offset = offset.to_point();
    }

    /// Scrolls by `delta` without clamping, allowing overscroll.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.content_offset += delta;
    }

    /// Snaps the content offset back into its valid range.
    pub fn settle(&mut self) {
        self.content_offset = self.corrected(self.content_offset);
    }

    /// Frame of the content in the viewport's parent space.
    #[must_use]
    pub fn content_frame(&self) -> Rect {
        Rect::from_origin_size(self.frame.origin() - self.content_offset.to_vec2(), self.content_size)
    }

    /// How much `offset` would be pulled back if applied to this viewport.
    ///
    /// Each axis is independent. An offset below the leading bound yields that
    /// (negative) excess; one past the trailing bound yields the positive
    /// excess; anything in between yields zero.
    #[must_use]
    pub fn content_offset_correction(&self, offset: Point) -> Vec2 {
        let (min, max) = self.offset_bounds();
        Vec2::new(
            axis_correction(offset.x, min.x, max.x),
            axis_correction(offset.y, min.y, max.y),
        )
    }

    /// The offset a real scroll view would end up at after clamping `offset`.
    #[must_use]
    pub fn corrected(&self, offset: Point) -> Point {
        offset - self.content_offset_correction(offset)
    }

    /// Overscroll of the current content offset past each edge.
    #[must_use]
    pub fn bounce_offsets(&self) -> BounceOffsets {
        let (min, max) = self.offset_bounds();
        let offset = self.content_offset;
        BounceOffsets {
            top: (min.y - offset.y).max(0.0),
            left: (min.x - offset.x).max(0.0),
            bottom: (offset.y - max.y).max(0.0),
            right: (offset.x - max.x).max(0.0),
        }
    }

    /// Inclusive range of valid content offsets.
    ///
    /// When the content is smaller than the viewport the range collapses to
    /// its leading bound.
    fn offset_bounds(&self) -> (Point, Point) {
        let frame_size = self.frame.size();
        let min = Point::new(-self.insets.x0, -self.insets.y0);
        let max = Point::new(
            (self.content_size.width - frame_size.width + self.insets.x1).max(min.x),
            (self.content_size.height - frame_size.height + self.insets.y1).max(min.y),
        );
        (min, max)
    }
}

fn axis_correction(offset: f64, min: f64, max: f64) -> f64 {
    if offset < min {
        offset - min
    } else if offset > max {
        offset - max
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point, Rect, Size, Vec2};

    use super::PannableViewport;

    fn viewport(content: Size, frame: Rect) -> PannableViewport {
        let mut vp = PannableViewport::new();
        vp.set_content_base_size(content);
        vp.set_frame(frame);
        vp
    }

    #[test]
    fn in_range_offset_needs_no_correction() {
        let vp = viewport(Size::new(1_000.0, 800.0), Rect::new(0.0, 0.0, 400.0, 300.0));
        let offset = Point::new(100.0, 200.0);
        assert_eq!(vp.content_offset_correction(offset), Vec2::ZERO);
        assert_eq!(vp.corrected(offset), offset);
    }

    #[test]
    fn negative_offset_correction_is_the_negative_amount() {
        let vp = viewport(Size::new(1_000.0, 800.0), Rect::new(0.0, 0.0, 400.0, 300.0));
        let correction = vp.content_offset_correction(Point::new(-30.0, -5.0));
        assert_eq!(correction, Vec2::new(-30.0, -5.0));
        assert_eq!(vp.corrected(Point::new(-30.0, -5.0)), Point::ZERO);
    }

    #[test]
    fn overflowing_offset_correction_is_the_excess() {
        let vp = viewport(Size::new(1_000.0, 800.0), Rect::new(0.0, 0.0, 400.0, 300.0));
        let correction = vp.content_offset_correction(Point::new(650.0, 520.0));
        assert_eq!(correction, Vec2::new(50.0, 20.0));
        assert_eq!(vp.corrected(Point::new(650.0, 520.0)), Point::new(600.0, 500.0));
    }

    #[test]
    fn corrected_offset_is_always_in_bounds() {
        let mut vp = viewport(Size::new(900.0, 700.0), Rect::new(10.0, 10.0, 310.0, 410.0));
        vp.set_insets(Insets::new(0.0, 20.0, 0.0, 34.0));
        let max_x = 900.0 - 300.0;
        let max_y = 700.0 - 400.0 + 34.0;
        for x in [-1e6, -500.0, -0.5, 0.0, 12.0, 599.9, 600.0, 601.0, 1e6] {
            for y in [-1e6, -21.0, -20.0, 0.0, 300.0, 334.0, 335.0, 1e6] {
                let c = vp.corrected(Point::new(x, y));
                assert!((0.0..=max_x).contains(&c.x), "x {x} corrected to {}", c.x);
                assert!((-20.0..=max_y).contains(&c.y), "y {y} corrected to {}", c.y);
            }
        }
    }

    #[test]
    fn content_smaller_than_frame_collapses_to_leading_bound() {
        let vp = viewport(Size::new(100.0, 100.0), Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(vp.corrected(Point::new(50.0, 80.0)), Point::ZERO);
        assert_eq!(vp.corrected(Point::new(-50.0, -80.0)), Point::ZERO);
    }

    #[test]
    fn non_finite_zoom_limits_are_ignored() {
        let mut vp = viewport(Size::new(100.0, 100.0), Rect::new(0.0, 0.0, 400.0, 300.0));
        vp.set_zoom_limits(0.5, 2.0);
        vp.set_zoom_scale(1.5);

        vp.set_zoom_limits(2.0, f64::NAN);
        vp.set_zoom_limits(f64::NAN, 0.4);
        vp.set_zoom_limits(0.1, f64::INFINITY);
        assert_eq!((vp.min_zoom(), vp.max_zoom()), (0.5, 2.0));

        vp.set_zoom_scale(f64::NAN);
        assert_eq!(vp.zoom_scale(), 1.5);
        assert_eq!(vp.content_size(), Size::new(150.0, 150.0));
    }

    #[test]
    fn bounce_offsets_report_overscroll_per_edge() {
        let mut vp = viewport(Size::new(1_000.0, 800.0), Rect::new(0.0, 0.0, 400.0, 300.0));
        vp.set_content_offset(Point::new(-12.0, 540.0));
        let bounce = vp.bounce_offsets();
        assert_eq!(bounce.left, 12.0);
        assert_eq!(bounce.bottom, 40.0);
        assert_eq!(bounce.top, 0.0);
        assert_eq!(bounce.right, 0.0);

        vp.settle();
        assert!(vp.bounce_offsets().is_zero());
        assert_eq!(vp.content_offset(), Point::new(0.0, 500.0));
    }

    #[test]
    fn zoom_is_clamped_and_resizes_content() {
        let mut vp = viewport(Size::new(200.0, 100.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_zoom_limits(2.0, 0.5);
        assert_eq!(vp.min_zoom(), 0.5);
        assert_eq!(vp.max_zoom(), 2.0);

        vp.set_zoom_scale(4.0);
        assert_eq!(vp.zoom_scale(), 2.0);
        assert_eq!(vp.content_size(), Size::new(400.0, 200.0));

        vp.set_zoom_scale(0.1);
        assert_eq!(vp.zoom_scale(), 0.5);
        assert_eq!(vp.content_size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut vp = viewport(Size::new(400.0, 400.0), Rect::new(0.0, 0.0, 200.0, 200.0));
        vp.set_zoom_limits(0.5, 4.0);
        vp.set_zoom_scale(1.0);
        vp.set_content_offset(Point::new(50.0, 50.0));

        let anchor = Point::new(100.0, 100.0);
        let content_before = (vp.content_offset().to_vec2() + anchor.to_vec2()) / vp.zoom_scale();
        vp.zoom_about(anchor, 2.0);
        let content_after = (vp.content_offset().to_vec2() + anchor.to_vec2()) / vp.zoom_scale();

        assert!((content_after - content_before).hypot() < 1e-9);
        assert_eq!(vp.content_offset(), Point::new(200.0, 200.0));
    }

    #[test]
    fn content_frame_follows_offset() {
        let mut vp = viewport(Size::new(400.0, 300.0), Rect::new(20.0, 40.0, 220.0, 240.0));
        vp.set_content_offset(Point::new(30.0, 10.0));
        assert_eq!(vp.content_frame(), Rect::new(-10.0, 30.0, 390.0, 330.0));
        vp.scroll_by(Vec2::new(-30.0, -10.0));
        assert_eq!(vp.content_frame().origin(), Point::new(20.0, 40.0));
    }
}
