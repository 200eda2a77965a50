// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// How an image is laid out inside the bounds of the surface displaying it.
///
/// Overlay surfaces copy the source surface's mode so the transition shows the
/// image exactly as the source did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Stretch the image to fill the bounds, ignoring aspect ratio.
    ScaleToFill,
    /// Fit the whole image inside the bounds, preserving aspect ratio, centered.
    #[default]
    ScaleAspectFit,
    /// Cover the bounds, preserving aspect ratio, centered (may overflow).
    ScaleAspectFill,
    /// Keep the natural size, centered.
    Center,
    /// Keep the natural size, aligned to the top-left corner.
    TopLeft,
}

impl ContentMode {
    /// Rectangle the image occupies when drawn into `bounds` with this mode.
    ///
    /// A zero-area image yields an empty rect at the bounds' center.
    #[must_use]
    pub fn image_rect(self, image: Size, bounds: Rect) -> Rect {
        if image.width <= 0.0 || image.height <= 0.0 {
            return Rect::from_center_size(bounds.center(), Size::ZERO);
        }
        let sx = bounds.width() / image.width;
        let sy = bounds.height() / image.height;
        match self {
            Self::ScaleToFill => bounds,
            Self::ScaleAspectFit => Rect::from_center_size(bounds.center(), image * sx.min(sy)),
            Self::ScaleAspectFill => Rect::from_center_size(bounds.center(), image * sx.max(sy)),
            Self::Center => Rect::from_center_size(bounds.center(), image),
            Self::TopLeft => Rect::from_origin_size(Point::new(bounds.x0, bounds.y0), image),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::ContentMode;

    #[test]
    fn aspect_fit_letterboxes() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        let rect = ContentMode::ScaleAspectFit.image_rect(Size::new(400.0, 200.0), bounds);
        assert_eq!(rect, Rect::new(0.0, 50.0, 200.0, 150.0));
    }

    #[test]
    fn aspect_fill_overflows() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        let rect = ContentMode::ScaleAspectFill.image_rect(Size::new(400.0, 200.0), bounds);
        assert_eq!(rect, Rect::new(-100.0, 0.0, 300.0, 200.0));
    }

    #[test]
    fn natural_size_modes() {
        let bounds = Rect::new(10.0, 10.0, 110.0, 110.0);
        let image = Size::new(20.0, 40.0);
        assert_eq!(
            ContentMode::Center.image_rect(image, bounds),
            Rect::new(50.0, 40.0, 70.0, 80.0)
        );
        assert_eq!(
            ContentMode::TopLeft.image_rect(image, bounds),
            Rect::new(10.0, 10.0, 30.0, 50.0)
        );
        assert_eq!(ContentMode::ScaleToFill.image_rect(image, bounds), bounds);
    }
}
