// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Set of gesture recognizers attached to a surface.
    ///
    /// The overlay logic tells the host which recognizers a source surface
    /// should carry; the host owns the real recognizers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Gestures: u8 {
        /// Two-finger pinch.
        const PINCH      = 0b0000_0001;
        /// One-finger pan.
        const PAN        = 0b0000_0010;
        /// Single tap.
        const TAP        = 0b0000_0100;
        /// Double tap.
        const DOUBLE_TAP = 0b0000_1000;
        /// Long press.
        const LONG_PRESS = 0b0001_0000;
    }
}

impl Gestures {
    /// The recognizers a zoomable source surface carries.
    pub const SOURCE: Self = Self::PINCH
        .union(Self::PAN)
        .union(Self::TAP)
        .union(Self::DOUBLE_TAP);
}
