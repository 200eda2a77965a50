// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for loading `Settings` from TOML.

#![cfg(feature = "serde")]

use overzoom::{Action, Edge, Settings, TapCount, TapTarget};

#[test]
fn partial_toml_fills_in_defaults() {
    let settings: Settings = toml::from_str(
        r#"
        zoom_canceling_threshold = 1.2
        maximum_zoom_scale = 4.0
        should_display_background = true
        action_on_double_tap_image = "zoom_in"
        action_on_scroll_bounce_top = "dismiss_overlay"
        "#,
    )
    .expect("settings parse");

    assert_eq!(settings.zoom_canceling_threshold, 1.2);
    assert_eq!(settings.maximum_zoom_scale, 4.0);
    assert!(settings.should_display_background);
    assert_eq!(settings.minimum_zoom_scale, None);
    assert_eq!(
        settings.action_for_tap(TapTarget::Source, TapCount::Double),
        Action::ZoomIn
    );
    assert_eq!(settings.action_on_scroll_bounce(Edge::Top), Action::DismissOverlay);
    assert_eq!(settings.action_on_scroll_bounce(Edge::Bottom), Action::None);
    assert_eq!(
        settings.primary_background_color_threshold,
        Settings::default().primary_background_color_threshold
    );
    assert!(settings.validate().is_ok());
}

#[test]
fn explicit_minimum_round_trips() {
    let settings = Settings::background_enabled().with_minimum_zoom_scale(Some(0.25));
    let text = toml::to_string(&settings).expect("settings serialize");
    let back: Settings = toml::from_str(&text).expect("settings parse");
    assert_eq!(back.minimum_zoom_scale, Some(0.25));
    assert!(back.should_display_background);
}

#[test]
fn unknown_action_is_rejected() {
    let result = toml::from_str::<Settings>(r#"action_on_tap_overlay = "spin""#);
    assert!(result.is_err());
}

#[test]
fn nan_scale_parses_but_fails_validation() {
    let settings: Settings = toml::from_str("maximum_zoom_scale = nan").expect("settings parse");
    assert!(settings.maximum_zoom_scale.is_nan());
    assert!(settings.validate().is_err());
}
