// File: crates/boostlog-core/tests/palette.rs
// Purpose: Theme palettes, theme preference resolution, and CSS color tokens.

use boostlog_core::{palette, ColorParseError, Rgba, ThemeMode, ThemePreference};

#[test]
fn palettes_are_static_per_mode() {
    let light = palette(ThemeMode::Light);
    let dark = palette(ThemeMode::Dark);
    assert_eq!(light.title, Rgba::BLACK);
    assert_eq!(dark.title, Rgba::WHITE);
    assert_eq!(light.grid.to_string(), "rgba(75, 75, 75, 0.2)");
    assert_eq!(dark.grid.to_string(), "rgba(125, 125, 125, 0.2)");
    assert_eq!(dark.text.to_string(), "rgba(255, 255, 255, 0.7)");
    assert_eq!(light.zero_line, dark.zero_line);
    assert_eq!(ThemeMode::Dark.palette(), dark);
}

#[test]
fn preference_resolution_and_toggle() {
    assert_eq!(ThemePreference::System.resolve(true), ThemeMode::Dark);
    assert_eq!(ThemePreference::System.resolve(false), ThemeMode::Light);
    assert_eq!(ThemePreference::Light.resolve(true), ThemeMode::Light);
    assert_eq!("DARK".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert!("sepia".parse::<ThemePreference>().is_err());
    assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
}

#[test]
fn css_color_forms() {
    assert_eq!("rgb(99, 255, 161)".parse::<Rgba>(), Ok(Rgba::rgb(99, 255, 161)));
    assert_eq!("rgba(75, 192, 192, 0.5)".parse::<Rgba>(), Ok(Rgba::rgba(75, 192, 192, 128)));
    assert_eq!("rgb(75, 75, 75, 0.2)".parse::<Rgba>(), Ok(Rgba::rgba(75, 75, 75, 51)));
    assert_eq!("#0F172A".parse::<Rgba>(), Ok(Rgba::rgb(15, 23, 42)));
    assert_eq!("#ff000080".parse::<Rgba>(), Ok(Rgba::rgba(255, 0, 0, 128)));
}

#[test]
fn bad_colors_are_rejected() {
    assert!(matches!("teal".parse::<Rgba>(), Err(ColorParseError::Syntax(_))));
    assert!(matches!("rgb(1, 2)".parse::<Rgba>(), Err(ColorParseError::Syntax(_))));
    assert!(matches!("rgb(300, 0, 0)".parse::<Rgba>(), Err(ColorParseError::Component(_))));
    assert!(matches!("rgba(0, 0, 0, 1.5)".parse::<Rgba>(), Err(ColorParseError::Component(_))));
    assert!(matches!("#12345".parse::<Rgba>(), Err(ColorParseError::Syntax(_))));
}

#[test]
fn colors_serialize_as_css_strings() {
    let json = serde_json::to_string(&Rgba::rgb(1, 2, 3)).unwrap();
    assert_eq!(json, "\"rgb(1, 2, 3)\"");
    let back: Rgba = serde_json::from_str("\"rgba(1, 2, 3, 0.5)\"").unwrap();
    assert_eq!(back, Rgba::rgba(1, 2, 3, 128));
}
