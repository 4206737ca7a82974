use super::*;

#[test]
fn theme_default_is_light() {
    let state = ThemeState::default();
    assert!(!state.dark);
    assert_eq!(state.palette(), &LIGHT);
}

#[test]
fn dark_mode_selects_dark_palette() {
    let state = ThemeState { dark: true };
    assert_eq!(state.palette(), &DARK);
}

#[test]
fn palettes_differ() {
    assert_ne!(LIGHT, DARK);
    assert_eq!(LIGHT.bg, "#ffffff");
    assert_eq!(DARK.bg, "#121212");
}
