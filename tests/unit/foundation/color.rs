use super::*;

#[test]
fn from_components_accepts_rgb_and_rgba() {
    let rgb = Rgba::from_components(&[10, 20, 30]).unwrap();
    assert_eq!(rgb, Rgba::rgba(10, 20, 30, 255));

    let rgba = Rgba::from_components(&[10, 20, 30, 40]).unwrap();
    assert_eq!(rgba, Rgba::rgba(10, 20, 30, 40));
}

#[test]
fn from_components_accepts_boundary_values() {
    assert!(Rgba::from_components(&[0, 0, 0, 0]).is_ok());
    assert!(Rgba::from_components(&[255, 255, 255, 255]).is_ok());
}

#[test]
fn from_components_rejects_bad_arity() {
    assert!(Rgba::from_components(&[]).is_err());
    assert!(Rgba::from_components(&[1, 2]).is_err());
    assert!(Rgba::from_components(&[1, 2, 3, 4, 5]).is_err());
}

#[test]
fn from_components_rejects_out_of_range() {
    assert!(Rgba::from_components(&[-1, 0, 0]).is_err());
    assert!(Rgba::from_components(&[0, 256, 0]).is_err());
    assert!(Rgba::from_components(&[0, 0, 0, 999]).is_err());
}

#[test]
fn hex_is_fixed_width_rrggbbaa() {
    assert_eq!(Rgba::WHITE.to_hex(), "0xffffffff");
    assert_eq!(Rgba::BLACK.to_hex(), "0x000000ff");
    assert_eq!(Rgba::TRANSPARENT.to_hex(), "0x00000000");
    assert_eq!(Rgba::rgba(1, 2, 3, 4).to_hex(), "0x01020304");
}

#[test]
fn with_alpha_replaces_only_alpha() {
    let c = Rgba::rgb(9, 8, 7).with_alpha(0);
    assert_eq!(c, Rgba::rgba(9, 8, 7, 0));
    assert!(!c.is_opaque());
    assert!(Rgba::WHITE.is_opaque());
}

#[test]
fn contrasting_flips_around_mid_luminance() {
    assert_eq!(Rgba::WHITE.contrasting(), Rgba::BLACK);
    assert_eq!(Rgba::BLACK.contrasting(), Rgba::WHITE);
    // Hot pink is dark enough to take white on top.
    assert_eq!(Rgba::rgb(255, 20, 147).contrasting(), Rgba::WHITE);
    assert_eq!(Rgba::rgb(255, 255, 0).contrasting(), Rgba::BLACK);
}

#[test]
fn serde_round_trips() {
    let c = Rgba::rgba(1, 2, 3, 4);
    let json = serde_json::to_string(&c).unwrap();
    let back: Rgba = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
