use super::*;

#[test]
fn every_named_preset_exists_and_validates() {
    for name in PRESET_NAMES {
        let style = by_name(name).unwrap_or_else(|| panic!("missing preset {name}"));
        style
            .validate()
            .unwrap_or_else(|err| panic!("preset {name} invalid: {err}"));
    }
}

#[test]
fn unknown_names_yield_none() {
    assert!(by_name("does_not_exist").is_none());
    assert!(by_name("").is_none());
    assert!(by_name("Default").is_none());
}

#[test]
fn factories_are_pure() {
    let a = tiktok_neon();
    let b = tiktok_neon();
    assert_eq!(a, b);

    let mut c = cinema();
    c.font_size = 99;
    assert_ne!(c, cinema());
}

#[test]
fn default_preset_is_the_default_style() {
    assert_eq!(default(), StyleSpec::default());
}

#[test]
fn effect_presets_carry_their_effects() {
    assert!(matches!(
        dramatic_shadow().effect,
        EffectKind::Shadow3d { layers: 4, .. }
    ));
    assert!(matches!(tiktok_neon().effect, EffectKind::Neon { .. }));
    assert!(matches!(tiktok_dance().effect, EffectKind::Glow { .. }));
}

#[test]
fn boxed_presets_enable_their_background() {
    for name in ["top_news", "youtube", "tiktok_story", "tiktok_luxury"] {
        let style = by_name(name).unwrap();
        assert!(style.background.enabled, "{name} should draw a box");
        assert!(style.background.opacity > 0.0);
    }
}
