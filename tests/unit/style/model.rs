use super::*;
use crate::Rgba;

#[test]
fn default_style_matches_the_conventional_subtitle_look() {
    let style = StyleSpec::default();
    assert_eq!(style.anchor, Anchor::BottomCenter);
    assert_eq!(style.margin_x, 120);
    assert_eq!(style.margin_y, 50);
    assert_eq!(style.font_size, 24);
    assert_eq!(style.font_weight, FontWeight::Bold);
    assert_eq!(style.font_color, Rgba::WHITE);
    assert_eq!(style.outline_color, Rgba::BLACK);
    assert_eq!(style.outline_width, 2);
    assert_eq!(style.effect, EffectKind::Basic);
    assert!(style.time_window.is_none());
    assert!(!style.background.enabled);
    assert!(style.shadow.enabled);
}

#[test]
fn anchor_horizontal_components() {
    assert_eq!(Anchor::TopLeft.horizontal(), Some(Alignment::Left));
    assert_eq!(Anchor::Center.horizontal(), Some(Alignment::Center));
    assert_eq!(Anchor::BottomRight.horizontal(), Some(Alignment::Right));
    assert_eq!(Anchor::Custom { x: 5, y: 5 }.horizontal(), None);
}

#[test]
fn effect_tags_are_stable() {
    assert_eq!(EffectKind::Basic.tag(), "basic");
    assert_eq!(
        EffectKind::Glow {
            color: Rgba::WHITE,
            intensity: 0.5,
            layers: 2
        }
        .tag(),
        "glow"
    );
    assert_eq!(
        EffectKind::Shadow3d {
            layers: 2,
            depth: 1.0,
            angle_degrees: 45.0
        }
        .tag(),
        "shadow3d"
    );
}

#[test]
fn transparent_fill_requirement_covers_layered_fill_effects() {
    assert!(!EffectKind::Basic.needs_transparent_fill());
    assert!(
        EffectKind::Glow {
            color: Rgba::WHITE,
            intensity: 0.5,
            layers: 2
        }
        .needs_transparent_fill()
    );
    assert!(
        EffectKind::Neon {
            base_color: Rgba::WHITE,
            layers: 2,
            intensity: 0.5
        }
        .needs_transparent_fill()
    );
    assert!(
        !EffectKind::Glitch {
            displacement: 3,
            color_shift: true
        }
        .needs_transparent_fill()
    );
}

#[test]
fn effect_serde_uses_internal_kind_tag() {
    let effect = EffectKind::DoubleOutline {
        inner_width: 2,
        inner_color: Rgba::BLACK,
        outer_width: 4,
        outer_color: Rgba::WHITE,
    };
    let json = serde_json::to_value(&effect).unwrap();
    assert_eq!(json["kind"], "double_outline");
    let back: EffectKind = serde_json::from_value(json).unwrap();
    assert_eq!(back, effect);
}

#[test]
fn glow_serde_fills_in_defaults() {
    let effect: EffectKind =
        serde_json::from_str(r#"{"kind":"glow","color":{"r":255,"g":0,"b":0,"a":255}}"#).unwrap();
    match effect {
        EffectKind::Glow {
            intensity, layers, ..
        } => {
            assert_eq!(intensity, 0.8);
            assert_eq!(layers, 3);
        }
        other => panic!("expected glow, got {other:?}"),
    }
}

#[test]
fn style_serde_round_trips() {
    let style = StyleSpec {
        anchor: Anchor::Custom { x: 12, y: -4 },
        time_window: Some(TimeWindow {
            start_sec: 1.5,
            end_sec: Some(4.0),
        }),
        effect: EffectKind::Glitch {
            displacement: 3,
            color_shift: true,
        },
        ..StyleSpec::default()
    };
    let json = serde_json::to_string(&style).unwrap();
    let back: StyleSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, style);
}
