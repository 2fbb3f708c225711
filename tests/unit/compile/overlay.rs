use super::*;
use crate::{
    EffectKind, FontCatalog, Rgba,
    fonts::resolve::FontResolver,
    style::model::{Background, TimeWindow},
};
use std::sync::Arc;

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

fn compiler() -> OverlayCompiler {
    init_tracing();
    // Seeded catalog: resolution skips the system scan and lands on the
    // well-known-path or fallback tiers, which is enough for string checks.
    OverlayCompiler::with_fonts(FontResolver::with_catalog(Arc::new(
        FontCatalog::from_families(&["Arial", "WenQuanYi Zen Hei"]),
    )))
}

#[test]
fn default_style_compiles_to_one_drawtext_clause() {
    let out = compiler()
        .compile(&StyleSpec::default(), "hello", 1920, 1080, None)
        .unwrap();

    assert!(out.filter_graph.starts_with("[0:v]drawtext=text=hello:"));
    assert!(out.filter_graph.ends_with("[basic_0]"));
    assert_eq!(out.output_label, "basic_0");
    assert!(!out.filter_graph.contains(';'));
}

#[test]
fn compilation_is_deterministic() {
    let style = crate::presets::tiktok_neon();
    let a = compiler().compile(&style, "hello", 1080, 1920, None).unwrap();
    let b = compiler().compile(&style, "hello", 1080, 1920, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn labels_are_reused_across_calls_on_one_compiler() {
    let compiler = compiler();
    let a = compiler
        .compile(&StyleSpec::default(), "first", 1920, 1080, None)
        .unwrap();
    let b = compiler
        .compile(&StyleSpec::default(), "second", 1920, 1080, None)
        .unwrap();
    assert_eq!(a.output_label, b.output_label);
}

#[test]
fn empty_text_becomes_a_passthrough_clause() {
    let out = compiler()
        .compile(&StyleSpec::default(), "", 1920, 1080, None)
        .unwrap();
    assert_eq!(out.filter_graph, "[0:v]null[basic_0]");
    assert_eq!(out.output_label, "basic_0");
}

#[test]
fn zero_frame_dimensions_are_rejected() {
    let err = compiler()
        .compile(&StyleSpec::default(), "hello", 0, 1080, None)
        .unwrap_err();
    assert!(err.to_string().contains("frame size"));
    assert!(
        compiler()
            .compile(&StyleSpec::default(), "hello", 1920, 0, None)
            .is_err()
    );
}

#[test]
fn invalid_styles_fail_before_any_font_work() {
    let style = StyleSpec {
        font_size: 0,
        ..StyleSpec::default()
    };
    let err = compiler()
        .compile(&style, "hello", 1920, 1080, None)
        .unwrap_err();
    assert!(err.to_string().contains("font_size"));
}

#[test]
fn closed_time_windows_emit_between() {
    let style = StyleSpec {
        time_window: Some(TimeWindow {
            start_sec: 1.5,
            end_sec: Some(3.0),
        }),
        ..StyleSpec::default()
    };
    let out = compiler().compile(&style, "hello", 1920, 1080, None).unwrap();
    // Commas make the emitter single-quote the expression.
    assert!(out.filter_graph.contains("enable='between(t,1.5,3)'"));
}

#[test]
fn open_windows_close_with_the_frame_duration_when_known() {
    let style = StyleSpec {
        time_window: Some(TimeWindow {
            start_sec: 2.0,
            end_sec: None,
        }),
        ..StyleSpec::default()
    };
    let out = compiler()
        .compile(&style, "hello", 1920, 1080, Some(10.0))
        .unwrap();
    assert!(out.filter_graph.contains("enable='between(t,2,10)'"));

    let out = compiler().compile(&style, "hello", 1920, 1080, None).unwrap();
    assert!(out.filter_graph.contains("enable='gte(t,2)'"));
}

#[test]
fn whole_clip_windows_emit_no_enable_at_all() {
    let style = StyleSpec {
        time_window: Some(TimeWindow {
            start_sec: 0.0,
            end_sec: None,
        }),
        ..StyleSpec::default()
    };
    let out = compiler().compile(&style, "hello", 1920, 1080, None).unwrap();
    assert!(!out.filter_graph.contains("enable="));
}

#[test]
fn layered_effect_clauses_chain_through_semicolons() {
    let style = StyleSpec {
        effect: EffectKind::Glow {
            color: Rgba::rgb(255, 0, 128),
            intensity: 0.8,
            layers: 3,
        },
        background: Background {
            enabled: true,
            ..Background::default()
        },
        ..StyleSpec::default()
    };
    let out = compiler().compile(&style, "hello", 1080, 1920, None).unwrap();

    // Box pass + three halos + main pass.
    assert_eq!(out.filter_graph.matches("drawtext=").count(), 5);
    assert_eq!(out.filter_graph.matches(';').count(), 4);
    assert!(out.filter_graph.contains("[glow_0]drawtext="));
    assert_eq!(out.output_label, "glow_4");
}

#[test]
fn labeled_family_lists_still_resolve() {
    let style = StyleSpec {
        font_family: "[CN] WenQuanYi Zen Hei,Arial".to_string(),
        ..StyleSpec::default()
    };
    let out = compiler().compile(&style, "hello", 1920, 1080, None).unwrap();
    assert!(out.filter_graph.contains("fontfile="));
}
