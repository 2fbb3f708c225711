//! Named style presets.
//!
//! Every factory is pure: it returns a fully populated, independently-owned
//! [`StyleSpec`] and touches no shared state. Presets differ only in field
//! values, never in structural shape.

use crate::{
    foundation::color::Rgba,
    style::model::{Anchor, Background, EffectKind, FontWeight, Shadow, StyleSpec},
};

/// Default style: bottom center, white fill with black outline and a soft shadow.
pub fn default() -> StyleSpec {
    StyleSpec::default()
}

/// Cinema style: larger type, stronger shadow, tighter width.
pub fn cinema() -> StyleSpec {
    StyleSpec {
        font_size: 28,
        margin_x: 100,
        margin_y: 40,
        shadow: Shadow {
            enabled: true,
            offset_x: 4,
            offset_y: 4,
            blur: 6,
            ..Shadow::default()
        },
        outline_width: 2,
        font_weight: FontWeight::Bold,
        max_width_percent: 75,
        ..StyleSpec::default()
    }
}

/// Minimal style: no shadow, thin outline, regular weight.
pub fn minimal() -> StyleSpec {
    StyleSpec {
        font_size: 22,
        shadow: Shadow {
            enabled: false,
            ..Shadow::default()
        },
        outline_width: 1,
        font_weight: FontWeight::Normal,
        ..StyleSpec::default()
    }
}

/// News ticker style: top center on a dark background box.
pub fn top_news() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::TopCenter,
        font_size: 20,
        background: Background {
            enabled: true,
            color: Rgba::BLACK,
            opacity: 0.78,
            padding: 12,
        },
        margin_y: 30,
        ..StyleSpec::default()
    }
}

/// YouTube-like style: compact type on a translucent yellow box.
pub fn youtube() -> StyleSpec {
    StyleSpec {
        font_size: 20,
        background: Background {
            enabled: true,
            color: Rgba::rgb(255, 255, 0),
            opacity: 0.7,
            padding: 8,
        },
        outline_width: 1,
        ..StyleSpec::default()
    }
}

/// Poster-like style with a pronounced offset shadow behind white type.
pub fn strong_shadow() -> StyleSpec {
    StyleSpec {
        font_size: 32,
        font_weight: FontWeight::Bold,
        margin_x: 120,
        margin_y: 30,
        shadow: Shadow {
            enabled: true,
            color: Rgba::BLACK,
            offset_x: 6,
            offset_y: 6,
            blur: 8,
        },
        outline_width: 3,
        outline_color: Rgba::BLACK,
        font_color: Rgba::WHITE,
        max_width_percent: 70,
        ..StyleSpec::default()
    }
}

/// Theatrical extruded-shadow style built on the 3D shadow effect.
pub fn dramatic_shadow() -> StyleSpec {
    StyleSpec {
        font_size: 36,
        font_weight: FontWeight::Bold,
        margin_y: 60,
        outline_width: 4,
        outline_color: Rgba::BLACK,
        font_color: Rgba::WHITE,
        effect: EffectKind::Shadow3d {
            layers: 4,
            depth: 3.0,
            angle_degrees: 45.0,
        },
        ..StyleSpec::default()
    }
}

/// Classic short-video look: large white type with a heavy black outline,
/// placed low but clear of player chrome.
pub fn tiktok_classic() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::BottomCenter,
        margin_y: 25,
        margin_x: 30,
        font_size: 42,
        font_weight: FontWeight::Bold,
        font_family: "Arial Black,WenQuanYi Zen Hei".to_string(),
        font_color: Rgba::WHITE,
        outline_width: 4,
        outline_color: Rgba::BLACK,
        shadow: Shadow {
            enabled: true,
            offset_x: 3,
            offset_y: 3,
            blur: 5,
            color: Rgba::BLACK,
        },
        max_width_percent: 85,
        line_spacing: 1.3,
        ..StyleSpec::default()
    }
}

/// Neon look: centered type glowing in hot pink.
pub fn tiktok_neon() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::Center,
        margin_y: 40,
        margin_x: 25,
        font_size: 38,
        font_weight: FontWeight::Bold,
        font_family: "Arial,Roboto,WenQuanYi Zen Hei".to_string(),
        font_color: Rgba::WHITE,
        outline_width: 3,
        outline_color: Rgba::rgb(255, 20, 147),
        effect: EffectKind::Neon {
            base_color: Rgba::rgb(255, 20, 147),
            layers: 3,
            intensity: 0.8,
        },
        background: Background {
            enabled: true,
            color: Rgba::rgb(20, 20, 40),
            opacity: 0.47,
            padding: 15,
        },
        ..StyleSpec::default()
    }
}

/// Heavy look: very large type with an oversized outline.
pub fn tiktok_bold() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::BottomCenter,
        margin_y: 30,
        margin_x: 20,
        font_size: 48,
        font_weight: FontWeight::Bold,
        font_family: "Impact,Arial Black,WenQuanYi Zen Hei".to_string(),
        outline_width: 6,
        outline_color: Rgba::BLACK,
        shadow: Shadow {
            enabled: true,
            offset_x: 4,
            offset_y: 4,
            blur: 8,
            color: Rgba::BLACK,
        },
        max_width_percent: 90,
        line_spacing: 1.1,
        ..StyleSpec::default()
    }
}

/// Playful look: warm gold fill with orange outline and pink shadow.
pub fn tiktok_colorful() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::Center,
        margin_y: 35,
        margin_x: 30,
        font_size: 40,
        font_weight: FontWeight::Bold,
        font_family: "Arial Rounded,Arial,WenQuanYi Zen Hei".to_string(),
        font_color: Rgba::rgb(255, 215, 0),
        outline_width: 3,
        outline_color: Rgba::rgb(255, 69, 0),
        shadow: Shadow {
            enabled: true,
            offset_x: 2,
            offset_y: 2,
            blur: 6,
            color: Rgba::rgb(255, 105, 180),
        },
        background: Background {
            enabled: true,
            color: Rgba::WHITE,
            opacity: 0.31,
            padding: 12,
        },
        max_width_percent: 82,
        ..StyleSpec::default()
    }
}

/// Clean look: bold but restrained, thin outline, light shadow.
pub fn tiktok_minimal() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::BottomCenter,
        margin_y: 35,
        margin_x: 40,
        font_size: 36,
        font_weight: FontWeight::Bold,
        font_family: "Helvetica,Arial,WenQuanYi Zen Hei".to_string(),
        outline_width: 2,
        outline_color: Rgba::BLACK,
        shadow: Shadow {
            enabled: true,
            offset_x: 1,
            offset_y: 1,
            blur: 3,
            color: Rgba::BLACK,
        },
        max_width_percent: 75,
        line_spacing: 1.4,
        ..StyleSpec::default()
    }
}

/// Narrative look: ivory serif-ish type on a warm translucent box.
pub fn tiktok_story() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::Center,
        margin_y: 25,
        margin_x: 35,
        font_size: 34,
        font_weight: FontWeight::Bold,
        font_family: "Georgia,Times,SimSun,WenQuanYi Zen Hei".to_string(),
        font_color: Rgba::rgb(255, 248, 220),
        outline_width: 2,
        outline_color: Rgba::rgb(139, 69, 19),
        shadow: Shadow {
            enabled: true,
            offset_x: 2,
            offset_y: 2,
            blur: 4,
            color: Rgba::rgb(101, 67, 33),
        },
        background: Background {
            enabled: true,
            color: Rgba::rgb(139, 69, 19),
            opacity: 0.39,
            padding: 14,
        },
        max_width_percent: 85,
        line_spacing: 1.5,
        ..StyleSpec::default()
    }
}

/// High-energy look: top placement with a hot-pink glow, clear of the action.
pub fn tiktok_dance() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::TopCenter,
        margin_y: 25,
        margin_x: 25,
        font_size: 44,
        font_weight: FontWeight::Bold,
        font_family: "Impact,Arial Black,WenQuanYi Zen Hei".to_string(),
        outline_width: 5,
        outline_color: Rgba::rgb(255, 0, 128),
        effect: EffectKind::Glow {
            color: Rgba::rgb(255, 0, 128),
            intensity: 0.8,
            layers: 3,
        },
        background: Background {
            enabled: true,
            color: Rgba::BLACK,
            opacity: 0.59,
            padding: 10,
        },
        max_width_percent: 80,
        ..StyleSpec::default()
    }
}

/// Upscale look: gold type over a dark box with a deep brown shadow.
pub fn tiktok_luxury() -> StyleSpec {
    StyleSpec {
        anchor: Anchor::Center,
        margin_y: 30,
        margin_x: 40,
        font_size: 38,
        font_weight: FontWeight::Bold,
        font_family: "Times New Roman,Georgia,SimSun".to_string(),
        font_color: Rgba::rgb(255, 215, 0),
        outline_width: 3,
        outline_color: Rgba::rgb(184, 134, 11),
        shadow: Shadow {
            enabled: true,
            offset_x: 2,
            offset_y: 2,
            blur: 8,
            color: Rgba::rgb(139, 69, 19),
        },
        background: Background {
            enabled: true,
            color: Rgba::BLACK,
            opacity: 0.71,
            padding: 16,
        },
        max_width_percent: 78,
        line_spacing: 1.3,
        ..StyleSpec::default()
    }
}

/// All preset names, in the order they are documented.
pub const PRESET_NAMES: &[&str] = &[
    "default",
    "cinema",
    "minimal",
    "top_news",
    "youtube",
    "strong_shadow",
    "dramatic_shadow",
    "tiktok_classic",
    "tiktok_neon",
    "tiktok_bold",
    "tiktok_colorful",
    "tiktok_minimal",
    "tiktok_story",
    "tiktok_dance",
    "tiktok_luxury",
];

/// Look up a preset factory by name.
pub fn by_name(name: &str) -> Option<StyleSpec> {
    let style = match name {
        "default" => default(),
        "cinema" => cinema(),
        "minimal" => minimal(),
        "top_news" => top_news(),
        "youtube" => youtube(),
        "strong_shadow" => strong_shadow(),
        "dramatic_shadow" => dramatic_shadow(),
        "tiktok_classic" => tiktok_classic(),
        "tiktok_neon" => tiktok_neon(),
        "tiktok_bold" => tiktok_bold(),
        "tiktok_colorful" => tiktok_colorful(),
        "tiktok_minimal" => tiktok_minimal(),
        "tiktok_story" => tiktok_story(),
        "tiktok_dance" => tiktok_dance(),
        "tiktok_luxury" => tiktok_luxury(),
        _ => return None,
    };
    Some(style)
}

#[cfg(test)]
#[path = "../../tests/unit/style/presets.rs"]
mod tests;
