use crate::foundation::color::Rgba;

/// Coarse placement of text within the frame: a nine-point grid plus literal
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Top edge, left aligned.
    TopLeft,
    /// Top edge, horizontally centered.
    TopCenter,
    /// Top edge, right aligned.
    TopRight,
    /// Vertically centered, left aligned.
    CenterLeft,
    /// Frame center.
    Center,
    /// Vertically centered, right aligned.
    CenterRight,
    /// Bottom edge, left aligned.
    BottomLeft,
    /// Bottom edge, horizontally centered (the conventional subtitle position).
    BottomCenter,
    /// Bottom edge, right aligned.
    BottomRight,
    /// Literal pixel coordinates, bypassing expression synthesis.
    Custom {
        /// X coordinate in pixels.
        x: i64,
        /// Y coordinate in pixels.
        y: i64,
    },
}

impl Anchor {
    /// Horizontal component of a grid anchor (`Custom` has none).
    pub fn horizontal(self) -> Option<Alignment> {
        match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => Some(Alignment::Left),
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => Some(Alignment::Center),
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => Some(Alignment::Right),
            Anchor::Custom { .. } => None,
        }
    }
}

/// Vertical nudge applied on top of a grid anchor, sized relative to frame
/// height so layout holds across resolutions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinePosition {
    /// Use the anchor position as-is.
    #[default]
    Default,
    /// Shift toward the nearest horizontal edge (downward for center anchors).
    CloserToEdge,
    /// Shift away from the nearest horizontal edge (upward for center anchors).
    FurtherFromEdge,
}

/// Horizontal text alignment. `Left`/`Right` take precedence over the anchor's
/// horizontal component; `Center` defers to the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left edge plus horizontal margin.
    Left,
    /// Horizontally centered.
    #[default]
    Center,
    /// Right edge minus horizontal margin.
    Right,
}

/// Requested font weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Drop-shadow configuration for the basic text pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    /// Draw the shadow at all.
    pub enabled: bool,
    /// Shadow color.
    pub color: Rgba,
    /// Horizontal offset in pixels.
    pub offset_x: i32,
    /// Vertical offset in pixels.
    pub offset_y: i32,
    /// Blur radius hint in pixels.
    pub blur: u32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Rgba::BLACK,
            offset_x: 2,
            offset_y: 2,
            blur: 3,
        }
    }
}

/// Background box drawn behind the text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Background {
    /// Draw the box at all.
    pub enabled: bool,
    /// Box color (alpha is derived from `opacity` at compile time).
    pub color: Rgba,
    /// Box opacity in `[0, 1]`.
    pub opacity: f64,
    /// Padding around the text in pixels.
    pub padding: u32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Rgba::BLACK,
            opacity: 0.5,
            padding: 10,
        }
    }
}

/// Optional wall-clock window during which the overlay is visible.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    /// Start time in seconds (>= 0).
    pub start_sec: f64,
    /// Optional end time in seconds (> `start_sec` when present; `None` means
    /// until the end of the clip).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_sec: Option<f64>,
}

/// Visual treatment of the text. Exactly one variant is active per style;
/// "multiple effects at once" is unrepresentable by construction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectKind {
    /// Single pass carrying fill, outline, shadow, and background directly.
    Basic,
    /// Soft halo built from transparent-fill passes under an opaque main pass.
    Glow {
        /// Halo color.
        color: Rgba,
        /// Halo strength in `[0, 1]`.
        #[serde(default = "default_intensity")]
        intensity: f64,
        /// Number of halo passes.
        #[serde(default = "default_layers")]
        layers: u32,
    },
    /// Two nested outline passes under an opaque fill pass.
    DoubleOutline {
        /// Inner outline width in pixels.
        inner_width: u32,
        /// Inner outline color.
        inner_color: Rgba,
        /// Outer outline width in pixels.
        outer_width: u32,
        /// Outer outline color.
        outer_color: Rgba,
    },
    /// Neon-tube look: colored falloff passes under a self-colored main pass
    /// with a contrasting border.
    Neon {
        /// Tube color, used for both falloff and fill.
        base_color: Rgba,
        /// Number of falloff passes.
        #[serde(default = "default_layers")]
        layers: u32,
        /// Falloff strength in `[0, 1]`.
        #[serde(default = "default_intensity")]
        intensity: f64,
    },
    /// Extruded shadow stack along a fixed angle under the main pass.
    Shadow3d {
        /// Number of extrusion passes.
        #[serde(default = "default_layers")]
        layers: u32,
        /// Offset step per pass in pixels.
        depth: f64,
        /// Extrusion direction in degrees (0 = right, 90 = down).
        angle_degrees: f64,
    },
    /// Chromatic-aberration look: red/cyan ghost passes around the main pass.
    Glitch {
        /// Ghost displacement in pixels.
        displacement: i32,
        /// Emit the tinted ghost passes; when `false` only the main pass is drawn.
        color_shift: bool,
    },
}

fn default_layers() -> u32 {
    3
}

fn default_intensity() -> f64 {
    0.8
}

impl EffectKind {
    /// Short identifier used for chain labels and diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            EffectKind::Basic => "basic",
            EffectKind::Glow { .. } => "glow",
            EffectKind::DoubleOutline { .. } => "double_outline",
            EffectKind::Neon { .. } => "neon",
            EffectKind::Shadow3d { .. } => "shadow3d",
            EffectKind::Glitch { .. } => "glitch",
        }
    }

    /// `true` when compiling this effect requires zero-alpha fill colors.
    pub fn needs_transparent_fill(&self) -> bool {
        matches!(
            self,
            EffectKind::Glow { .. } | EffectKind::DoubleOutline { .. } | EffectKind::Neon { .. }
        )
    }
}

/// The complete, unified description of how one piece of overlay text is drawn.
///
/// Constructed fresh per compile call (usually from a preset in
/// [`crate::presets`]) and discarded after serialization.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleSpec {
    /// Coarse placement within the frame.
    pub anchor: Anchor,
    /// Resolution-relative nudge on top of the anchor.
    #[serde(default)]
    pub fine_position: FinePosition,
    /// Horizontal margin in pixels.
    pub margin_x: u32,
    /// Vertical margin in pixels.
    pub margin_y: u32,
    /// Horizontal alignment; `Left`/`Right` override the anchor's horizontal
    /// component for non-custom anchors.
    #[serde(default)]
    pub alignment: Alignment,
    /// Font family, optionally a comma-separated candidate list and optionally
    /// carrying a script label (see [`crate::strip_label`]).
    pub font_family: String,
    /// Font size in pixels (> 0).
    pub font_size: u32,
    /// Requested font weight.
    #[serde(default)]
    pub font_weight: FontWeight,
    /// Fill color.
    pub font_color: Rgba,
    /// Outline color.
    pub outline_color: Rgba,
    /// Outline width in pixels (0 disables the outline).
    pub outline_width: u32,
    /// Drop-shadow configuration (used by `Basic` and as the `Shadow3d` ink).
    #[serde(default)]
    pub shadow: Shadow,
    /// Background box configuration.
    #[serde(default)]
    pub background: Background,
    /// Visual effect; exactly one variant.
    pub effect: EffectKind,
    /// Optional visibility window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
    /// Line spacing multiplier (> 0); consumed by the external wrapping step.
    pub line_spacing: f64,
    /// Maximum text width as a percentage of frame width, in `[1, 100]`;
    /// consumed by the external wrapping step.
    pub max_width_percent: u32,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            anchor: Anchor::BottomCenter,
            fine_position: FinePosition::Default,
            margin_x: 120,
            margin_y: 50,
            alignment: Alignment::Center,
            font_family: "Noto Sans CJK SC,WenQuanYi Zen Hei,Arial".to_string(),
            font_size: 24,
            font_weight: FontWeight::Bold,
            font_color: Rgba::WHITE,
            outline_color: Rgba::BLACK,
            outline_width: 2,
            shadow: Shadow::default(),
            background: Background::default(),
            effect: EffectKind::Basic,
            time_window: None,
            line_spacing: 1.2,
            max_width_percent: 80,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/model.rs"]
mod tests;
