//! Effect-to-chain lowering.
//!
//! Every effect lowers to a linear chain of draw passes over one input
//! stream. Multi-pass effects build depth by stacking: faint, offset, or
//! wide passes go in first and the fully opaque main pass always lands on
//! top. Backgrounds for multi-pass effects become a dedicated leading box
//! pass so the box never repaints between layers; the basic effect inlines
//! its box into its single pass.

use std::path::Path;

use crate::{
    foundation::{
        color::Rgba,
        error::{SubburnError, SubburnResult},
    },
    graph::primitive::{FilterGraph, PrimitiveOp},
    layout::position::PositionExpr,
    style::model::{EffectKind, StyleSpec},
};

/// What the downstream rendering engine can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineCaps {
    /// Engine honors alpha components in colors, including fully transparent
    /// fill ink. Multi-pass effects and separate box passes require this.
    pub supports_alpha: bool,
}

impl Default for EngineCaps {
    fn default() -> Self {
        Self {
            supports_alpha: true,
        }
    }
}

/// Lower a style into a filter chain for the given text.
///
/// `enable` is an optional engine-side visibility expression appended to every
/// pass. The chain reads from `base_label` and its labels derive from the
/// effect's tag.
pub fn compile_effect(
    style: &StyleSpec,
    text: &str,
    pos: &PositionExpr,
    font_file: &Path,
    base_label: &str,
    enable: Option<&str>,
    caps: EngineCaps,
) -> SubburnResult<FilterGraph> {
    let boxed_separately = style.background.enabled && !matches!(style.effect, EffectKind::Basic);
    if !caps.supports_alpha && (style.effect.needs_transparent_fill() || boxed_separately) {
        return Err(SubburnError::validation(format!(
            "effect '{}' requires alpha support the engine does not provide",
            style.effect.tag()
        )));
    }

    let mut graph = FilterGraph::new(style.effect.tag(), base_label);
    let ctx = PassContext {
        style,
        text,
        pos,
        font_file,
        enable,
    };

    if boxed_separately {
        graph.push(PrimitiveOp::Box, ctx.box_params());
    }

    match style.effect {
        EffectKind::Basic => compile_basic(&ctx, &mut graph),
        EffectKind::Glow {
            color,
            intensity,
            layers,
        } => compile_glow(&ctx, &mut graph, color, intensity, layers),
        EffectKind::DoubleOutline {
            inner_width,
            inner_color,
            outer_width,
            outer_color,
        } => compile_double_outline(
            &ctx,
            &mut graph,
            inner_width,
            inner_color,
            outer_width,
            outer_color,
        ),
        EffectKind::Neon {
            base_color,
            layers,
            intensity,
        } => compile_neon(&ctx, &mut graph, base_color, layers, intensity),
        EffectKind::Shadow3d {
            layers,
            depth,
            angle_degrees,
        } => compile_shadow3d(&ctx, &mut graph, layers, depth, angle_degrees),
        EffectKind::Glitch {
            displacement,
            color_shift,
        } => compile_glitch(&ctx, &mut graph, displacement, color_shift),
    }

    Ok(graph)
}

/// Shared per-compile inputs for pass builders.
struct PassContext<'a> {
    style: &'a StyleSpec,
    text: &'a str,
    pos: &'a PositionExpr,
    font_file: &'a Path,
    enable: Option<&'a str>,
}

impl PassContext<'_> {
    /// Leading params common to every pass: text, font, size, ink, position.
    fn base(&self, fill: Rgba) -> Vec<(String, String)> {
        self.base_at(fill, self.pos.x.clone(), self.pos.y.clone())
    }

    fn base_at(&self, fill: Rgba, x: String, y: String) -> Vec<(String, String)> {
        vec![
            ("text".to_string(), self.text.to_string()),
            (
                "fontfile".to_string(),
                self.font_file.display().to_string(),
            ),
            ("fontsize".to_string(), self.style.font_size.to_string()),
            ("fontcolor".to_string(), fill.to_hex()),
            ("x".to_string(), x),
            ("y".to_string(), y),
        ]
    }

    /// Params for a standalone background box pass.
    fn box_params(&self) -> Vec<(String, String)> {
        let bg = &self.style.background;
        let mut params = self.base(Rgba::TRANSPARENT);
        push_box(&mut params, bg.color, bg.opacity, bg.padding);
        self.finish(&mut params);
        params
    }

    /// Append the enable window, when present. Call last.
    fn finish(&self, params: &mut Vec<(String, String)>) {
        if let Some(enable) = self.enable {
            params.push(("enable".to_string(), enable.to_string()));
        }
    }
}

fn push_box(params: &mut Vec<(String, String)>, color: Rgba, opacity: f64, padding: u32) {
    let alpha = scale_alpha(255, opacity);
    params.push(("box".to_string(), "1".to_string()));
    params.push(("boxcolor".to_string(), color.with_alpha(alpha).to_hex()));
    params.push(("boxborderw".to_string(), padding.to_string()));
}

fn push_border(params: &mut Vec<(String, String)>, width: u32, color: Rgba) {
    params.push(("borderw".to_string(), width.to_string()));
    params.push(("bordercolor".to_string(), color.to_hex()));
}

fn push_shadow(params: &mut Vec<(String, String)>, color: Rgba, dx: i32, dy: i32) {
    params.push(("shadowcolor".to_string(), color.to_hex()));
    params.push(("shadowx".to_string(), dx.to_string()));
    params.push(("shadowy".to_string(), dy.to_string()));
}

/// `base` scaled by a `[0, 1]` factor, rounded and clamped to a byte.
fn scale_alpha(base: u8, factor: f64) -> u8 {
    (f64::from(base) * factor.clamp(0.0, 1.0)).round() as u8
}

/// Append a signed pixel offset to a position expression.
fn offset_expr(base: &str, delta: i64) -> String {
    match delta {
        0 => base.to_string(),
        d if d > 0 => format!("{base}+{d}"),
        d => format!("{base}-{}", -d),
    }
}

fn compile_basic(ctx: &PassContext<'_>, graph: &mut FilterGraph) {
    let style = ctx.style;
    let mut params = ctx.base(style.font_color);
    if style.background.enabled {
        push_box(
            &mut params,
            style.background.color,
            style.background.opacity,
            style.background.padding,
        );
    }
    if style.outline_width > 0 {
        push_border(&mut params, style.outline_width, style.outline_color);
    }
    if style.shadow.enabled {
        push_shadow(
            &mut params,
            style.shadow.color,
            style.shadow.offset_x,
            style.shadow.offset_y,
        );
    }
    ctx.finish(&mut params);
    graph.push(PrimitiveOp::DrawText, params);
}

/// Halo passes draw nothing but their shadow: invisible ink with an
/// increasingly offset, increasingly faint colored shadow, then the opaque
/// main pass.
fn compile_glow(
    ctx: &PassContext<'_>,
    graph: &mut FilterGraph,
    color: Rgba,
    intensity: f64,
    layers: u32,
) {
    let layers = layers.max(1);
    for i in 0..layers {
        let falloff = 1.0 - f64::from(i) / f64::from(layers);
        let halo = color.with_alpha(scale_alpha(scale_alpha(255, intensity), falloff));
        let spread = (i + 1) as i32;
        let mut params = ctx.base(Rgba::TRANSPARENT);
        push_shadow(&mut params, halo, spread, spread);
        ctx.finish(&mut params);
        graph.push(PrimitiveOp::DrawText, params);
    }
    compile_main_pass(ctx, graph);
}

fn compile_double_outline(
    ctx: &PassContext<'_>,
    graph: &mut FilterGraph,
    inner_width: u32,
    inner_color: Rgba,
    outer_width: u32,
    outer_color: Rgba,
) {
    for (width, color) in [(outer_width, outer_color), (inner_width, inner_color)] {
        let mut params = ctx.base(Rgba::TRANSPARENT);
        push_border(&mut params, width, color);
        ctx.finish(&mut params);
        graph.push(PrimitiveOp::DrawText, params);
    }

    let mut params = ctx.base(ctx.style.font_color);
    ctx.finish(&mut params);
    graph.push(PrimitiveOp::DrawText, params);
}

/// Falloff passes widen the border outward and fade it; the main pass draws
/// the tube itself in the base color with a thin contrasting border.
fn compile_neon(
    ctx: &PassContext<'_>,
    graph: &mut FilterGraph,
    base_color: Rgba,
    layers: u32,
    intensity: f64,
) {
    let layers = layers.max(1);
    for i in 0..layers {
        let width = 2 * (layers - i);
        let falloff = f64::from(i + 1) / f64::from(layers);
        let halo = base_color.with_alpha(scale_alpha(scale_alpha(255, intensity), falloff));
        let mut params = ctx.base(Rgba::TRANSPARENT);
        push_border(&mut params, width, halo);
        ctx.finish(&mut params);
        graph.push(PrimitiveOp::DrawText, params);
    }

    let mut params = ctx.base(base_color);
    push_border(&mut params, 2, base_color.contrasting());
    ctx.finish(&mut params);
    graph.push(PrimitiveOp::DrawText, params);
}

/// Extrusion passes go in far-to-near so nearer slices paint over farther
/// ones; offsets step along the extrusion angle.
fn compile_shadow3d(
    ctx: &PassContext<'_>,
    graph: &mut FilterGraph,
    layers: u32,
    depth: f64,
    angle_degrees: f64,
) {
    let layers = layers.max(1);
    let angle = angle_degrees.to_radians();
    for i in (1..=layers).rev() {
        let dx = (depth * f64::from(i) * angle.cos()).round() as i64;
        let dy = (depth * f64::from(i) * angle.sin()).round() as i64;
        let fade = 1.0 - f64::from(i - 1) / f64::from(layers);
        let ink = ctx.style.shadow.color.with_alpha(scale_alpha(204, fade));
        let mut params = ctx.base_at(
            ink,
            offset_expr(&ctx.pos.x, dx),
            offset_expr(&ctx.pos.y, dy),
        );
        ctx.finish(&mut params);
        graph.push(PrimitiveOp::DrawText, params);
    }
    compile_main_pass(ctx, graph);
}

/// Chromatic-aberration ghosts: a red copy shifted one way, a cyan copy the
/// other, main pass centered on top. Without `color_shift` only the main pass
/// is drawn.
fn compile_glitch(
    ctx: &PassContext<'_>,
    graph: &mut FilterGraph,
    displacement: i32,
    color_shift: bool,
) {
    if color_shift {
        let ghosts = [
            (Rgba::rgb(255, 0, 0), i64::from(displacement)),
            (Rgba::rgb(0, 255, 255), -i64::from(displacement)),
        ];
        for (tint, dx) in ghosts {
            let ink = tint.with_alpha(128);
            let mut params = ctx.base_at(ink, offset_expr(&ctx.pos.x, dx), ctx.pos.y.clone());
            ctx.finish(&mut params);
            graph.push(PrimitiveOp::DrawText, params);
        }
    }
    compile_main_pass(ctx, graph);
}

/// Opaque topmost pass shared by the stacking effects: fill plus the style's
/// outline and drop shadow. The background is never inlined here; multi-pass
/// effects carry it as a leading box pass.
fn compile_main_pass(ctx: &PassContext<'_>, graph: &mut FilterGraph) {
    let style = ctx.style;
    let mut params = ctx.base(style.font_color);
    if style.outline_width > 0 {
        push_border(&mut params, style.outline_width, style.outline_color);
    }
    if style.shadow.enabled && !matches!(style.effect, EffectKind::Shadow3d { .. }) {
        push_shadow(
            &mut params,
            style.shadow.color,
            style.shadow.offset_x,
            style.shadow.offset_y,
        );
    }
    ctx.finish(&mut params);
    graph.push(PrimitiveOp::DrawText, params);
}

#[cfg(test)]
#[path = "../../tests/unit/compile/effects.rs"]
mod tests;
