//! Style-to-filtergraph front end.
//!
//! [`OverlayCompiler`] ties the pipeline together: validate the style,
//! synthesize position expressions, resolve the font, lower the effect into
//! a chain, and serialize the chain. Compilation is deterministic: the same
//! style, text, and frame inputs always produce the same string and label.

use crate::{
    compile::effects::{EngineCaps, compile_effect},
    emit::filtergraph::emit_filter_graph,
    fonts::{catalog::WeightClass, resolve::FontResolver},
    foundation::error::{SubburnError, SubburnResult},
    graph::primitive::{FilterGraph, PrimitiveOp},
    layout::position::resolve_position,
    style::model::{StyleSpec, TimeWindow},
};

/// Input stream label the compiled chain reads from.
const BASE_INPUT_LABEL: &str = "0:v";

/// A fully serialized overlay: the filtergraph string and the label of the
/// stream it leaves the styled frame on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledOverlay {
    /// Complete filtergraph description.
    pub filter_graph: String,
    /// Output label of the final pass.
    pub output_label: String,
}

/// Reusable compiler holding the font resolver and engine capabilities.
#[derive(Debug, Default)]
pub struct OverlayCompiler {
    fonts: FontResolver,
    caps: EngineCaps,
}

impl OverlayCompiler {
    /// Compiler over a fresh system font resolver and default capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler over an existing resolver.
    pub fn with_fonts(fonts: FontResolver) -> Self {
        Self {
            fonts,
            caps: EngineCaps::default(),
        }
    }

    /// Override the engine capability assumptions.
    pub fn with_caps(mut self, caps: EngineCaps) -> Self {
        self.caps = caps;
        self
    }

    /// The resolver backing this compiler.
    pub fn fonts(&self) -> &FontResolver {
        &self.fonts
    }

    /// Compile one styled text into a filtergraph.
    ///
    /// `frame_duration`, when known, closes open-ended time windows so the
    /// overlay does not outlive the clip. Empty text still produces a valid
    /// single-pass graph that draws nothing.
    #[tracing::instrument(skip(self, style, text), fields(effect = style.effect.tag()))]
    pub fn compile(
        &self,
        style: &StyleSpec,
        text: &str,
        frame_width: u32,
        frame_height: u32,
        frame_duration: Option<f64>,
    ) -> SubburnResult<CompiledOverlay> {
        style.validate()?;
        if frame_width == 0 || frame_height == 0 {
            return Err(SubburnError::validation(format!(
                "frame size must be positive, got {frame_width}x{frame_height}"
            )));
        }

        let pos = resolve_position(style);
        let enable = style
            .time_window
            .as_ref()
            .and_then(|tw| enable_expr(tw, frame_duration));

        let graph = if text.is_empty() {
            let mut graph = FilterGraph::new(style.effect.tag(), BASE_INPUT_LABEL);
            graph.push(PrimitiveOp::PositionOnly, Vec::new());
            graph
        } else {
            let font_file = self
                .fonts
                .resolve_family_list(&style.font_family, WeightClass::from(style.font_weight));
            compile_effect(
                style,
                text,
                &pos,
                &font_file,
                BASE_INPUT_LABEL,
                enable.as_deref(),
                self.caps,
            )?
        };

        let (filter_graph, output_label) = emit_filter_graph(&graph)?;
        tracing::debug!(passes = graph.len(), output = %output_label, "overlay compiled");
        Ok(CompiledOverlay {
            filter_graph,
            output_label,
        })
    }
}

/// Engine-side visibility expression for a validated time window.
///
/// Open-ended windows are closed with the frame duration when known; a window
/// covering the whole clip (`start == 0`, no end) yields no expression at all.
fn enable_expr(window: &TimeWindow, frame_duration: Option<f64>) -> Option<String> {
    let end = window.end_sec.or(frame_duration);
    match end {
        Some(end) => Some(format!("between(t,{},{})", window.start_sec, end)),
        None if window.start_sec > 0.0 => Some(format!("gte(t,{})", window.start_sec)),
        None => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/overlay.rs"]
mod tests;
