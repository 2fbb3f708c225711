//! Subburn compiles declarative caption styles into engine filtergraphs.
//!
//! A caption is described once as a [`StyleSpec`] (placement, typography,
//! colors, effect, timing) and compiled into the textual filter chain a
//! drawtext-capable engine executes, together with the label of the stream
//! the styled frame comes out on.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: fail fast on out-of-range style fields ([`StyleSpec::validate`])
//! 2. **Position**: anchor + margins + alignment -> symbolic x/y expressions
//! 3. **Resolve**: family names -> on-disk face files ([`FontResolver`])
//! 4. **Lower**: effect -> ordered chain of draw passes ([`FilterGraph`])
//! 5. **Emit**: chain -> deterministic filtergraph string + output label
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: compilation is a pure function of the style,
//!   text, and frame inputs; labels are reproducible across calls.
//! - **Infallible font resolution**: a missing font degrades to a fallback
//!   path with a warning, never an error.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod compile;
mod emit;
mod fonts;
mod foundation;
mod graph;
mod layout;
mod style;

pub use compile::effects::{EngineCaps, compile_effect};
pub use compile::overlay::{CompiledOverlay, OverlayCompiler};
pub use emit::filtergraph::emit_filter_graph;
pub use fonts::catalog::{
    FontCatalog, FontDescriptor, FontPaths, WeightClass, label_with_script, strip_label,
};
pub use fonts::classify::{Script, classify_family};
pub use fonts::rank::{priority_score, rank_families};
pub use fonts::resolve::{FontConfig, FontConfigEntry, FontResolver};
pub use foundation::cache::KeyedOnce;
pub use foundation::color::Rgba;
pub use foundation::error::{SubburnError, SubburnResult};
pub use graph::primitive::{FilterGraph, FilterPrimitive, PrimitiveOp};
pub use layout::position::{PositionExpr, resolve_position};
pub use style::model::{
    Alignment, Anchor, Background, EffectKind, FinePosition, FontWeight, Shadow, StyleSpec,
    TimeWindow,
};
pub use style::presets;
