//! Anchor-to-expression synthesis.
//!
//! Positions are emitted as engine-side expressions over the symbolic names
//! `w`, `h` (frame size) and `text_w`, `text_h` (measured glyph box), so the
//! actual pixel placement is resolved by the engine at render time. Margins
//! are literal pixels; fine positions shift by a fixed fraction of frame
//! height so they scale with resolution.

use crate::style::model::{Alignment, Anchor, FinePosition, StyleSpec};

/// Fraction of frame height used by [`FinePosition`] nudges.
const FINE_NUDGE_EXPR: &str = "h*0.05";

/// Symbolic x/y placement expressions for one overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionExpr {
    /// Horizontal expression over `w`, `text_w`, and margin constants.
    pub x: String,
    /// Vertical expression over `h`, `text_h`, and margin constants.
    pub y: String,
}

/// Resolve a style's anchor, margins, alignment, and fine position into
/// symbolic placement expressions.
///
/// `Anchor::Custom` bypasses synthesis entirely and emits the caller's literal
/// coordinates verbatim. Zero margins degenerate to the un-offset form (no
/// trailing `+0`/`-0` terms). Closer-to-edge nudges clamp at the frame edge,
/// so a nudge larger than the margin cannot place text outside the frame.
pub fn resolve_position(style: &StyleSpec) -> PositionExpr {
    if let Anchor::Custom { x, y } = style.anchor {
        return PositionExpr {
            x: x.to_string(),
            y: y.to_string(),
        };
    }

    PositionExpr {
        x: horizontal_expr(style),
        y: vertical_expr(style),
    }
}

fn horizontal_expr(style: &StyleSpec) -> String {
    // Left/right alignment takes precedence over the anchor's horizontal
    // component; center defers to the anchor.
    let from_anchor = style.anchor.horizontal().unwrap_or(Alignment::Center);
    let effective = match style.alignment {
        Alignment::Left | Alignment::Right => style.alignment,
        Alignment::Center => from_anchor,
    };

    let m = style.margin_x;
    match effective {
        Alignment::Left => m.to_string(),
        Alignment::Center => "(w-text_w)/2".to_string(),
        Alignment::Right => {
            if m == 0 {
                "w-text_w".to_string()
            } else {
                format!("w-text_w-{m}")
            }
        }
    }
}

fn vertical_expr(style: &StyleSpec) -> String {
    let m = style.margin_y;
    match style.anchor {
        Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => {
            let base = m.to_string();
            match style.fine_position {
                FinePosition::Default => base,
                // Already at the edge: nothing is closer than margin zero.
                FinePosition::CloserToEdge if m == 0 => base,
                // Clamped: the nudge may exceed the margin at large frames.
                FinePosition::CloserToEdge => format!("max(0,{base}-{FINE_NUDGE_EXPR})"),
                FinePosition::FurtherFromEdge => format!("{base}+{FINE_NUDGE_EXPR}"),
            }
        }
        Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => {
            let base = "(h-text_h)/2".to_string();
            match style.fine_position {
                FinePosition::Default => base,
                FinePosition::CloserToEdge => format!("{base}+{FINE_NUDGE_EXPR}"),
                FinePosition::FurtherFromEdge => format!("{base}-{FINE_NUDGE_EXPR}"),
            }
        }
        Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => {
            let base = if m == 0 {
                "h-text_h".to_string()
            } else {
                format!("h-text_h-{m}")
            };
            match style.fine_position {
                FinePosition::Default => base,
                FinePosition::CloserToEdge if m == 0 => base,
                FinePosition::CloserToEdge => format!("min(h-text_h,{base}+{FINE_NUDGE_EXPR})"),
                FinePosition::FurtherFromEdge => format!("{base}-{FINE_NUDGE_EXPR}"),
            }
        }
        Anchor::Custom { .. } => unreachable!("custom anchors are handled by resolve_position"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
