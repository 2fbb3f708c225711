//! Chain serialization.
//!
//! Turns a [`FilterGraph`] into the engine's textual form: one
//! `[in]filter=k=v:k=v[out]` clause per pass, joined by semicolons. Output is
//! a pure function of the chain contents; no state, no randomness.

use crate::{
    foundation::error::{SubburnError, SubburnResult},
    graph::primitive::{FilterGraph, PrimitiveOp},
};

/// Serialize a chain into its textual form and final output label.
///
/// Fails on an empty chain and on duplicate pass labels; both indicate a
/// compiler bug rather than bad user input.
pub fn emit_filter_graph(graph: &FilterGraph) -> SubburnResult<(String, String)> {
    if graph.is_empty() {
        return Err(SubburnError::graph("cannot serialize an empty chain"));
    }

    let mut seen = std::collections::HashSet::new();
    for primitive in graph.primitives() {
        if !seen.insert(primitive.output_label.as_str()) {
            return Err(SubburnError::graph(format!(
                "duplicate pass label '{}'",
                primitive.output_label
            )));
        }
    }

    let clauses: Vec<String> = graph
        .primitives()
        .iter()
        .map(|primitive| {
            let filter = match primitive.op {
                PrimitiveOp::DrawText | PrimitiveOp::Box => "drawtext",
                PrimitiveOp::PositionOnly => "null",
            };
            let args: Vec<String> = primitive
                .params
                .iter()
                .map(|(key, value)| format!("{key}={}", escape_value(value)))
                .collect();
            if args.is_empty() {
                format!(
                    "[{}]{}[{}]",
                    primitive.input_label, filter, primitive.output_label
                )
            } else {
                format!(
                    "[{}]{}={}[{}]",
                    primitive.input_label,
                    filter,
                    args.join(":"),
                    primitive.output_label
                )
            }
        })
        .collect();

    Ok((clauses.join(";"), graph.output_label().to_string()))
}

/// `true` for characters the filtergraph parser treats specially in values.
fn needs_quoting(value: &str) -> bool {
    value.chars().any(|c| {
        matches!(
            c,
            ' ' | ',' | ':' | ';' | '\'' | '[' | ']' | '\\' | '=' | '\n'
        )
    })
}

/// Quote a value when it contains metacharacters. Inside single quotes the
/// only escape needed is for the quote itself, which closes, escapes, and
/// reopens (`'\''`); backslashes are doubled so they survive the outer parse.
fn escape_value(value: &str) -> String {
    if !needs_quoting(value) {
        return value.to_string();
    }
    let inner = value.replace('\\', "\\\\").replace('\'', "'\\''");
    format!("'{inner}'")
}

#[cfg(test)]
#[path = "../../tests/unit/emit/filtergraph.rs"]
mod tests;
