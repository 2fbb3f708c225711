//! Filter-chain intermediate representation.
//!
//! Effects compile into an ordered list of primitives before serialization.
//! Labels are assigned at push time as `{tag}_{index}`, each primitive
//! consuming the previous primitive's output, so the chain is linear and its
//! labels are a pure function of the tag and the push order.

/// What a single filter pass draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveOp {
    /// A text pass.
    DrawText,
    /// A background box pass (a text pass with invisible ink and a box).
    Box,
    /// A pass that draws nothing; placeholder for empty text.
    PositionOnly,
}

/// One filter pass: an operation, its parameters in emission order, and the
/// stream labels it connects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterPrimitive {
    /// Operation this pass performs.
    pub op: PrimitiveOp,
    /// Parameters in the exact order they serialize.
    pub params: Vec<(String, String)>,
    /// Label of the stream this pass reads.
    pub input_label: String,
    /// Label of the stream this pass produces.
    pub output_label: String,
}

/// A linear chain of filter passes over one input stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterGraph {
    tag: String,
    base: String,
    primitives: Vec<FilterPrimitive>,
}

impl FilterGraph {
    /// Empty chain reading from `base_label`, labeling passes `{tag}_{index}`.
    pub fn new(tag: impl Into<String>, base_label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            base: base_label.into(),
            primitives: Vec::new(),
        }
    }

    /// Append a pass. Its input is the current chain output; its output label
    /// is derived from the tag and the pass index.
    pub fn push(&mut self, op: PrimitiveOp, params: Vec<(String, String)>) {
        let input_label = self.output_label().to_string();
        let output_label = format!("{}_{}", self.tag, self.primitives.len());
        self.primitives.push(FilterPrimitive {
            op,
            params,
            input_label,
            output_label,
        });
    }

    /// Passes in draw order.
    pub fn primitives(&self) -> &[FilterPrimitive] {
        &self.primitives
    }

    /// Label of the chain's final output stream (the base label while empty).
    pub fn output_label(&self) -> &str {
        self.primitives
            .last()
            .map_or(self.base.as_str(), |p| p.output_label.as_str())
    }

    /// Number of passes.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// `true` when no pass has been pushed.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/primitive.rs"]
mod tests;
