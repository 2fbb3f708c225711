use crate::{
    foundation::error::{SubburnError, SubburnResult},
    style::model::{EffectKind, StyleSpec},
};

impl StyleSpec {
    /// Fail-fast structural and range validation, run before any compilation.
    ///
    /// Checks are ordered (time window, background opacity, font size, effect
    /// parameters, layout hints) and stop at the first violation; callers see
    /// only the first problem. Color component ranges need no check here: they
    /// are valid by construction (see [`crate::Rgba::from_components`] for the
    /// loose-input path).
    pub fn validate(&self) -> SubburnResult<()> {
        if let Some(tw) = &self.time_window {
            if !tw.start_sec.is_finite() || tw.start_sec < 0.0 {
                return Err(SubburnError::validation(
                    "time_window.start_sec must be finite and >= 0",
                ));
            }
            if let Some(end) = tw.end_sec
                && (!end.is_finite() || end <= tw.start_sec)
            {
                return Err(SubburnError::validation(
                    "time_window.end_sec must be finite and > start_sec",
                ));
            }
        }

        if !self.background.opacity.is_finite()
            || self.background.opacity < 0.0
            || self.background.opacity > 1.0
        {
            return Err(SubburnError::validation(
                "background.opacity must be in [0, 1]",
            ));
        }

        if self.font_size == 0 {
            return Err(SubburnError::validation("font_size must be > 0"));
        }

        self.validate_effect()?;

        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 {
            return Err(SubburnError::validation(
                "line_spacing must be finite and > 0",
            ));
        }
        if self.max_width_percent == 0 || self.max_width_percent > 100 {
            return Err(SubburnError::validation(
                "max_width_percent must be in [1, 100]",
            ));
        }

        Ok(())
    }

    fn validate_effect(&self) -> SubburnResult<()> {
        match &self.effect {
            EffectKind::Basic => Ok(()),
            EffectKind::Glow {
                intensity, layers, ..
            }
            | EffectKind::Neon {
                intensity, layers, ..
            } => {
                if *layers == 0 {
                    return Err(SubburnError::validation("effect layers must be >= 1"));
                }
                if !intensity.is_finite() || *intensity < 0.0 || *intensity > 1.0 {
                    return Err(SubburnError::validation(
                        "effect intensity must be in [0, 1]",
                    ));
                }
                Ok(())
            }
            EffectKind::DoubleOutline {
                inner_width,
                outer_width,
                ..
            } => {
                if *inner_width == 0 || *outer_width == 0 {
                    return Err(SubburnError::validation(
                        "double_outline widths must be >= 1",
                    ));
                }
                if outer_width <= inner_width {
                    return Err(SubburnError::validation(
                        "double_outline outer_width must be > inner_width",
                    ));
                }
                Ok(())
            }
            EffectKind::Shadow3d {
                layers,
                depth,
                angle_degrees,
            } => {
                if *layers == 0 {
                    return Err(SubburnError::validation("effect layers must be >= 1"));
                }
                if !depth.is_finite() || *depth <= 0.0 {
                    return Err(SubburnError::validation(
                        "shadow3d depth must be finite and > 0",
                    ));
                }
                if !angle_degrees.is_finite() {
                    return Err(SubburnError::validation(
                        "shadow3d angle_degrees must be finite",
                    ));
                }
                Ok(())
            }
            EffectKind::Glitch { displacement, .. } => {
                if *displacement == 0 {
                    return Err(SubburnError::validation(
                        "glitch displacement must be non-zero",
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/validate.rs"]
mod tests;
