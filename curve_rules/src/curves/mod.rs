//! Response curves - map a raw input measurement to a normalized utility.
//!
//! Every curve is a closed-form function of `x` shaped by four parameters.
//! Results are always sanitized: non-finite values become `0.0` and the
//! output is clamped to `[0, 1]`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The shape family of a response curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurveKind {
    #[default]
    Linear,
    Polynomial,
    Logistic,
    Logit,
    /// Gaussian bump centered on `0.5 + xshift`.
    Normal,
    Sine,
}

impl CurveKind {
    /// All curve kinds, in editor display order.
    pub const ALL: [CurveKind; 6] = [
        CurveKind::Linear,
        CurveKind::Polynomial,
        CurveKind::Logistic,
        CurveKind::Logit,
        CurveKind::Normal,
        CurveKind::Sine,
    ];

    /// Human-readable name of the curve kind.
    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Linear => "Linear",
            CurveKind::Polynomial => "Polynomial",
            CurveKind::Logistic => "Logistic",
            CurveKind::Logit => "Logit",
            CurveKind::Normal => "Normal",
            CurveKind::Sine => "Sine",
        }
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A parametric response curve.
///
/// Parameters are stored exactly as given; nothing is normalized on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseCurve {
    pub kind: CurveKind,
    #[serde(with = "crate::real")]
    pub slope: f64,
    #[serde(with = "crate::real")]
    pub exponent: f64,
    #[serde(with = "crate::real")]
    pub x_shift: f64,
    #[serde(with = "crate::real")]
    pub y_shift: f64,
}

impl Default for ResponseCurve {
    fn default() -> Self {
        Self::new(CurveKind::Linear, 1.0, 1.0, 0.0, 0.0)
    }
}

impl ResponseCurve {
    /// Create a curve with explicit parameters.
    pub fn new(kind: CurveKind, slope: f64, exponent: f64, x_shift: f64, y_shift: f64) -> Self {
        Self {
            kind,
            slope,
            exponent,
            x_shift,
            y_shift,
        }
    }

    /// Overwrite every parameter with those of `other`.
    pub fn copy_from(&mut self, other: &ResponseCurve) {
        *self = *other;
    }

    /// Evaluate the curve at `x`. Always returns a finite value in `[0, 1]`.
    pub fn compute(&self, x: f64) -> f64 {
        compute(
            self.kind,
            self.slope,
            self.exponent,
            self.x_shift,
            self.y_shift,
            x,
        )
    }
}

/// Evaluate a curve of the given kind at `x`.
///
/// Never panics; out-of-domain inputs (Logit edges, NaN, infinities)
/// degrade to `0.0` through sanitation.
pub fn compute(kind: CurveKind, slope: f64, exponent: f64, xshift: f64, yshift: f64, x: f64) -> f64 {
    let raw = match kind {
        CurveKind::Linear => slope * (x - xshift) + yshift,
        CurveKind::Polynomial => slope * (x - xshift).powf(exponent) + yshift,
        CurveKind::Logistic => {
            slope / (1.0 + (-10.0 * exponent * (x - 0.5 - xshift)).exp()) + yshift
        }
        CurveKind::Logit => {
            let shifted = x - xshift;
            slope * (shifted / (1.0 - shifted)).ln() / 5.0 + 0.5 + yshift
        }
        CurveKind::Normal => {
            let d = x - xshift - 0.5;
            slope * (-30.0 * exponent * d * d).exp() + yshift
        }
        CurveKind::Sine => 0.5 * slope * (2.0 * PI * (x - xshift)).sin() + 0.5 + yshift,
    };

    sanitize(raw)
}

/// Map non-finite values to `0.0` and clamp into `[0, 1]`.
pub fn sanitize(y: f64) -> f64 {
    if !y.is_finite() {
        return 0.0;
    }
    y.clamp(0.0, 1.0)
}
