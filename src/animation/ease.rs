/// Easing functions used to map normalized elapsed time to animation progress.
///
/// Every variant is monotonic on `[0, 1]` and maps `0 -> 0`, `1 -> 1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// `t^(2 * factor)`; `factor` must be > 0.
    Accelerate(f64),
    /// `1 - (1 - t)^(2 * factor)`; `factor` must be > 0.
    Decelerate(f64),
    /// Cosine ease-in/out.
    AccelerateDecelerate,
}

impl Default for Ease {
    fn default() -> Self {
        Self::Decelerate(2.0)
    }
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Accelerate(factor) => t.powf(2.0 * sane_factor(factor)),
            Self::Decelerate(factor) => 1.0 - (1.0 - t).powf(2.0 * sane_factor(factor)),
            Self::AccelerateDecelerate => {
                ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5
            }
        }
    }

    /// Whether the parameters of this ease are usable.
    pub fn is_valid(self) -> bool {
        match self {
            Self::Accelerate(f) | Self::Decelerate(f) => f.is_finite() && f > 0.0,
            _ => true,
        }
    }
}

fn sane_factor(factor: f64) -> f64 {
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
