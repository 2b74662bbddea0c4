//! # Load Definitions
//!
//! Load patterns for a simply supported beam, with closed-form expressions
//! for reactions, shear, and bending moment.
//!
//! ## Supported Load Patterns
//! - Uniformly distributed load over the full span (kN/m)
//! - Concentrated load at midspan (kN)
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//!
//! ## Example
//! ```rust
//! use beam_core::loads::BeamLoad;
//!
//! // 10 kN/m over a 4 m span
//! let load = BeamLoad::udl(10.0);
//! assert_eq!(load.max_moment_nm(4.0), 20_000.0); // wL²/8
//! assert_eq!(load.max_shear_n(4.0), 20_000.0);   // wL/2
//! ```

use serde::{Deserialize, Serialize};

/// Load pattern selector for UIs and CLI prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadKind {
    /// Uniformly distributed load over the full span
    Udl,
    /// Concentrated load at midspan
    PointLoad,
}

impl LoadKind {
    /// All load kinds in standard order
    pub const ALL: [LoadKind; 2] = [LoadKind::Udl, LoadKind::PointLoad];

    /// Short abbreviation code
    pub fn code(&self) -> &'static str {
        match self {
            LoadKind::Udl => "UDL",
            LoadKind::PointLoad => "P",
        }
    }

    /// Human-readable description
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Udl => "Uniformly Distributed (UDL)",
            LoadKind::PointLoad => "Point Load at Midspan",
        }
    }

    /// Magnitude units for this load kind
    pub fn units_label(&self) -> &'static str {
        match self {
            LoadKind::Udl => "kN/m",
            LoadKind::PointLoad => "kN",
        }
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A load applied to a simply supported beam
///
/// Magnitudes are stored in user-facing kilonewton units; the formula
/// methods convert to newtons internally.
///
/// ## JSON Examples
///
/// ```json
/// { "type": "Udl", "magnitude_kn_per_m": 10.0 }
/// { "type": "Point", "magnitude_kn": 30.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BeamLoad {
    /// Uniform load (kN/m) over the entire span
    Udl { magnitude_kn_per_m: f64 },

    /// Point load (kN) applied at midspan
    Point { magnitude_kn: f64 },
}

impl BeamLoad {
    /// Create a full-span uniform load
    pub fn udl(magnitude_kn_per_m: f64) -> Self {
        BeamLoad::Udl { magnitude_kn_per_m }
    }

    /// Create a midspan point load
    pub fn point(magnitude_kn: f64) -> Self {
        BeamLoad::Point { magnitude_kn }
    }

    /// Get the load pattern selector for this load
    pub fn kind(&self) -> LoadKind {
        match self {
            BeamLoad::Udl { .. } => LoadKind::Udl,
            BeamLoad::Point { .. } => LoadKind::PointLoad,
        }
    }

    /// Magnitude as entered (kN/m for UDL, kN for point load)
    pub fn magnitude_kn(&self) -> f64 {
        match self {
            BeamLoad::Udl { magnitude_kn_per_m } => *magnitude_kn_per_m,
            BeamLoad::Point { magnitude_kn } => *magnitude_kn,
        }
    }

    /// Magnitude in newton units (N/m for UDL, N for point load)
    pub fn magnitude_n(&self) -> f64 {
        self.magnitude_kn() * 1000.0
    }

    /// Maximum bending moment (Nm) on a simply supported span
    pub fn max_moment_nm(&self, span_m: f64) -> f64 {
        match self {
            // M = wL²/8
            BeamLoad::Udl { .. } => self.magnitude_n() * span_m.powi(2) / 8.0,
            // M = PL/4
            BeamLoad::Point { .. } => self.magnitude_n() * span_m / 4.0,
        }
    }

    /// Maximum shear force (N) on a simply supported span
    pub fn max_shear_n(&self, span_m: f64) -> f64 {
        match self {
            // V = wL/2
            BeamLoad::Udl { .. } => self.magnitude_n() * span_m / 2.0,
            // V = P/2
            BeamLoad::Point { .. } => self.magnitude_n() / 2.0,
        }
    }

    /// Support reaction (N) at each end; symmetric for both load patterns
    pub fn reaction_n(&self, span_m: f64) -> f64 {
        self.max_shear_n(span_m)
    }

    /// Bending moment (Nm) at position x (m from left support)
    pub fn moment_at(&self, x_m: f64, span_m: f64) -> f64 {
        match self {
            BeamLoad::Udl { .. } => {
                // M(x) = wx(L-x)/2
                let w = self.magnitude_n();
                w * x_m * (span_m - x_m) / 2.0
            }
            BeamLoad::Point { .. } => {
                // M(x) = Px/2 up to midspan, P(L-x)/2 beyond
                let p = self.magnitude_n();
                if x_m <= span_m / 2.0 {
                    p * x_m / 2.0
                } else {
                    p * (span_m - x_m) / 2.0
                }
            }
        }
    }

    /// Shear force (N) at position x (m from left support)
    pub fn shear_at(&self, x_m: f64, span_m: f64) -> f64 {
        match self {
            BeamLoad::Udl { .. } => {
                // V(x) = w(L/2 - x)
                let w = self.magnitude_n();
                w * (span_m / 2.0 - x_m)
            }
            BeamLoad::Point { .. } => {
                // Constant ±P/2 either side of the load
                let p = self.magnitude_n();
                if x_m <= span_m / 2.0 {
                    p / 2.0
                } else {
                    -p / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udl_maxima() {
        let load = BeamLoad::udl(10.0); // 10 kN/m -> 10000 N/m
        assert_eq!(load.max_moment_nm(4.0), 20_000.0); // 10000 * 16 / 8
        assert_eq!(load.max_shear_n(4.0), 20_000.0); // 10000 * 4 / 2
    }

    #[test]
    fn test_point_maxima() {
        let load = BeamLoad::point(30.0); // 30 kN -> 30000 N
        assert_eq!(load.max_moment_nm(6.0), 45_000.0); // 30000 * 6 / 4
        assert_eq!(load.max_shear_n(6.0), 15_000.0); // 30000 / 2
    }

    #[test]
    fn test_udl_moment_curve() {
        let load = BeamLoad::udl(10.0);
        let span = 4.0;

        // Zero at supports
        assert_eq!(load.moment_at(0.0, span), 0.0);
        assert_eq!(load.moment_at(span, span), 0.0);

        // Peak at midspan equals wL²/8
        assert_eq!(load.moment_at(span / 2.0, span), load.max_moment_nm(span));

        // Symmetric about midspan
        assert!((load.moment_at(1.0, span) - load.moment_at(3.0, span)).abs() < 1e-9);
    }

    #[test]
    fn test_point_moment_curve() {
        let load = BeamLoad::point(30.0);
        let span = 6.0;

        assert_eq!(load.moment_at(0.0, span), 0.0);
        assert_eq!(load.moment_at(span, span), 0.0);
        assert_eq!(load.moment_at(3.0, span), 45_000.0);

        // Linear on each side: M(1.5) = half of M(3.0)
        assert!((load.moment_at(1.5, span) - 22_500.0).abs() < 1e-9);
        assert!((load.moment_at(4.5, span) - 22_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_udl_shear_curve() {
        let load = BeamLoad::udl(10.0);
        let span = 4.0;

        // +wL/2 at left support, -wL/2 at right, zero at midspan
        assert_eq!(load.shear_at(0.0, span), 20_000.0);
        assert_eq!(load.shear_at(span, span), -20_000.0);
        assert_eq!(load.shear_at(span / 2.0, span), 0.0);
    }

    #[test]
    fn test_point_shear_curve() {
        let load = BeamLoad::point(30.0);
        let span = 6.0;

        assert_eq!(load.shear_at(1.0, span), 15_000.0);
        assert_eq!(load.shear_at(5.0, span), -15_000.0);
    }

    #[test]
    fn test_kind_and_units() {
        assert_eq!(BeamLoad::udl(1.0).kind(), LoadKind::Udl);
        assert_eq!(BeamLoad::point(1.0).kind(), LoadKind::PointLoad);
        assert_eq!(LoadKind::Udl.units_label(), "kN/m");
        assert_eq!(LoadKind::PointLoad.units_label(), "kN");
        assert_eq!(LoadKind::Udl.code(), "UDL");
    }

    #[test]
    fn test_serialization() {
        let load = BeamLoad::udl(10.0);
        let json = serde_json::to_string(&load).unwrap();
        assert!(json.contains("\"type\":\"Udl\""));

        let roundtrip: BeamLoad = serde_json::from_str(&json).unwrap();
        assert_eq!(load, roundtrip);
    }
}
