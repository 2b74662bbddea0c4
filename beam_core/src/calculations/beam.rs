//! # Simply Supported Steel Beam Design
//!
//! Sizes a simply supported steel beam under a uniform or midspan point load
//! per LRFD flexural demand.
//!
//! ## Assumptions
//!
//! - Simply supported (pin-roller) boundary conditions
//! - Single load pattern: full-span UDL or concentrated load at midspan
//! - Flexure governs; the required elastic section modulus is reported for
//!   comparison against standard rolled shapes
//! - Resistance factor φ = 0.90
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use beam_core::calculations::beam::{calculate, BeamInput};
//! use beam_core::loads::BeamLoad;
//! use beam_core::materials::SteelGrade;
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     span_m: 4.0,
//!     load: BeamLoad::udl(10.0), // 10 kN/m
//!     grade: SteelGrade::A36,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.max_moment_nm, 20_000.0);
//! assert_eq!(result.max_shear_n, 20_000.0);
//! assert!((result.required_modulus_mm3 - 88_888.89).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::diagram::MomentDiagram;
use crate::errors::{CalcError, CalcResult};
use crate::loads::BeamLoad;
use crate::materials::SteelGrade;
use crate::units::{KilonewtonMeters, Kilonewtons, NewtonMeters, Newtons};

/// Flexural resistance factor φ per LRFD
pub const RESISTANCE_FACTOR: f64 = 0.9;

/// Span sanity cap (m); simple beam sizing is meaningless beyond this
const MAX_SPAN_M: f64 = 100.0;

/// Input parameters for a simply supported steel beam.
///
/// Spans are in meters; load magnitudes in kN or kN/m depending on pattern.
///
/// ## JSON Example (UDL)
///
/// ```json
/// {
///   "label": "B-1",
///   "span_m": 4.0,
///   "load": { "type": "Udl", "magnitude_kn_per_m": 10.0 },
///   "grade": "A36"
/// }
/// ```
///
/// ## JSON Example (Point Load)
///
/// ```json
/// {
///   "label": "GB-2",
///   "span_m": 6.0,
///   "load": { "type": "Point", "magnitude_kn": 30.0 },
///   "grade": "A992"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1", "Transfer Beam at Grid C")
    pub label: String,

    /// Clear span in meters
    pub span_m: f64,

    /// Applied load (UDL or midspan point load)
    pub load: BeamLoad,

    /// Steel grade (sets yield strength)
    pub grade: SteelGrade,
}

impl BeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be a finite number",
            ));
        }
        if self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be positive",
            ));
        }
        if self.span_m > MAX_SPAN_M {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span exceeds 100 m - outside simple beam sizing",
            ));
        }
        let magnitude = self.load.magnitude_kn();
        if !magnitude.is_finite() {
            return Err(CalcError::invalid_input(
                "load",
                magnitude.to_string(),
                "Load magnitude must be a finite number",
            ));
        }
        if magnitude < 0.0 {
            return Err(CalcError::invalid_input(
                "load",
                magnitude.to_string(),
                "Load magnitude must be non-negative",
            ));
        }
        Ok(())
    }

    /// Bending-moment diagram for this beam, sampled lazily
    pub fn moment_diagram(&self) -> MomentDiagram {
        MomentDiagram::new(self.span_m, self.load)
    }
}

/// Results from the beam design calculation.
///
/// Scalars are in base SI units; use the typed accessors or the kNm/kN
/// helpers for display.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_moment_nm": 20000.0,
///   "max_shear_n": 20000.0,
///   "required_modulus_mm3": 88888.89,
///   "yield_strength_mpa": 250.0,
///   "resistance_factor": 0.9,
///   "moment_diagram": [[0.0, 0.0], [0.0404, 799.9]]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamResult {
    /// Maximum bending moment (Nm)
    ///
    /// For a simply supported beam: M = wL²/8 (UDL) or M = PL/4 (midspan point load).
    pub max_moment_nm: f64,

    /// Maximum shear force (N)
    ///
    /// V = wL/2 (UDL) or V = P/2 (midspan point load).
    pub max_shear_n: f64,

    /// Required elastic section modulus (mm³)
    ///
    /// S_req = M / (φ · Fy), for comparison against rolled-shape tables.
    pub required_modulus_mm3: f64,

    /// Yield strength used (MPa) - shown for transparency
    pub yield_strength_mpa: f64,

    /// Resistance factor φ applied
    pub resistance_factor: f64,

    /// Sampled (position m, moment Nm) pairs along the span for plotting
    pub moment_diagram: Vec<(f64, f64)>,
}

impl BeamResult {
    /// Maximum bending moment as a typed value
    pub fn max_moment(&self) -> NewtonMeters {
        NewtonMeters(self.max_moment_nm)
    }

    /// Maximum shear force as a typed value
    pub fn max_shear(&self) -> Newtons {
        Newtons(self.max_shear_n)
    }

    /// Maximum bending moment in kNm (for display)
    pub fn max_moment_knm(&self) -> f64 {
        KilonewtonMeters::from(self.max_moment()).value()
    }

    /// Maximum shear force in kN (for display)
    pub fn max_shear_kn(&self) -> f64 {
        Kilonewtons::from(self.max_shear()).value()
    }
}

/// Calculate beam demand and required section modulus.
///
/// This is a pure function suitable for LLM invocation. Each call computes
/// from scratch; nothing is cached between invocations.
///
/// # Arguments
///
/// * `input` - Beam parameters (span, load, grade)
///
/// # Returns
///
/// * `Ok(BeamResult)` - Demand scalars plus the sampled moment diagram
/// * `Err(CalcError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use beam_core::calculations::beam::{calculate, BeamInput};
/// use beam_core::loads::BeamLoad;
/// use beam_core::materials::SteelGrade;
///
/// let input = BeamInput {
///     label: "GB-2".to_string(),
///     span_m: 6.0,
///     load: BeamLoad::point(30.0),
///     grade: SteelGrade::A992,
/// };
///
/// let result = calculate(&input).expect("Calculation should succeed");
/// assert_eq!(result.max_moment_nm, 45_000.0);
/// ```
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    // Validate inputs
    input.validate()?;

    let props = input.grade.properties();

    // === Calculate Demand ===

    // Maximum moment: wL²/8 or PL/4 (result in Nm)
    let max_moment_nm = input.load.max_moment_nm(input.span_m);

    // Maximum shear: wL/2 or P/2 (result in N)
    let max_shear_n = input.load.max_shear_n(input.span_m);

    // === Required Section Modulus ===

    // S = M / (φ·Fy), with Fy in Pa; convert m³ to mm³
    let fy_pa = props.fy_mpa * 1.0e6;
    let required_modulus_m3 = max_moment_nm / (RESISTANCE_FACTOR * fy_pa);
    let required_modulus_mm3 = required_modulus_m3 * 1.0e9;

    // === Moment Diagram ===

    let moment_diagram = input.moment_diagram().sample();

    Ok(BeamResult {
        max_moment_nm,
        max_shear_n,
        required_modulus_mm3,
        yield_strength_mpa: props.fy_mpa,
        resistance_factor: RESISTANCE_FACTOR,
        moment_diagram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn udl_beam() -> BeamInput {
        BeamInput {
            label: "Test Beam".to_string(),
            span_m: 4.0,
            load: BeamLoad::udl(10.0),
            grade: SteelGrade::A36,
        }
    }

    fn point_beam() -> BeamInput {
        BeamInput {
            label: "Girder".to_string(),
            span_m: 6.0,
            load: BeamLoad::point(30.0),
            grade: SteelGrade::A992,
        }
    }

    #[test]
    fn test_udl_scenario() {
        // 4 m span, 10 kN/m, A36
        let result = calculate(&udl_beam()).unwrap();

        // M = 10000 * 4² / 8 = 20000 Nm
        assert_eq!(result.max_moment_nm, 20_000.0);
        // V = 10000 * 4 / 2 = 20000 N
        assert_eq!(result.max_shear_n, 20_000.0);
        // S = 20000 / (0.9 * 250e6) * 1e9 = 88888.89 mm³
        assert!((result.required_modulus_mm3 - 88_888.89).abs() < 0.01);
    }

    #[test]
    fn test_point_load_scenario() {
        // 6 m span, 30 kN at midspan, A992
        let result = calculate(&point_beam()).unwrap();

        // M = 30000 * 6 / 4 = 45000 Nm
        assert_eq!(result.max_moment_nm, 45_000.0);
        // V = 30000 / 2 = 15000 N
        assert_eq!(result.max_shear_n, 15_000.0);
        // S = 45000 / (0.9 * 345e6) * 1e9 = 144927.54 mm³
        assert!((result.required_modulus_mm3 - 144_927.54).abs() < 0.01);
    }

    #[test]
    fn test_display_helpers() {
        let result = calculate(&udl_beam()).unwrap();
        assert_eq!(result.max_moment_knm(), 20.0);
        assert_eq!(result.max_shear_kn(), 20.0);
    }

    #[test]
    fn test_modulus_scales_inversely_with_yield() {
        // Same demand, different grades: S_A36 / S_A992 = 345/250
        let mut a36 = udl_beam();
        a36.grade = SteelGrade::A36;
        let mut a992 = udl_beam();
        a992.grade = SteelGrade::A992;

        let r36 = calculate(&a36).unwrap();
        let r992 = calculate(&a992).unwrap();

        let ratio = r36.required_modulus_mm3 / r992.required_modulus_mm3;
        assert!((ratio - 345.0 / 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_diagram_in_result() {
        let result = calculate(&udl_beam()).unwrap();
        assert_eq!(result.moment_diagram.len(), 100);

        // Zero at both ends
        assert_eq!(result.moment_diagram.first().unwrap().1, 0.0);
        assert_eq!(result.moment_diagram.last().unwrap().1, 0.0);

        // Every sampled moment is bounded by the maximum
        assert!(result
            .moment_diagram
            .iter()
            .all(|(_, m)| *m <= result.max_moment_nm + 1e-9));
    }

    #[test]
    fn test_zero_load_is_degenerate_not_error() {
        let mut beam = udl_beam();
        beam.load = BeamLoad::udl(0.0);
        let result = calculate(&beam).unwrap();
        assert_eq!(result.max_moment_nm, 0.0);
        assert_eq!(result.max_shear_n, 0.0);
        assert_eq!(result.required_modulus_mm3, 0.0);
    }

    #[test]
    fn test_invalid_span() {
        let mut beam = udl_beam();
        beam.span_m = -5.0;
        assert!(calculate(&beam).is_err());

        beam.span_m = 0.0;
        assert!(calculate(&beam).is_err());

        beam.span_m = f64::NAN;
        assert!(calculate(&beam).is_err());

        beam.span_m = 250.0;
        assert!(calculate(&beam).is_err());
    }

    #[test]
    fn test_negative_load_rejected() {
        let mut beam = udl_beam();
        beam.load = BeamLoad::udl(-10.0);
        let err = calculate(&beam).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let beam = point_beam();
        let json = serde_json::to_string_pretty(&beam).unwrap();
        let roundtrip: BeamInput = serde_json::from_str(&json).unwrap();
        assert_eq!(beam.span_m, roundtrip.span_m);
        assert_eq!(beam.load, roundtrip.load);
        assert_eq!(beam.grade, roundtrip.grade);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&udl_beam()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        // Should contain key fields
        assert!(json.contains("max_moment_nm"));
        assert!(json.contains("required_modulus_mm3"));
        assert!(json.contains("moment_diagram"));

        let roundtrip: BeamResult = serde_json::from_str(&json).unwrap();
        assert!((result.required_modulus_mm3 - roundtrip.required_modulus_mm3).abs() < 0.001);
        assert_eq!(result.moment_diagram.len(), roundtrip.moment_diagram.len());
    }

    #[test]
    fn test_fresh_results_per_call() {
        // Two identical calls produce equal, independent results
        let beam = udl_beam();
        let a = calculate(&beam).unwrap();
        let b = calculate(&beam).unwrap();
        assert_eq!(a.max_moment_nm, b.max_moment_nm);
        assert_eq!(a.moment_diagram, b.moment_diagram);
    }
}
