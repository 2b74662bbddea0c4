//! # Steel Materials
//!
//! Material grades and reference properties for structural steel beams.
//!
//! Yield strengths follow the ASTM designations:
//!
//! | Grade | Fy (MPa) | Typical use |
//! |-------|----------|-------------|
//! | A36   | 250      | Plates, angles, misc. shapes |
//! | A992  | 345      | Wide-flange beams and columns |
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::SteelGrade;
//!
//! let grade = SteelGrade::A992;
//! assert_eq!(grade.properties().fy_mpa, 345.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// Modulus of elasticity for structural steel (MPa).
///
/// Applied uniformly to all grades; E varies negligibly between A36 and A992.
pub const STEEL_E_MPA: f64 = 200_000.0;

/// Structural steel grades per ASTM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// ASTM A36 carbon steel (Fy = 250 MPa)
    A36,
    /// ASTM A992 high-strength steel (Fy = 345 MPa)
    A992,
}

impl SteelGrade {
    /// All steel grade variants for UI selection
    pub const ALL: [SteelGrade; 2] = [SteelGrade::A36, SteelGrade::A992];

    /// Get the ASTM code string (e.g., "A36")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::A36 => "A36",
            SteelGrade::A992 => "A992",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "A36" | "ASTM A36" | "36" => Ok(SteelGrade::A36),
            "A992" | "ASTM A992" | "992" => Ok(SteelGrade::A992),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::A36 => "ASTM A36",
            SteelGrade::A992 => "ASTM A992",
        }
    }

    /// Yield strength Fy (MPa)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::A36 => 250.0,
            SteelGrade::A992 => 345.0,
        }
    }

    /// Yield strength Fy as a typed stress value
    pub fn fy(&self) -> Megapascals {
        Megapascals(self.fy_mpa())
    }

    /// Get the reference design values for this grade
    pub fn properties(&self) -> SteelProperties {
        SteelProperties {
            grade: *self,
            fy_mpa: self.fy_mpa(),
            e_mpa: STEEL_E_MPA,
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reference design values for a steel grade
///
/// All stresses in MPa. These are nominal values before resistance factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    /// Grade
    pub grade: SteelGrade,
    /// Yield strength Fy (MPa)
    pub fy_mpa: f64,
    /// Modulus of elasticity E (MPa)
    pub e_mpa: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_strengths() {
        assert_eq!(SteelGrade::A36.fy_mpa(), 250.0);
        assert_eq!(SteelGrade::A992.fy_mpa(), 345.0);
    }

    #[test]
    fn test_shared_modulus_of_elasticity() {
        // Same E for both grades
        assert_eq!(SteelGrade::A36.properties().e_mpa, SteelGrade::A992.properties().e_mpa);
        assert_eq!(SteelGrade::A36.properties().e_mpa, 200_000.0);
    }

    #[test]
    fn test_codes_and_display() {
        assert_eq!(SteelGrade::A36.code(), "A36");
        assert_eq!(SteelGrade::A992.code(), "A992");
        assert_eq!(SteelGrade::A992.display_name(), "ASTM A992");
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(SteelGrade::from_str_flexible("a36").unwrap(), SteelGrade::A36);
        assert_eq!(SteelGrade::from_str_flexible(" A992 ").unwrap(), SteelGrade::A992);
        assert_eq!(SteelGrade::from_str_flexible("992").unwrap(), SteelGrade::A992);
        assert!(SteelGrade::from_str_flexible("A500").is_err());
    }

    #[test]
    fn test_serialization() {
        let grade = SteelGrade::A992;
        let json = serde_json::to_string(&grade).unwrap();
        assert_eq!(json, "\"A992\"");

        let parsed: SteelGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SteelGrade::A992);
    }

    #[test]
    fn test_all_contains_all_variants() {
        assert_eq!(SteelGrade::ALL.len(), 2);
    }
}
