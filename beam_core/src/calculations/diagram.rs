//! # Bending-Moment Diagram Sampling
//!
//! Samples the bending moment along a simply supported span at evenly
//! spaced positions for plotting. The sample sequence is produced lazily;
//! calling [`MomentDiagram::points`] again restarts it from x = 0.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::diagram::MomentDiagram;
//! use beam_core::loads::BeamLoad;
//!
//! let diagram = MomentDiagram::new(4.0, BeamLoad::udl(10.0));
//!
//! let points: Vec<(f64, f64)> = diagram.points().collect();
//! assert_eq!(points.len(), 100);
//! assert_eq!(points[0], (0.0, 0.0));
//! assert_eq!(points[99], (4.0, 0.0));
//! ```

use crate::loads::BeamLoad;

/// Number of evenly spaced sample positions along the span
pub const SAMPLE_POINTS: usize = 100;

/// Moment-vs-position curve for a loaded simply supported span
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentDiagram {
    /// Span length (m)
    span_m: f64,
    /// Applied load
    load: BeamLoad,
}

impl MomentDiagram {
    /// Create a diagram for the given span and load
    pub fn new(span_m: f64, load: BeamLoad) -> Self {
        MomentDiagram { span_m, load }
    }

    /// Span length (m)
    pub fn span_m(&self) -> f64 {
        self.span_m
    }

    /// Bending moment (Nm) at position x (m from left support)
    pub fn moment_at(&self, x_m: f64) -> f64 {
        self.load.moment_at(x_m, self.span_m)
    }

    /// Lazily iterate (position m, moment Nm) pairs at [`SAMPLE_POINTS`]
    /// evenly spaced positions from 0 to the span, endpoints included.
    ///
    /// The iterator borrows the diagram; each call starts a fresh pass.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..SAMPLE_POINTS).map(move |i| {
            // t hits exactly 0.0 and 1.0 so the support positions are exact
            let t = i as f64 / (SAMPLE_POINTS - 1) as f64;
            let x = self.span_m * t;
            (x, self.moment_at(x))
        })
    }

    /// Collect the sampled curve for plotting or serialization
    pub fn sample(&self) -> Vec<(f64, f64)> {
        self.points().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_and_endpoints() {
        let diagram = MomentDiagram::new(4.0, BeamLoad::udl(10.0));
        let points = diagram.sample();

        assert_eq!(points.len(), SAMPLE_POINTS);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[SAMPLE_POINTS - 1].0, 4.0);
    }

    #[test]
    fn test_udl_curve_symmetric_and_zero_at_ends() {
        let diagram = MomentDiagram::new(4.0, BeamLoad::udl(10.0));
        let points = diagram.sample();

        assert_eq!(points[0].1, 0.0);
        assert_eq!(points[SAMPLE_POINTS - 1].1, 0.0);

        // Symmetric: sample i mirrors sample (n-1-i)
        for i in 0..SAMPLE_POINTS / 2 {
            let mirrored = SAMPLE_POINTS - 1 - i;
            assert!(
                (points[i].1 - points[mirrored].1).abs() < 1e-6,
                "asymmetry at sample {i}"
            );
        }
    }

    #[test]
    fn test_point_load_curve_piecewise_linear() {
        let span = 6.0;
        let diagram = MomentDiagram::new(span, BeamLoad::point(30.0));

        // Peak at midspan equals PL/4
        assert_eq!(diagram.moment_at(span / 2.0), 45_000.0);
        assert_eq!(diagram.moment_at(0.0), 0.0);
        assert_eq!(diagram.moment_at(span), 0.0);

        // Constant slope on the rising leg: P/2 per meter
        let slope = (diagram.moment_at(2.0) - diagram.moment_at(1.0)) / 1.0;
        assert!((slope - 15_000.0).abs() < 1e-9);

        // Mirror slope on the falling leg
        let slope = (diagram.moment_at(5.0) - diagram.moment_at(4.0)) / 1.0;
        assert!((slope + 15_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_points_is_restartable() {
        let diagram = MomentDiagram::new(4.0, BeamLoad::udl(10.0));

        let first: Vec<(f64, f64)> = diagram.points().collect();
        let second: Vec<(f64, f64)> = diagram.points().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_points_is_lazy() {
        let diagram = MomentDiagram::new(4.0, BeamLoad::udl(10.0));

        // Partial consumption works without computing the full curve
        let mut iter = diagram.points();
        assert_eq!(iter.next().unwrap(), (0.0, 0.0));
        assert!(iter.next().unwrap().1 > 0.0);
    }

    #[test]
    fn test_peak_sample_near_maximum() {
        // The even grid straddles midspan, so the sampled peak sits just
        // below PL/4 for a point load but matches wL²/8 closely for UDL
        let udl = MomentDiagram::new(4.0, BeamLoad::udl(10.0));
        let sampled_max = udl
            .points()
            .map(|(_, m)| m)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(sampled_max <= 20_000.0);
        assert!(sampled_max > 19_990.0);
    }
}
