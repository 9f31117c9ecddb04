//! Distance-based LOD tier classification with fixed thresholds.

/// Maximum camera distance for the near (full detail) tier.
pub const NEAR_MAX_DISTANCE: f32 = 50.0;

/// Maximum camera distance for the mid tier. Beyond this lies the far tier.
pub const MID_MAX_DISTANCE: f32 = 100.0;

/// Discrete level-of-detail tier, derived from camera distance each time the
/// classifier runs. Never stored; the blend state keeps factors instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LodTier {
    /// Full detail, distance below [`NEAR_MAX_DISTANCE`].
    Near,
    /// Reduced detail, distance below [`MID_MAX_DISTANCE`].
    Mid,
    /// Minimum detail, everything beyond.
    Far,
}

impl LodTier {
    /// Canonical blend factor bound to this tier.
    pub fn blend_factor(self) -> f32 {
        match self {
            LodTier::Near => 1.0,
            LodTier::Mid => 0.5,
            LodTier::Far => 0.0,
        }
    }
}

/// Classify a camera-to-object distance into a LOD tier.
///
/// Thresholds are fixed constants with no hysteresis: a distance sitting
/// exactly on a boundary re-triggers a transition on every throttled
/// classification. Documented policy for undefined inputs rather than a
/// silent fallback: a negative distance is clamped to 0.0 (near tier), and
/// NaN classifies as far.
pub fn classify_distance(distance: f32) -> LodTier {
    if distance.is_nan() {
        return LodTier::Far;
    }
    let distance = distance.max(0.0);
    if distance < NEAR_MAX_DISTANCE {
        LodTier::Near
    } else if distance < MID_MAX_DISTANCE {
        LodTier::Mid
    } else {
        LodTier::Far
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every classification lands on one of the three canonical factors.
    #[test]
    fn test_canonical_factors_only() {
        for d in [0.0, 10.0, 49.99, 50.0, 75.0, 99.99, 100.0, 1e6] {
            let factor = classify_distance(d).blend_factor();
            assert!(
                factor == 0.0 || factor == 0.5 || factor == 1.0,
                "unexpected factor {factor} for distance {d}"
            );
        }
    }

    /// Exact boundary mapping at the two thresholds.
    #[test]
    fn test_threshold_boundary_behavior() {
        assert_eq!(classify_distance(49.99), LodTier::Near);
        assert_eq!(classify_distance(50.0), LodTier::Mid);
        assert_eq!(classify_distance(99.99), LodTier::Mid);
        assert_eq!(classify_distance(100.0), LodTier::Far);
    }

    /// The blend factor must not increase as the camera moves away.
    #[test]
    fn test_factor_non_increasing_with_distance() {
        let distances = [0.0, 25.0, 49.9, 50.0, 80.0, 99.9, 100.0, 500.0];
        let mut prev = f32::INFINITY;
        for &d in &distances {
            let factor = classify_distance(d).blend_factor();
            assert!(
                factor <= prev,
                "factor must not increase with distance: d={d}, factor={factor}, prev={prev}"
            );
            prev = factor;
        }
    }

    /// Negative distances are clamped to zero and classify as near.
    #[test]
    fn test_negative_distance_clamps_to_near() {
        assert_eq!(classify_distance(-1.0), LodTier::Near);
        assert_eq!(classify_distance(-1e9), LodTier::Near);
    }

    /// NaN distance classifies as far rather than propagating.
    #[test]
    fn test_nan_distance_is_far() {
        assert_eq!(classify_distance(f32::NAN), LodTier::Far);
    }

    #[test]
    fn test_infinite_distance_is_far() {
        assert_eq!(classify_distance(f32::INFINITY), LodTier::Far);
    }
}
