//! Easing functions that reshape a linear progress value.
//!
//! All functions map a progress `t` in [0, 1] to a shaped progress value.
//! The cubic Bézier primitive underlies `ease-in`, `ease-out`, and the
//! caller-supplied `custom` curve.

use crate::config::CurveStyle;

/// Evaluates the y-coordinate of a cubic Bézier at `t`.
///
/// Control endpoints are implicitly (0, 0) and (1, 1); `p1` and `p2` are the
/// y-values of the two inner control points. Standard Bernstein form.
pub fn cubic_bezier_y(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Applies the named easing curve to progress `t`.
///
/// `p1` and `p2` are only consulted for [`CurveStyle::Custom`]. The `stepped`
/// curve quantizes to 5 steps (`floor(t·5)/4`), so it reaches 1.0 at `t = 0.8`
/// and overshoots to 1.25 at `t = 1.0` — quantized output is not re-clamped.
pub fn ease(style: CurveStyle, t: f64, p1: f64, p2: f64) -> f64 {
    match style {
        CurveStyle::Linear => t,
        CurveStyle::EaseIn => cubic_bezier_y(t, 0.42, 0.0),
        CurveStyle::EaseOut => cubic_bezier_y(t, 0.0, 0.58),
        CurveStyle::Sinusoidal => 0.5 - 0.5 * (t * std::f64::consts::PI).cos(),
        CurveStyle::Stepped => (t * 5.0).floor() / 4.0,
        CurveStyle::Custom => cubic_bezier_y(t, p1, p2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Bézier primitive --

    #[test]
    fn bezier_is_anchored_at_zero_and_one() {
        assert!(approx_eq(cubic_bezier_y(0.0, 0.42, 0.0), 0.0));
        assert!(approx_eq(cubic_bezier_y(1.0, 0.42, 0.0), 1.0));
        assert!(approx_eq(cubic_bezier_y(0.0, 0.3, 0.9), 0.0));
        assert!(approx_eq(cubic_bezier_y(1.0, 0.3, 0.9), 1.0));
    }

    #[test]
    fn bezier_midpoint_with_symmetric_controls_is_half() {
        // p1 + p2 = 1 makes the curve rotationally symmetric about (0.5, 0.5).
        assert!(approx_eq(cubic_bezier_y(0.5, 0.2, 0.8), 0.5));
        assert!(approx_eq(cubic_bezier_y(0.5, 0.42, 0.58), 0.5));
    }

    // -- Named styles --

    #[test]
    fn linear_is_identity() {
        for t in [0.0, 0.3, 0.5, 0.77, 1.0] {
            assert!(approx_eq(ease(CurveStyle::Linear, t, 0.0, 0.0), t));
        }
    }

    #[test]
    fn ease_in_starts_slow() {
        // 3·(0.5)²·0.5·0.42 + 0.5³ = 0.2825
        let v = ease(CurveStyle::EaseIn, 0.5, 0.0, 0.0);
        assert!(approx_eq(v, 0.2825), "ease-in at 0.5: {v}");
        assert!(v < 0.5, "ease-in should lag linear at midpoint");
    }

    #[test]
    fn ease_out_reference_value_at_midpoint() {
        // ease-out uses (0, 0.58): 3·0.5·(0.5)²·0.58 + 0.5³ = 0.3425
        let v = ease(CurveStyle::EaseOut, 0.5, 0.0, 0.0);
        assert!(approx_eq(v, 0.3425), "ease-out at 0.5: {v}");
    }

    #[test]
    fn sinusoidal_hits_known_points() {
        assert!(approx_eq(ease(CurveStyle::Sinusoidal, 0.0, 0.0, 0.0), 0.0));
        assert!(approx_eq(ease(CurveStyle::Sinusoidal, 0.5, 0.0, 0.0), 0.5));
        assert!(approx_eq(ease(CurveStyle::Sinusoidal, 1.0, 0.0, 0.0), 1.0));
        let quarter = ease(CurveStyle::Sinusoidal, 0.25, 0.0, 0.0);
        assert!(
            approx_eq(quarter, 0.5 - 0.5 * (std::f64::consts::PI / 4.0).cos()),
            "sinusoidal at 0.25: {quarter}"
        );
    }

    #[test]
    fn stepped_quantizes_to_five_levels() {
        assert!(approx_eq(ease(CurveStyle::Stepped, 0.0, 0.0, 0.0), 0.0));
        assert!(approx_eq(ease(CurveStyle::Stepped, 0.1, 0.0, 0.0), 0.0));
        assert!(approx_eq(ease(CurveStyle::Stepped, 0.2, 0.0, 0.0), 0.25));
        assert!(approx_eq(ease(CurveStyle::Stepped, 0.5, 0.0, 0.0), 0.5));
        assert!(approx_eq(ease(CurveStyle::Stepped, 0.8, 0.0, 0.0), 1.0));
    }

    #[test]
    fn stepped_overshoots_at_exactly_one() {
        // floor(5)/4 = 1.25: the quantizer's last step lands above 1.
        assert!(approx_eq(ease(CurveStyle::Stepped, 1.0, 0.0, 0.0), 1.25));
    }

    #[test]
    fn custom_uses_supplied_control_points() {
        let v = ease(CurveStyle::Custom, 0.5, 0.42, 0.0);
        let reference = ease(CurveStyle::EaseIn, 0.5, 0.0, 0.0);
        assert!(approx_eq(v, reference), "custom(0.42, 0) should match ease-in");
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn bezier_endpoints_hold_for_any_controls(
                p1 in -1.0_f64..=2.0,
                p2 in -1.0_f64..=2.0,
            ) {
                prop_assert!((cubic_bezier_y(0.0, p1, p2)).abs() < 1e-12);
                prop_assert!((cubic_bezier_y(1.0, p1, p2) - 1.0).abs() < 1e-12);
            }

            #[test]
            fn monotone_styles_stay_in_unit_range(t in 0.0_f64..=1.0) {
                for style in [CurveStyle::Linear, CurveStyle::EaseIn, CurveStyle::EaseOut, CurveStyle::Sinusoidal] {
                    let v = ease(style, t, 0.0, 0.0);
                    prop_assert!(
                        (-1e-12..=1.0 + 1e-12).contains(&v),
                        "{style:?} at t={t} produced {v}"
                    );
                }
            }

            #[test]
            fn sinusoidal_is_monotonic(
                a in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
            ) {
                prop_assume!(a < b);
                let va = ease(CurveStyle::Sinusoidal, a, 0.0, 0.0);
                let vb = ease(CurveStyle::Sinusoidal, b, 0.0, 0.0);
                prop_assert!(va <= vb, "sinusoidal not monotonic: f({a})={va} > f({b})={vb}");
            }
        }
    }
}
