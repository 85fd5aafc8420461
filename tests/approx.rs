//! Reciprocal and reciprocal-square-root estimates stay inside the
//! documented relative-error bound on every path.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanewise::sse;
use lanewise::F32x4;

// Hardware estimates guarantee |r - exact| / |exact| <= 1.5 * 2^-12; leave
// a little slack for the final f32 rounding of the reference itself.
const TOLERANCE: f32 = sse::ESTIMATE_RELATIVE_ERROR * 1.01;

fn assert_close(actual: f32, exact: f32) {
    let rel = ((actual - exact) / exact).abs();
    assert!(
        rel <= TOLERANCE,
        "estimate {actual} vs exact {exact}: relative error {rel}"
    );
}

#[test]
fn test_rcp_ps_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0501);

    for _ in 0..100 {
        let a = F32x4::from_array(core::array::from_fn(|_| {
            let m = rng.random_range(0.01f32..100.0);
            if rng.random() {
                m
            } else {
                -m
            }
        }));
        let r = sse::rcp_ps(a);
        for i in 0..F32x4::LANES {
            assert_close(r[i], 1.0 / a[i]);
        }
    }
}

#[test]
fn test_rcp_ss_lane0_only() {
    let a = sse::setr_ps(2.0, 5.0, 6.0, 7.0);
    let r = sse::rcp_ss(a);
    assert_close(r[0], 0.5);
    assert_eq!(r.to_array()[1..], [5.0, 6.0, 7.0]);
}

#[test]
fn test_rsqrt_ps_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0502);

    for _ in 0..100 {
        let a = F32x4::from_array(core::array::from_fn(|_| rng.random_range(0.01f32..1e6)));
        let r = sse::rsqrt_ps(a);
        for i in 0..F32x4::LANES {
            assert_close(r[i], 1.0 / a[i].sqrt());
        }
    }
}

#[test]
fn test_rsqrt_ss_lane0_only() {
    let a = sse::setr_ps(4.0, 5.0, 6.0, 7.0);
    let r = sse::rsqrt_ss(a);
    assert_close(r[0], 0.5);
    assert_eq!(r.to_array()[1..], [5.0, 6.0, 7.0]);
}

#[test]
fn test_estimates_scale_across_binades() {
    // power-of-two inputs have exact reciprocals, so the estimate error
    // bound applies to a known target
    for exp in -20..20 {
        let x = (2.0f32).powi(exp);
        let r = sse::rcp_ps(sse::set1_ps(x));
        assert_close(r[0], (2.0f32).powi(-exp));

        let r = sse::rsqrt_ps(sse::set1_ps(x * x));
        assert_close(r[0], (2.0f32).powi(-exp));
    }
}
