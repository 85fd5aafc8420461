//! Comparison predicates, their NaN behavior, and the sign-bit masks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanewise::sse;
use lanewise::F32x4;

fn random_f32x4(rng: &mut StdRng) -> F32x4 {
    F32x4::from_array(core::array::from_fn(|_| rng.random_range(-1000.0..1000.0)))
}

fn mask_bits(v: F32x4) -> [u32; 4] {
    v.to_array().map(f32::to_bits)
}

#[test]
fn test_ordered_predicates_match_scalar_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0101);

    let cases: [(fn(F32x4, F32x4) -> F32x4, fn(f32, f32) -> bool); 5] = [
        (sse::cmpeq_ps, |x, y| x == y),
        (sse::cmplt_ps, |x, y| x < y),
        (sse::cmple_ps, |x, y| x <= y),
        (sse::cmpgt_ps, |x, y| x > y),
        (sse::cmpge_ps, |x, y| x >= y),
    ];

    for _ in 0..100 {
        let a = random_f32x4(&mut rng);
        // force some equal lanes so eq/le/ge see both outcomes
        let mut b = random_f32x4(&mut rng).to_array();
        b[2] = a[2];
        let b = F32x4::from_array(b);

        for (op, reference) in cases {
            let bits = mask_bits(op(a, b));
            for i in 0..F32x4::LANES {
                let expected = if reference(a[i], b[i]) { u32::MAX } else { 0 };
                assert_eq!(bits[i], expected, "lane {i}: {} vs {}", a[i], b[i]);
            }
        }
    }
}

#[test]
fn test_negated_predicates_are_complements() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0102);

    let pairs: [(fn(F32x4, F32x4) -> F32x4, fn(F32x4, F32x4) -> F32x4); 5] = [
        (sse::cmpeq_ps, sse::cmpneq_ps),
        (sse::cmplt_ps, sse::cmpnlt_ps),
        (sse::cmple_ps, sse::cmpnle_ps),
        (sse::cmpgt_ps, sse::cmpngt_ps),
        (sse::cmpge_ps, sse::cmpnge_ps),
    ];

    for _ in 0..100 {
        let mut a = random_f32x4(&mut rng).to_array();
        let b = random_f32x4(&mut rng);
        a[1] = f32::NAN;
        let a = F32x4::from_array(a);

        for (pos, neg) in pairs {
            let p = mask_bits(pos(a, b));
            let n = mask_bits(neg(a, b));
            for i in 0..F32x4::LANES {
                assert_eq!(p[i], !n[i], "lane {i} is not a bitwise complement");
            }
        }
    }
}

#[test]
fn test_cmpnlt_differs_from_cmpge_on_nan() {
    let a = sse::setr_ps(f32::NAN, 2.0, 3.0, 4.0);
    let b = sse::setr_ps(1.0, 2.0, 3.0, 4.0);

    let nlt = mask_bits(sse::cmpnlt_ps(a, b));
    let ge = mask_bits(sse::cmpge_ps(a, b));

    // NaN lane: NOT(a < b) holds, a >= b does not
    assert_eq!(nlt[0], u32::MAX);
    assert_eq!(ge[0], 0);
    for i in 1..4 {
        assert_eq!(nlt[i], u32::MAX);
        assert_eq!(ge[i], u32::MAX);
    }
}

#[test]
fn test_ordered_predicates_false_on_nan() {
    let a = sse::setr_ps(f32::NAN, f32::NAN, 3.0, 4.0);
    let b = sse::setr_ps(1.0, f32::NAN, f32::NAN, 4.0);

    for op in [
        sse::cmpeq_ps,
        sse::cmplt_ps,
        sse::cmple_ps,
        sse::cmpgt_ps,
        sse::cmpge_ps,
    ] {
        let bits = mask_bits(op(a, b));
        assert_eq!(bits[0], 0);
        assert_eq!(bits[1], 0);
        assert_eq!(bits[2], 0);
    }
}

#[test]
fn test_cmpord_and_cmpunord() {
    let a = sse::setr_ps(f32::NAN, 2.0, f32::NAN, 4.0);
    let b = sse::setr_ps(1.0, f32::NAN, f32::NAN, 4.0);

    let ord = mask_bits(sse::cmpord_ps(a, b));
    let unord = mask_bits(sse::cmpunord_ps(a, b));

    assert_eq!(ord, [0, 0, 0, u32::MAX]);
    assert_eq!(unord, [u32::MAX, u32::MAX, u32::MAX, 0]);
}

#[test]
fn test_scalar_predicates_mask_lane0_only() {
    let a = sse::setr_ps(1.0, 5.0, 6.0, 7.0);
    let b = sse::setr_ps(2.0, -1.0, -1.0, -1.0);

    let r = sse::cmplt_ss(a, b);
    assert_eq!(r[0].to_bits(), u32::MAX);
    assert_eq!(r.to_array()[1..], [5.0, 6.0, 7.0]);

    let r = sse::cmpgt_ss(a, b);
    assert_eq!(r[0].to_bits(), 0);
    assert_eq!(r.to_array()[1..], [5.0, 6.0, 7.0]);

    let nan = sse::setr_ps(f32::NAN, 0.0, 0.0, 0.0);
    assert_eq!(sse::cmpunord_ss(nan, b)[0].to_bits(), u32::MAX);
    assert_eq!(sse::cmpord_ss(nan, b)[0].to_bits(), 0);
    assert_eq!(sse::cmpnge_ss(nan, b)[0].to_bits(), u32::MAX);
}

#[test]
fn test_comi_and_ucomi_on_ordered_operands() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0103);

    for _ in 0..100 {
        let a = random_f32x4(&mut rng);
        let pick: bool = rng.random();
        let b = if pick {
            // equal lane 0 half the time
            let mut t = random_f32x4(&mut rng).to_array();
            t[0] = a[0];
            F32x4::from_array(t)
        } else {
            random_f32x4(&mut rng)
        };

        let (x, y) = (a[0], b[0]);
        assert_eq!(sse::comieq_ss(a, b), (x == y) as i32);
        assert_eq!(sse::comilt_ss(a, b), (x < y) as i32);
        assert_eq!(sse::comile_ss(a, b), (x <= y) as i32);
        assert_eq!(sse::comigt_ss(a, b), (x > y) as i32);
        assert_eq!(sse::comige_ss(a, b), (x >= y) as i32);
        assert_eq!(sse::comineq_ss(a, b), (x != y) as i32);

        assert_eq!(sse::ucomieq_ss(a, b), (x == y) as i32);
        assert_eq!(sse::ucomilt_ss(a, b), (x < y) as i32);
        assert_eq!(sse::ucomile_ss(a, b), (x <= y) as i32);
        assert_eq!(sse::ucomigt_ss(a, b), (x > y) as i32);
        assert_eq!(sse::ucomige_ss(a, b), (x >= y) as i32);
        assert_eq!(sse::ucomineq_ss(a, b), (x != y) as i32);
    }
}

#[test]
fn test_movemask_ps_packs_sign_bits() {
    let a = sse::setr_ps(-1.0, 2.0, -0.0, 4.0);
    assert_eq!(sse::movemask_ps(a), 0b0101);

    assert_eq!(sse::movemask_ps(sse::setzero_ps()), 0);
    assert_eq!(sse::movemask_ps(sse::set1_ps(-3.5)), 0b1111);

    // negative NaN has its sign bit set too
    let n = sse::setr_ps(f32::from_bits(0xffc0_0000), 1.0, 1.0, 1.0);
    assert_eq!(sse::movemask_ps(n), 0b0001);
}

#[test]
fn test_movemask_pi8_packs_sign_bits() {
    let a = sse::set_pi8(-1, 2, -3, 4, 5, -6, 7, -128);
    // set_pi8 takes lanes high-first, so arg 0 lands in lane 7
    assert_eq!(sse::movemask_pi8(a), 0b1010_0101);

    let zero = sse::set_pi8(0, 0, 0, 0, 0, 0, 0, 0);
    assert_eq!(sse::movemask_pi8(zero), 0);
}
