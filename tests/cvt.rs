//! Conversion rounding, truncation, saturation, and the integer
//! indefinite result on out-of-range and NaN inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanewise::sse;
use lanewise::{I16x4, I32x2, I8x8, U16x4, U8x8};

#[test]
fn test_cvtss_si32_rounds_ties_to_even() {
    let cases = [
        (1.5, 2),
        (2.5, 2),
        (-2.5, -2),
        (3.5, 4),
        (-3.5, -4),
        (2.4, 2),
        (2.6, 3),
        (0.0, 0),
        (-0.49, 0),
    ];
    for (x, expected) in cases {
        let a = sse::set_ss(x);
        assert_eq!(sse::cvtss_si32(a), expected, "input {x}");
        assert_eq!(sse::cvt_ss2si(a), expected, "input {x}");
    }
}

#[test]
fn test_cvttss_si32_truncates_toward_zero() {
    let cases = [(2.9, 2), (-2.9, -2), (0.99, 0), (-0.99, 0), (7.0, 7)];
    for (x, expected) in cases {
        let a = sse::set_ss(x);
        assert_eq!(sse::cvttss_si32(a), expected, "input {x}");
        assert_eq!(sse::cvtt_ss2si(a), expected, "input {x}");
    }
}

#[test]
fn test_out_of_range_and_nan_produce_integer_indefinite() {
    // largest f32 below 2^31 is 2^31 - 128
    assert_eq!(sse::cvtss_si32(sse::set_ss(2_147_483_520.0)), 2_147_483_520);
    assert_eq!(sse::cvtss_si32(sse::set_ss(2_147_483_648.0)), i32::MIN);
    assert_eq!(sse::cvtss_si32(sse::set_ss(1e10)), i32::MIN);
    assert_eq!(sse::cvtss_si32(sse::set_ss(-1e10)), i32::MIN);
    assert_eq!(sse::cvtss_si32(sse::set_ss(f32::NAN)), i32::MIN);

    assert_eq!(sse::cvttss_si32(sse::set_ss(2_147_483_648.0)), i32::MIN);
    assert_eq!(sse::cvttss_si32(sse::set_ss(f32::NAN)), i32::MIN);

    // -2^31 itself is exactly representable and in range
    assert_eq!(sse::cvtss_si32(sse::set_ss(-2_147_483_648.0)), i32::MIN);
    assert_eq!(sse::cvttss_si32(sse::set_ss(-2_147_483_648.0)), i32::MIN);
}

#[test]
fn test_cvt_ps2pi_and_cvtt_ps2pi_use_lanes_0_and_1() {
    let a = sse::setr_ps(1.5, -2.5, 99.0, 99.0);
    assert_eq!(sse::cvt_ps2pi(a), I32x2::from_array([2, -2]));
    assert_eq!(sse::cvtps_pi32(a), I32x2::from_array([2, -2]));

    let a = sse::setr_ps(1.9, -1.9, 99.0, 99.0);
    assert_eq!(sse::cvtt_ps2pi(a), I32x2::from_array([1, -1]));
}

#[test]
fn test_cvt_pi2ps_writes_low_lanes_only() {
    let a = sse::setr_ps(1.0, 2.0, 3.0, 4.0);
    let b = I32x2::from_array([-7, 42]);
    let r = sse::cvt_pi2ps(a, b);
    assert_eq!(r.to_array(), [-7.0, 42.0, 3.0, 4.0]);
    assert_eq!(sse::cvtpi32_ps(a, b).to_array(), [-7.0, 42.0, 3.0, 4.0]);
}

#[test]
fn test_cvtsi32_ss_writes_lane0_only() {
    let a = sse::setr_ps(1.0, 2.0, 3.0, 4.0);
    let r = sse::cvtsi32_ss(a, -12);
    assert_eq!(r.to_array(), [-12.0, 2.0, 3.0, 4.0]);
    let r = sse::cvt_si2ss(a, 100);
    assert_eq!(r.to_array(), [100.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_widening_conversions_are_exact() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0201);

    for _ in 0..100 {
        let a16 = I16x4::from_array(core::array::from_fn(|_| rng.random()));
        let r = sse::cvtpi16_ps(a16);
        for i in 0..I16x4::LANES {
            assert_eq!(r[i], f32::from(a16[i]));
        }

        let u16s = U16x4::from_array(core::array::from_fn(|_| rng.random()));
        let r = sse::cvtpu16_ps(u16s);
        for i in 0..U16x4::LANES {
            assert_eq!(r[i], f32::from(u16s[i]));
        }

        let a8 = I8x8::from_array(core::array::from_fn(|_| rng.random()));
        let r = sse::cvtpi8_ps(a8);
        for i in 0..4 {
            assert_eq!(r[i], f32::from(a8[i]));
        }

        let u8s = U8x8::from_array(core::array::from_fn(|_| rng.random()));
        let r = sse::cvtpu8_ps(u8s);
        for i in 0..4 {
            assert_eq!(r[i], f32::from(u8s[i]));
        }
    }
}

#[test]
fn test_cvtpi32x2_ps_concatenates_pairs() {
    let a = I32x2::from_array([1, -2]);
    let b = I32x2::from_array([3, -4]);
    assert_eq!(sse::cvtpi32x2_ps(a, b).to_array(), [1.0, -2.0, 3.0, -4.0]);
}

#[test]
fn test_cvtps_pi16_saturates_after_indefinite() {
    let a = sse::setr_ps(32767.0, 32768.0, -32769.0, 32767.5);
    let r = sse::cvtps_pi16(a);
    assert_eq!(r.to_array(), [32767, 32767, -32768, 32767]);

    // overflow to indefinite first, then signed saturation: huge positive
    // packs to the most negative value
    let a = sse::setr_ps(1e10, -1e10, f32::NAN, 0.5);
    let r = sse::cvtps_pi16(a);
    assert_eq!(r.to_array(), [-32768, -32768, -32768, 0]);
}

#[test]
fn test_cvtps_pi8_low_half_only() {
    let a = sse::setr_ps(127.6, -128.5, 1e10, 2.5);
    let r = sse::cvtps_pi8(a);
    // 127.6 rounds to 128 then saturates; -128.5 ties to even -128;
    // 1e10 goes through indefinite to -128; 2.5 ties to even 2
    assert_eq!(r.to_array(), [127, -128, -128, 2, 0, 0, 0, 0]);
}

#[test]
fn test_cvtss_f32_extracts_lane0() {
    let a = sse::setr_ps(1.25, 2.0, 3.0, 4.0);
    assert_eq!(sse::cvtss_f32(a), 1.25);
}

#[test]
fn test_64_bit_scalar_conversions() {
    let a = sse::setr_ps(5.0, 2.0, 3.0, 4.0);
    let r = sse::cvtsi64_ss(a, 1 << 40);
    // 2^40 is exactly representable in f32
    assert_eq!(r.to_array(), [(1u64 << 40) as f32, 2.0, 3.0, 4.0]);

    assert_eq!(sse::cvtss_si64(sse::set_ss(2.5)), 2);
    // 1e15 as f32 is an integer with a 2^26 ulp, well inside i64 range
    assert_eq!(sse::cvtss_si64(sse::set_ss(1e15)), 1e15f32 as i64);
    assert_eq!(sse::cvttss_si64(sse::set_ss(-2.9)), -2);
    assert_eq!(sse::cvtss_si64(sse::set_ss(f32::NAN)), i64::MIN);
    assert_eq!(sse::cvttss_si64(sse::set_ss(1e20)), i64::MIN);
}

#[test]
fn test_round_trip_small_integers() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0202);

    for _ in 0..100 {
        let n: i32 = rng.random_range(-1_000_000..1_000_000);
        let v = sse::cvtsi32_ss(sse::setzero_ps(), n);
        assert_eq!(sse::cvtss_si32(v), n);
    }
}
