//! Special values, rounding modes and configuration errors through the public interface.

use astro_decimal::{Config, Context, Decimal, Error, Modulo, RoundingMode, INF_NEG, INF_POS, NAN, NEG_ZERO, ZERO};

fn d(s: &str) -> Decimal {
    Decimal::parse(s, &Context::new()).unwrap()
}

macro_rules! assert_rounding {
    ($x:expr, $ctx:ident, $($rm:ident => $expected:literal),*) => {
        $(
            assert_eq!(
                $x.to_decimal_places(0, Some(RoundingMode::$rm), &$ctx).unwrap(),
                d($expected),
                "{}: {:?}", $x, RoundingMode::$rm
            );
        )*
    };
}

#[test]
fn special_values() {
    let ctx = Context::new();
    let one = d("1");

    assert!(ZERO.div(&ZERO, &ctx).is_nan());
    assert!(one.div(&ZERO, &ctx).is_inf_pos());
    assert!(one.neg().div(&ZERO, &ctx).is_inf_neg());
    assert_eq!(ZERO.pow(&ZERO, &ctx).unwrap(), one);
    assert!(INF_POS.sub(&INF_POS, &ctx).is_nan());
    assert!(INF_POS.add(&INF_NEG, &ctx).is_nan());
    assert!(INF_POS.mul(&ZERO, &ctx).is_nan());

    assert!(ZERO.ln(&ctx).unwrap().is_inf_neg());
    let r = one.ln(&ctx).unwrap();
    assert!(r.is_zero() && r.is_pos());
    assert!(d("-1").ln(&ctx).unwrap().is_nan());

    assert!(d("-1").sqrt(&ctx).is_nan());
    let r = NEG_ZERO.sqrt(&ctx);
    assert!(r.is_zero() && r.is_neg());
    assert!(INF_POS.sqrt(&ctx).is_inf_pos());

    let r = ZERO.atan2(&ZERO, &ctx).unwrap();
    assert!(r.is_zero() && r.is_pos());
    assert_eq!(NEG_ZERO.atan2(&NEG_ZERO, &ctx).unwrap(), d("-3.1415926535897932385"));
    assert_eq!(ZERO.atan2(&d("-1"), &ctx).unwrap(), d("3.1415926535897932385"));

    assert!(ZERO.pow(&d("-1"), &ctx).unwrap().is_inf_pos());
    assert!(NEG_ZERO.pow(&d("-1"), &ctx).unwrap().is_inf_neg());
    let third = one.div(&d("3"), &ctx);
    assert!(d("-8").pow(&third, &ctx).unwrap().is_nan());
    assert_eq!(d("-8").cbrt(&ctx), d("-2"));
    assert_eq!(d("-2").pow(&d("3"), &ctx).unwrap(), d("-8"));

    // NaN is not equal to anything
    assert_ne!(NAN, NAN);
    assert!(NAN.cmp(&NAN).is_none());
    assert!(!NAN.eq(&ZERO));

    // zeros compare equal regardless of sign
    assert_eq!(ZERO, NEG_ZERO);

    // exact cancellation gives +0, or -0 when rounding towards negative infinity
    let r = one.sub(&one, &ctx);
    assert!(r.is_zero() && r.is_pos());
    let mut floor = Context::new();
    floor.rounding_mode(RoundingMode::Floor);
    let r = one.sub(&one, &floor);
    assert!(r.is_zero() && r.is_neg());

    assert!(d("5").modulo(&ZERO, &ctx).is_nan());
    let mut euclid = Context::new();
    euclid.modulo(Modulo::Euclid);
    assert_eq!(d("-7").modulo(&d("3"), &euclid), d("2"));
    assert_eq!(d("-7").modulo(&d("-3"), &euclid), d("2"));
}

#[test]
fn rounding_modes() {
    let ctx = Context::new();

    assert_rounding!(d("2.5"), ctx,
        Up => "3", Down => "2", Ceil => "3", Floor => "2", HalfUp => "3",
        HalfDown => "2", HalfEven => "2", HalfCeil => "3", HalfFloor => "2");

    assert_rounding!(d("-2.5"), ctx,
        Up => "-3", Down => "-2", Ceil => "-2", Floor => "-3", HalfUp => "-3",
        HalfDown => "-2", HalfEven => "-2", HalfCeil => "-2", HalfFloor => "-3");

    assert_rounding!(d("3.5"), ctx, HalfEven => "4", HalfDown => "3");
    assert_rounding!(d("2.500001"), ctx, HalfDown => "3", HalfEven => "3", HalfFloor => "3");
    assert_rounding!(d("2.000001"), ctx, Up => "3", Ceil => "3", Down => "2", HalfUp => "2");

    // the same ties produced by a division
    let expected = ["3", "2", "3", "2", "3", "2", "2", "3", "2"];
    for (i, e) in expected.iter().enumerate() {
        let mut ctx = Context::new();
        ctx.precision(1).unwrap().rounding_mode(RoundingMode::try_from(i as i64).unwrap());
        assert_eq!(d("5").div(&d("2"), &ctx), d(e));
    }

    // rounding an already rounded value changes nothing
    for i in 0..9 {
        let rm = RoundingMode::try_from(i).unwrap();
        let x = d("2.718281828459045235360287").to_significant_digits(10, Some(rm), &ctx).unwrap();
        assert_eq!(x.to_significant_digits(10, Some(rm), &ctx).unwrap(), x);
    }
}

#[test]
fn configuration() {
    let mut ctx = Context::new();

    let err = ctx.precision(0).unwrap_err();
    assert_eq!(err, Error::InvalidArgument(String::new()));
    assert!(err.to_string().contains("precision"));

    let err = ctx
        .config(&Config {
            rounding: Some(9),
            ..Default::default()
        })
        .unwrap_err();
    assert!(err.to_string().contains("rounding"));

    let err = ctx.to_exp_pos(-1).unwrap_err();
    assert!(err.to_string().contains("toExpPos"));

    assert!(ctx.min_e(0).is_err());
    assert!(ctx.max_e(0).is_err());
    assert!(ctx.to_exp_neg(1).is_err());
    assert!(ctx
        .config(&Config {
            modulo: Some(10),
            ..Default::default()
        })
        .is_err());

    // a failed configuration leaves the context unchanged
    let before = ctx;
    assert!(ctx
        .config(&Config {
            precision: Some(5),
            max_e: Some(0),
            ..Default::default()
        })
        .is_err());
    assert_eq!(ctx, before);

    ctx.config(&Config {
        precision: Some(5),
        rounding: Some(1),
        modulo: Some(9),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(ctx.get_precision(), 5);
    assert_eq!(ctx.get_rounding_mode(), RoundingMode::Down);
    assert_eq!(ctx.get_modulo(), Modulo::Euclid);
    assert_eq!(d("2").div(&d("3"), &ctx), d("0.66666"));

    // independent dialects
    let mut other = ctx;
    other.precision(3).unwrap();
    assert_eq!(d("2").div(&d("3"), &other), d("0.666"));
    assert_eq!(ctx.get_precision(), 5);

    ctx.config(&Config {
        defaults: true,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(ctx, Context::new());
}

#[test]
fn exponent_limits() {
    let mut ctx = Context::new();
    ctx.max_e(5).unwrap().min_e(-5).unwrap();

    assert!(d("99999").mul(&d("100"), &ctx).is_inf_pos());
    assert!(d("-99999").mul(&d("100"), &ctx).is_inf_neg());
    assert_eq!(d("99999").mul(&d("10"), &ctx), d("999990"));
    assert_eq!(d("99999").mul(&d("1"), &ctx), d("99999"));

    let r = d("0.0001").div(&d("100"), &ctx);
    assert!(r.is_zero() && r.is_pos());
    let r = d("-0.0001").div(&d("100"), &ctx);
    assert!(r.is_zero() && r.is_neg());

    // intermediate values of a computation are not limited
    assert_eq!(d("99999").sqrt(&ctx), d("316.22618487405498217"));
    assert_eq!(d("0.00001").ln(&ctx).unwrap(), d("-11.51292546497022842"));
}
