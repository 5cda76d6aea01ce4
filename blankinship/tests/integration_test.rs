use blankinship::errors::BlankinshipError;
use blankinship::ring::{Fraction, Polynomial};
use blankinship::solver::{Bezout, ExtendedGcdSolver, bezout, divides, gcd};

#[test]
fn happy_flow() -> Result<(), BlankinshipError> {
    // P = X^4 + X^3 - 3X^2 - 4X - 1, Q = X^3 + X^2 - X - 1
    let p = Polynomial::new([-1, -4, -3, 1, 1]);
    let q = Polynomial::new([-1, -1, 1, 1]);

    let Bezout { u, v, gcd } = ExtendedGcdSolver::new(p.clone(), q.clone()).solve()?;

    dbg!(u.to_string(), v.to_string(), gcd.to_string());

    assert_eq!(gcd, Polynomial::new([1, 1]));
    assert_eq!(&p * &u + &q * &v, gcd);

    Ok(())
}

#[test]
fn equal_inputs_give_monic_input() -> Result<(), BlankinshipError> {
    let p = Polynomial::new([Fraction::try_with(3, 2)?, Fraction::from(-1), Fraction::from(5)]);
    let result = bezout(&p, &p)?;

    assert_eq!(result.gcd, p.monic()?);
    assert!(result.check(&p, &p));
    Ok(())
}

#[test]
fn coprime_inputs_give_one() -> Result<(), BlankinshipError> {
    let p = Polynomial::new([1, 1]);
    let q = Polynomial::new([1, 0, 1]);

    assert_eq!(gcd(&p, &q)?, Polynomial::one());
    Ok(())
}

#[test]
fn zero_input_skips_reduction() -> Result<(), BlankinshipError> {
    let q = Polynomial::new([-4, 0, 2]);
    let solver = ExtendedGcdSolver::new(Polynomial::zero(), q.clone());

    let result = solver.solve()?;
    assert_eq!(result.gcd, Polynomial::new([-2, 0, 1]));
    assert!(result.u.is_zero());
    assert!(result.v.eq_constant(Fraction::try_with(1, 2)?));
    Ok(())
}

#[test]
fn both_zero_inputs_fail() {
    let result = bezout(&Polynomial::zero(), &Polynomial::zero());
    assert!(matches!(result, Err(BlankinshipError::InvalidArgument(_))));
}

#[test]
fn gcd_divides_both_inputs() -> Result<(), BlankinshipError> {
    // (X^2 + 1)(X - 3)^2 and (X^2 + 1)(X - 3)(X + 7)
    let common = Polynomial::new([1, 0, 1]) * Polynomial::new([-3, 1]);
    let p = &common * Polynomial::new([-3, 1]);
    let q = &common * Polynomial::new([7, 1]);

    let g = gcd(&p, &q)?;
    assert_eq!(g, common);
    assert!(divides(&g, &p)?);
    assert!(divides(&g, &q)?);
    Ok(())
}

#[test]
fn high_degree_stays_exact() -> Result<(), BlankinshipError> {
    // (X - 1)^8 against (X - 1)^5 (X + 2)^3
    let x_minus_one = Polynomial::new([-1, 1]);
    let x_plus_two = Polynomial::new([2, 1]);

    let mut p = Polynomial::one();
    for _ in 0..8 {
        p = p * &x_minus_one;
    }
    let mut q = Polynomial::one();
    for _ in 0..5 {
        q = q * &x_minus_one;
    }
    for _ in 0..3 {
        q = q * &x_plus_two;
    }

    let result = bezout(&p, &q)?;
    let mut expected = Polynomial::one();
    for _ in 0..5 {
        expected = expected * &x_minus_one;
    }

    assert_eq!(result.gcd, expected);
    assert!(result.check(&p, &q));
    Ok(())
}

#[test]
fn json_round_trip_of_result() -> Result<(), BlankinshipError> {
    let p = Polynomial::from_json(r#"[-1, -4, -3, 1, 1]"#)?;
    let q = Polynomial::from_json(r#"["-1", "-1", "1", "1"]"#)?;

    let result = bezout(&p, &q)?;
    let json = serde_json::to_string(&result)?;
    let decoded: Bezout = serde_json::from_str(&json)?;

    assert_eq!(decoded, result);
    Ok(())
}

#[test]
fn float_coefficients_are_rejected() {
    let error = Polynomial::from_json("[1, 0.5]").expect_err("floats must be rejected");
    assert!(error.to_string().contains("Floating-point"));
}
