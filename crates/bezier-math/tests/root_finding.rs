use bezier_core::Tolerance;
use bezier_math::Polynomial;

fn sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(f64::total_cmp);
    v
}

/// Every expected root is found, and nothing else is.
fn assert_roots_match(found: Vec<f64>, expected: &[f64]) {
    let found = sorted(found);
    let expected = sorted(expected.to_vec());
    assert_eq!(
        found.len(),
        expected.len(),
        "found {:?}, expected {:?}",
        found,
        expected
    );
    for (f, e) in found.iter().zip(&expected) {
        assert!(
            (f - e).abs() < Tolerance::ROOT_CHECK,
            "found {:?}, expected {:?}",
            found,
            expected
        );
    }
}

/// Same zero set: every found root is near an expected one and vice versa.
/// Multiple roots may come back once or as a close cluster.
fn assert_root_set_matches(found: Vec<f64>, expected: &[f64]) {
    for f in &found {
        assert!(
            expected.iter().any(|e| (f - e).abs() < Tolerance::ROOT_CHECK),
            "spurious root {} in {:?}, expected {:?}",
            f,
            found,
            expected
        );
    }
    for e in expected {
        assert!(
            found.iter().any(|f| (f - e).abs() < Tolerance::ROOT_CHECK),
            "missing root {} in {:?}",
            e,
            found
        );
    }
}

#[test]
fn test_low_degree_roots_are_zeros() {
    let coefficients = [-3.0, -1.0, -0.25, 0.5, 2.0, 7.0];
    for &a in &coefficients {
        for &b in &coefficients {
            for &c in &coefficients {
                for p in [Polynomial::new([a, b, c]), Polynomial::new([b, c])] {
                    for root in p.solve() {
                        assert!(
                            p.evaluate(root).abs() < Tolerance::ROOT_CHECK,
                            "{} at {} = {}",
                            p,
                            root,
                            p.evaluate(root)
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_cubic_from_roots() {
    let cases: [[f64; 3]; 5] = [
        [1.0, 2.0, 3.0],
        [-4.0, 0.5, 6.0],
        [-1.5, -0.25, 2.75],
        [0.0, 1.0, -1.0],
        [10.0, -20.0, 5.0],
    ];
    for roots in cases {
        let p = Polynomial::from_roots(&roots);
        assert_roots_match(p.solve(), &roots);
    }
}

#[test]
fn test_quartic_from_roots() {
    let cases: [[f64; 4]; 4] = [
        [1.0, 2.0, 3.0, 4.0],
        [-2.0, -0.5, 1.0, 3.0],
        [-6.0, -1.0, 0.0, 2.5],
        [-0.9, -0.3, 0.4, 0.8],
    ];
    for roots in cases {
        let p = Polynomial::from_roots(&roots);
        assert_roots_match(p.solve(), &roots);
        // A scaled copy has the same zero set.
        assert_roots_match(p.scale(-3.5).solve(), &roots);
    }
}

#[test]
fn test_quartic_with_complex_pair() {
    // (x^2 + 1)(x - 1)(x - 2)
    let p = &Polynomial::new([1.0, 0.0, 1.0]) * &Polynomial::from_roots(&[1.0, 2.0]);
    assert_roots_match(p.solve(), &[1.0, 2.0]);
}

#[test]
fn test_quartic_without_real_roots() {
    // (x^2 + 1)(x^2 + 4)
    let p = &Polynomial::new([1.0, 0.0, 1.0]) * &Polynomial::new([1.0, 0.0, 4.0]);
    assert!(p.solve().is_empty());
}

#[test]
fn test_quintic_from_roots() {
    let roots = [-3.0, -1.0, 0.5, 2.0, 4.0];
    let p = Polynomial::from_roots(&roots);
    assert_roots_match(p.solve(), &roots);
}

#[test]
fn test_deflation_leaves_zero_remainder() {
    let p = Polynomial::from_roots(&[-2.0, 1.0, 5.0]);
    let divisor = Polynomial::new([1.0, -5.0]);
    let (quotient, remainder) = p.div_rem(&divisor).unwrap();
    assert!(remainder.coeffs().iter().all(|c| c.abs() < 1e-9));
    let rebuilt = &(&quotient * &divisor) + &remainder;
    for i in 0..4 {
        assert!((rebuilt.coeff(i) - p.coeff(i)).abs() < 1e-9);
    }
}

#[test]
fn test_repeated_roots_from_roots() {
    let cases: [&[f64]; 8] = [
        &[1.0, 1.0, 2.0, 3.0],
        &[1.0, 1.0, 3.0],
        &[1.0, 1.0, 10.0],
        &[-2.0, -2.0, 1.0, 4.0],
        &[0.5, 0.5, -3.0],
        &[2.0, 2.0, -1.0, -1.0],
        &[3.0, 3.0, 3.0, -1.0],
        &[0.0, 0.0, 5.0],
    ];
    for roots in cases {
        let p = Polynomial::from_roots(roots);
        assert_root_set_matches(p.solve(), roots);
        assert_root_set_matches(p.scale(-3.5).solve(), roots);
    }
}

#[test]
fn test_even_double_root_reported_once() {
    // (x - 1)^2 (x - 2)(x - 3): the touching root comes from the derivative partition.
    let roots = sorted(Polynomial::from_roots(&[1.0, 1.0, 2.0, 3.0]).solve());
    assert_eq!(roots.len(), 3, "{:?}", roots);
    assert!((roots[0] - 1.0).abs() < 1e-4);
}
