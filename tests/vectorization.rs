//! Output shapes of the public conversions for scalar and array arguments.

use rft_effect::{d2p, d2t, p2d, p2t, t2d, t2p, Design, Dim, SampleSize, Values};

const D_ARRAY: [f64; 6] = [0.01, 0.2, 0.5, 0.8, 1.2, 2.0];
const P_ARRAY: [f64; 6] = [0.4, 0.3, 0.2, 0.1, 0.05, 0.01];
const N_ARRAY: [usize; 3] = [6, 10, 30];
const V_ARRAY: [f64; 3] = [6.0, 10.0, 30.0];

fn field() -> Dim {
    Dim::functional(101, 20.0)
}

/// (first argument is array, second argument is array, dim, design, expected shape)
fn cases() -> Vec<(bool, bool, Dim, Design, Vec<usize>)> {
    vec![
        (false, false, Dim::Scalar, Design::OneSample, vec![]),
        (false, true, Dim::Scalar, Design::OneSample, vec![3]),
        (true, false, Dim::Scalar, Design::OneSample, vec![6]),
        (true, true, Dim::Scalar, Design::OneSample, vec![3, 6]),
        (false, false, Dim::Scalar, Design::TwoSample, vec![]),
        (false, true, Dim::Scalar, Design::TwoSample, vec![3]),
        (true, false, Dim::Scalar, Design::TwoSample, vec![6]),
        (true, true, Dim::Scalar, Design::TwoSample, vec![3, 6]),
        (false, false, field(), Design::OneSample, vec![]),
        (false, true, field(), Design::TwoSample, vec![3]),
        (true, false, field(), Design::TwoSample, vec![6]),
        (true, true, field(), Design::TwoSample, vec![3, 6]),
    ]
}

fn check_shape(out: &Values, expected: &[usize]) {
    assert_eq!(out.shape(), expected);
    match expected.len() {
        0 => assert!(out.scalar().is_some()),
        1 => assert!(out.as_vector().is_some()),
        _ => assert!(out.as_matrix().is_some()),
    }
}

/// Call `f` with scalar or array arguments as the case demands.
macro_rules! dispatch {
    (
        $f:ident($a_array:expr, $b_array:expr; $a_all:expr, $a_scalar:expr; $b_all:expr, $b_scalar:expr)
        $(, $rest:expr)*
    ) => {
        match ($a_array, $b_array) {
            (false, false) => $f($a_scalar, $b_scalar $(, $rest)*),
            (true, false) => $f($a_all.to_vec(), $b_scalar $(, $rest)*),
            (false, true) => $f($a_scalar, $b_all.to_vec() $(, $rest)*),
            (true, true) => $f($a_all.to_vec(), $b_all.to_vec() $(, $rest)*),
        }
    };
}

#[test]
fn d2t_shapes() {
    for (a, b, _, design, shape) in cases() {
        let out = dispatch!(d2t(a, b; D_ARRAY, 0.5; N_ARRAY, 20_usize), design).unwrap();
        check_shape(&out, &shape);
    }
}

#[test]
fn t2d_shapes() {
    for (a, b, _, design, shape) in cases() {
        let out = dispatch!(t2d(a, b; D_ARRAY, 0.5; N_ARRAY, 20_usize), design).unwrap();
        check_shape(&out, &shape);
    }
}

#[test]
fn d2p_shapes() {
    for (a, b, dim, design, shape) in cases() {
        let out = dispatch!(d2p(a, b; D_ARRAY, 0.5; N_ARRAY, 20_usize), dim, design).unwrap();
        check_shape(&out, &shape);
    }
}

#[test]
fn p2d_shapes() {
    for (a, b, dim, design, shape) in cases() {
        let out = dispatch!(p2d(a, b; P_ARRAY, 0.05; N_ARRAY, 20_usize), dim, design).unwrap();
        check_shape(&out, &shape);
    }
}

#[test]
fn p2t_shapes() {
    for (a, b, dim, _, shape) in cases() {
        let out = dispatch!(p2t(a, b; P_ARRAY, 0.05; V_ARRAY, 18.0), dim).unwrap();
        check_shape(&out, &shape);
    }
}

#[test]
fn t2p_shapes() {
    for (a, b, dim, _, shape) in cases() {
        let out = dispatch!(t2p(a, b; D_ARRAY, 0.5; V_ARRAY, 18.0), dim).unwrap();
        check_shape(&out, &shape);
    }
}

#[test]
fn outer_product_matches_elementwise_calls() {
    let out = d2p(D_ARRAY, N_ARRAY, Dim::Scalar, Design::TwoSample).unwrap();
    let m = out.as_matrix().unwrap();
    for (i, &n) in N_ARRAY.iter().enumerate() {
        for (j, &d) in D_ARRAY.iter().enumerate() {
            let single = d2p(d, n, Dim::Scalar, Design::TwoSample).unwrap();
            assert_eq!(m[(i, j)], single.scalar().unwrap());
        }
    }
}

#[test]
fn slices_and_vectors_are_arrays() {
    let from_slice = d2t(&D_ARRAY[..], 20_usize, Design::OneSample).unwrap();
    let from_vec = d2t(D_ARRAY.to_vec(), 20_usize, Design::OneSample).unwrap();
    assert_eq!(from_slice, from_vec);

    let groups = vec![SampleSize::Groups(8, 12), SampleSize::Groups(10, 10)];
    let out = d2t(0.5, groups, Design::TwoSample).unwrap();
    assert_eq!(out.shape(), vec![2]);
}

#[test]
fn invalid_probability_in_array_is_an_error() {
    let out = p2t(vec![0.05, 1.2], 18.0, Dim::Scalar);
    assert!(out.is_err());
}
