use ndarray::{Array1, Array2};

pub mod correlation_tests;
pub mod smoothing_tests;

/// A synthetic retrieval: everything a retrieval product would hand back for a single time,
/// along with a sounding to compare it to.
#[derive(Debug, Clone)]
pub struct Retrieval {
    pub nlevels: usize,
    pub heights: Vec<f64>,
    pub akern: Array2<f64>,
    pub prior: Array1<f64>,
    pub covariance: Array2<f64>,
    pub sonde_t: Vec<f64>,
    pub sonde_wv: Vec<f64>,
}

#[allow(unused_macros)] // False alarm
macro_rules! test_case {
    ($test_mod_name:ident, $nlevels:expr, $extra:expr) => {
        mod $test_mod_name {
            use crate::utils;

            fn load_data() -> utils::Retrieval {
                utils::load_test_case($nlevels, $extra)
            }

            mod smoothing {
                use super::load_data;
                use crate::utils::smoothing_tests;

                #[test]
                fn identity_kernel() {
                    smoothing_tests::test_identity_kernel(&load_data());
                }

                #[test]
                fn zero_kernel() {
                    smoothing_tests::test_zero_kernel(&load_data());
                }

                #[test]
                fn sonde_equals_prior() {
                    smoothing_tests::test_sonde_equals_prior(&load_data());
                }

                #[test]
                fn constant_departure() {
                    smoothing_tests::test_constant_departure(&load_data());
                }

                #[test]
                fn short_prior() {
                    smoothing_tests::test_short_prior(&load_data());
                }
            }

            mod correlation {
                use super::load_data;
                use crate::utils::correlation_tests;

                #[test]
                fn unit_diagonal() {
                    correlation_tests::test_unit_diagonal(&load_data());
                }

                #[test]
                fn symmetric_and_bounded() {
                    correlation_tests::test_symmetric_and_bounded(&load_data());
                }

                #[test]
                fn idempotent() {
                    correlation_tests::test_idempotent(&load_data());
                }

                #[test]
                fn corr_plot() {
                    correlation_tests::test_corr_plot(&load_data());
                }
            }
        }
    };
}

/// Build a retrieval with `nlevels` levels of temperature and water vapor and `extra` trailing
/// state vector entries (trace gases, cloud properties).
pub fn load_test_case(nlevels: usize, extra: usize) -> Retrieval {
    let state_len = 2 * nlevels + extra;

    // Levels get further apart with height, like a typical retrieval grid.
    let heights: Vec<f64> = (0..nlevels)
        .map(|k| {
            let k = k as f64;
            10.0 * k * k + 50.0 * k
        })
        .collect();

    let sonde_t: Vec<f64> = heights
        .iter()
        .map(|z| 25.0 - 6.5 * z / 1000.0 + (z / 300.0).sin())
        .collect();
    let sonde_wv: Vec<f64> = heights
        .iter()
        .map(|z| 14.0 * (-z / 2500.0).exp())
        .collect();

    let mut prior = Array1::<f64>::zeros(state_len);
    for (k, z) in heights.iter().enumerate() {
        prior[k] = 22.0 - 6.0 * z / 1000.0;
        prior[nlevels + k] = 11.0 * (-z / 2000.0).exp();
    }
    for k in 2 * nlevels..state_len {
        prior[k] = 400.0;
    }

    // Each row of the kernel is a normalized gaussian in level index, within its own profile. The
    // auxiliary part of the state is only sensitive to itself.
    let width = 1.0 + nlevels as f64 / 10.0;
    let mut akern = Array2::<f64>::zeros((state_len, state_len));
    for block in 0..2 {
        let offset = block * nlevels;
        for i in 0..nlevels {
            let weights: Vec<f64> = (0..nlevels)
                .map(|j| {
                    let d = (i as f64 - j as f64) / width;
                    (-0.5 * d * d).exp()
                })
                .collect();
            let total: f64 = weights.iter().sum();
            for (j, w) in weights.iter().enumerate() {
                akern[[offset + i, offset + j]] = w / total;
            }
        }
    }
    for k in 2 * nlevels..state_len {
        akern[[k, k]] = 1.0;
    }

    // Exponentially decaying covariance within each profile, weak coupling between them.
    let covariance = Array2::from_shape_fn((state_len, state_len), |(i, j)| {
        if i >= 2 * nlevels || j >= 2 * nlevels {
            return if i == j { 0.1 } else { 0.0 };
        }
        let (pi, pj) = (i / nlevels, j / nlevels);
        let (li, lj) = ((i % nlevels) as f64, (j % nlevels) as f64);
        let sigma_i = if pi == 0 { 1.5 } else { 0.8 + 0.1 * li };
        let sigma_j = if pj == 0 { 1.5 } else { 0.8 + 0.1 * lj };
        let coupling = if pi == pj { 1.0 } else { 0.3 };
        coupling * sigma_i * sigma_j * (-(li - lj).abs() / width).exp()
    });

    Retrieval {
        nlevels,
        heights,
        akern,
        prior,
        covariance,
        sonde_t,
        sonde_wv,
    }
}

pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    assert!(eps > 0.0);

    (val1 - val2).abs() < eps
}
