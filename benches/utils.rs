use ndarray::{Array1, Array2};

/// Averaging kernel, prior, and a sounding on a retrieval grid with `nlevels` levels and `extra`
/// trailing state vector entries.
#[allow(dead_code)]
pub fn build_retrieval(
    nlevels: usize,
    extra: usize,
) -> (Array2<f64>, Array1<f64>, Vec<f64>, Vec<f64>) {
    let state_len = 2 * nlevels + extra;

    let akern = Array2::from_shape_fn((state_len, state_len), |(i, j)| {
        let d = i as f64 - j as f64;
        0.4 * (-0.5 * d * d / 4.0).exp()
    });
    let prior = Array1::from_shape_fn(state_len, |k| 15.0 - 0.1 * k as f64);
    let t: Vec<f64> = (0..nlevels).map(|k| 20.0 - 0.2 * k as f64).collect();
    let wv: Vec<f64> = (0..nlevels).map(|k| 12.0 * (-(k as f64) / 15.0).exp()).collect();

    (akern, prior, t, wv)
}

/// A positive definite covariance matrix of size `n`.
#[allow(dead_code)]
pub fn build_covariance(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |(i, j)| {
        let d = (i as f64 - j as f64).abs();
        (1.0 + 0.05 * i as f64) * (1.0 + 0.05 * j as f64) * (-d / 5.0).exp()
    })
}
