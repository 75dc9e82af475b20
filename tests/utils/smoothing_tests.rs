use super::*;
use retrieval_analysis::{convolve_akern, AnalysisError};

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_identity_kernel(ret: &Retrieval) {
    let akern = Array2::<f64>::eye(ret.akern.nrows());

    let smoothed =
        convolve_akern(&akern, &ret.prior, &ret.sonde_t, &ret.sonde_wv, ret.nlevels).unwrap();

    assert_eq!(smoothed.temperature.len(), ret.nlevels);
    assert_eq!(smoothed.moisture.len(), ret.nlevels);
    for (smth, orig) in smoothed.temperature.iter().zip(&ret.sonde_t) {
        assert!(approx_equal(*smth, *orig, 1.0e-10));
    }
    for (smth, orig) in smoothed.moisture.iter().zip(&ret.sonde_wv) {
        assert!(approx_equal(*smth, *orig, 1.0e-10));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_zero_kernel(ret: &Retrieval) {
    let akern = Array2::<f64>::zeros(ret.akern.dim());
    let n = ret.nlevels;

    let smoothed =
        convolve_akern(&akern, &ret.prior, &ret.sonde_t, &ret.sonde_wv, n).unwrap();

    assert_eq!(smoothed.temperature.to_vec(), ret.prior.as_slice().unwrap()[..n].to_vec());
    assert_eq!(smoothed.moisture.to_vec(), ret.prior.as_slice().unwrap()[n..2 * n].to_vec());
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_sonde_equals_prior(ret: &Retrieval) {
    let n = ret.nlevels;
    let t: Vec<f64> = ret.prior.iter().take(n).copied().collect();
    let wv: Vec<f64> = ret.prior.iter().skip(n).take(n).copied().collect();

    let smoothed = convolve_akern(&ret.akern, &ret.prior, &t, &wv, n).unwrap();

    assert_eq!(smoothed.temperature.to_vec(), t);
    assert_eq!(smoothed.moisture.to_vec(), wv);
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_constant_departure(ret: &Retrieval) {
    // The kernel rows are normalized within each profile, so a uniform departure from the prior
    // passes through unchanged.
    let n = ret.nlevels;
    let t: Vec<f64> = ret.prior.iter().take(n).map(|p| p + 2.0).collect();
    let wv: Vec<f64> = ret.prior.iter().skip(n).take(n).map(|p| p - 0.5).collect();

    let smoothed = convolve_akern(&ret.akern, &ret.prior, &t, &wv, n).unwrap();

    for (smth, tgt) in smoothed.temperature.iter().zip(&t) {
        assert!(approx_equal(*smth, *tgt, 1.0e-9));
    }
    for (smth, tgt) in smoothed.moisture.iter().zip(&wv) {
        assert!(approx_equal(*smth, *tgt, 1.0e-9));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_short_prior(ret: &Retrieval) {
    let n = ret.nlevels;
    let short = ret.prior.iter().take(2 * n - 1).copied().collect();

    match convolve_akern(&ret.akern, &short, &ret.sonde_t, &ret.sonde_wv, n) {
        Err(AnalysisError::ShapeMismatch { .. }) => {}
        other => panic!("Expected shape mismatch, got {:?}", other),
    }
}
