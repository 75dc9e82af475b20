use super::*;
use retrieval_analysis::{cov2corr, corr_plot};

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_unit_diagonal(ret: &Retrieval) {
    let corr = cov2corr(&ret.covariance).unwrap();

    for d in corr.diag() {
        assert!(approx_equal(*d, 1.0, 1.0e-12));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_symmetric_and_bounded(ret: &Retrieval) {
    let corr = cov2corr(&ret.covariance).unwrap();

    for ((i, j), val) in corr.indexed_iter() {
        assert!(val.is_finite());
        assert!(val.abs() <= 1.0 + 1.0e-12, "|corr[{}, {}]| = {} > 1", i, j, val);
        assert!(approx_equal(*val, corr[[j, i]], 1.0e-12));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_idempotent(ret: &Retrieval) {
    let corr = cov2corr(&ret.covariance).unwrap();
    let again = cov2corr(&corr).unwrap();

    for (a, b) in corr.iter().zip(again.iter()) {
        assert!(approx_equal(*a, *b, 1.0e-12));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_corr_plot(ret: &Retrieval) {
    let corr = cov2corr(&ret.covariance).unwrap();

    let svg = corr_plot(&corr, &ret.heights).unwrap();

    assert!(svg.starts_with("<svg") || svg.contains("<svg"));
    assert!(svg.contains("Temperature Correlation"));
    assert!(svg.contains("Moisture Correlation"));
}
