//! Small numeric kernels shared by the estimation stages
//!
//! Pure functions over slices, no allocation except where a new array is the
//! result. Uses `libm` for `abs`/`sqrt` so the crate stays `no_std`.

use alloc::vec::Vec;

/// Index of the largest value, first occurrence on ties
///
/// Returns `None` for an empty slice. NaN never wins a comparison.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Largest value, or negative infinity for an empty slice
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by `n`, not `n - 1`)
///
/// A single value has zero spread. `None` for an empty slice.
pub fn population_std(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mu;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    Some(libm::sqrt(variance))
}

/// Discrete derivative of `values` with respect to `positions`
///
/// Second-order central differences on the interior (exact for quadratics
/// on uneven spacing), one-sided first-order differences at both ends:
///
/// ```text
/// interior:  g[i] = -hd/(hs(hs+hd))·f[i-1] + (hd-hs)/(hs·hd)·f[i] + hs/(hd(hs+hd))·f[i+1]
///            hs = x[i] - x[i-1], hd = x[i+1] - x[i]
/// ends:      g[0] = (f[1]-f[0]) / (x[1]-x[0]),  g[n-1] = (f[n-1]-f[n-2]) / (x[n-1]-x[n-2])
/// ```
///
/// Positions must be strictly increasing; fewer than two points yields zeros.
pub fn gradient(values: &[f64], positions: &[f64]) -> Vec<f64> {
    let n = values.len().min(positions.len());
    let mut out = alloc::vec![0.0; n];
    if n < 2 {
        return out;
    }

    out[0] = (values[1] - values[0]) / (positions[1] - positions[0]);
    out[n - 1] = (values[n - 1] - values[n - 2]) / (positions[n - 1] - positions[n - 2]);

    for i in 1..n - 1 {
        let hs = positions[i] - positions[i - 1];
        let hd = positions[i + 1] - positions[i];
        let a = -hd / (hs * (hs + hd));
        let b = (hd - hs) / (hs * hd);
        let c = hs / (hd * (hs + hd));
        out[i] = a * values[i - 1] + b * values[i] + c * values[i + 1];
    }

    out
}

/// Absolute value without `std`
#[inline]
pub fn abs(value: f64) -> f64 {
    libm::fabs(value)
}
