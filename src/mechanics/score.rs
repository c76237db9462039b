//! Scoring mechanics: mean, population variance.

/// Arithmetic mean; 0 for an empty slice.
#[inline]
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Mean of a projection; 0 for an empty slice.
#[inline]
pub fn mean_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(f).sum::<f64>() / items.len() as f64
}

/// Population variance (divide by n, not n - 1); 0 for an empty slice.
#[inline]
pub fn variance(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let m = mean(xs);
    xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_are_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(variance(&[]), 0.0);
        assert_eq!(mean_by(&[] as &[(f64,)], |x| x.0), 0.0);
    }

    #[test]
    fn variance_is_population_variance() {
        // mean 5, squared deviations 9+1+1+9 = 20, / 4
        assert!((variance(&[2.0, 4.0, 6.0, 8.0]) - 5.0).abs() < 1e-12);
        assert_eq!(variance(&[3.5, 3.5, 3.5]), 0.0);
    }
}
