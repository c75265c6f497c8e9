/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// "+10.00%" / "-4.25%" for a fractional change.
pub(crate) fn pct_change_label(pct: f64) -> String {
    format!("{:+.2}%", pct * 100.0)
}

/// Min/max of `values` widened by `pad_pct` of the span on each side.
/// Falls back to a unit-wide window around a flat series. None when empty.
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>, pad_pct: f64) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    let span = max - min;
    if span <= f64::EPSILON {
        let half = min.abs().max(1.0) * pad_pct.max(0.5);
        return Some((min - half, max + half));
    }
    let pad = span * pad_pct;
    Some((min - pad, max + pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to(104.999, 2), 105.0);
        assert_eq!(round_to(-1.805, 1), -1.8);
        assert_eq!(round_to(12.3456, 2), 12.35);
    }

    #[test]
    fn pct_label_has_sign() {
        assert_eq!(pct_change_label(0.1), "+10.00%");
        assert_eq!(pct_change_label(-0.0425), "-4.25%");
    }

    #[test]
    fn padded_range_widens_span() {
        assert_eq!(padded_range([10.0, 20.0], 0.1), Some((9.0, 21.0)));
        assert_eq!(padded_range(Vec::<f64>::new(), 0.1), None);
        let (lo, hi) = padded_range([5.0, 5.0], 0.1).unwrap();
        assert!(lo < 5.0 && hi > 5.0);
    }
}
