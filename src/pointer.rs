// Pointer geometry shared by the hero, highlight cards and the CTA glow.

/// Pointer position relative to an element origin, in px.
#[inline]
pub fn relative_offset(client: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
    (client.0 - origin.0, client.1 - origin.1)
}

/// Pointer position along one axis as a percentage of `extent`.
/// A collapsed element (non-positive extent) reports 0.
#[inline]
pub fn relative_percent(client: f64, origin: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() {
        return 0.0;
    }
    (client - origin) / extent * 100.0
}

/// `client / extent`, or `None` when the viewport has no usable size.
#[inline]
pub fn viewport_fraction(client: f64, extent: f64) -> Option<f64> {
    if extent <= 0.0 || !extent.is_finite() {
        return None;
    }
    Some(client / extent)
}
