/// `round(v * factor)` clamped to the u8 range.
pub(crate) fn scale_round_u8(v: u8, factor: f32) -> u8 {
    clamp_round_u8(f32::from(v) * factor)
}

/// `round(wa * a + wb * b)` clamped to the u8 range.
pub(crate) fn weighted_sum_u8(a: u8, wa: f32, b: u8, wb: f32) -> u8 {
    clamp_round_u8(f32::from(a) * wa + f32::from(b) * wb)
}

pub(crate) fn clamp_round_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
