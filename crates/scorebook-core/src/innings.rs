// Innings-pitched arithmetic.
//
// Innings are recorded as `whole.thirds` (4.2 = four innings and two outs).
// Summing those as floats is wrong (4.2 + 4.2 != 9.1), so every sum goes
// through whole outs.

/// Convert fractional-third notation to total outs.
///
/// The digit after the point is taken literally as a tally of outs and is
/// not range-checked, so `4.3` yields 15. Negative or non-finite input
/// yields 0.
pub fn innings_to_outs(ip: f64) -> u32 {
    if !ip.is_finite() || ip <= 0.0 {
        return 0;
    }
    let whole = ip.floor();
    let fraction = ((ip - whole) * 10.0).round();
    (whole * 3.0 + fraction) as u32
}

/// Convert total outs back to fractional-third notation.
pub fn outs_to_innings(outs: u32) -> f64 {
    (outs / 3) as f64 + (outs % 3) as f64 / 10.0
}

/// Sum innings-pitched values exactly, returning fractional-third notation.
/// The out total saturates at `u32::MAX`.
pub fn sum_innings<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let outs = values
        .into_iter()
        .map(innings_to_outs)
        .fold(0u32, u32::saturating_add);
    outs_to_innings(outs)
}
