//! I/O delay line timing data.
//!
//! Propagation delay of a single delay tap, in seconds, for each
//! performance mode and process corner of the GateMate I/O cells.
//! Rows are indexed by performance mode, columns by corner.

/// Per-tap delay table: `[speed, economy, lowpower] x [best, typ, worst]`
pub const IODLY_TIMING: [[f64; 3]; 3] = [
    // speed
    [30e-12, 38e-12, 50e-12],
    // economy
    [38e-12, 50e-12, 65e-12],
    // lowpower
    [50e-12, 65e-12, 85e-12],
];

/// Row index of a performance mode name, matched case-insensitively
pub fn mode_index(name: &str) -> Option<usize> {
    ["speed", "economy", "lowpower"]
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
}

/// Column index of a corner name, matched case-insensitively
pub fn corner_index(name: &str) -> Option<usize> {
    if name.eq_ignore_ascii_case("typical") {
        return Some(1);
    }
    ["best", "typ", "worst"]
        .iter()
        .position(|c| c.eq_ignore_ascii_case(name))
}
