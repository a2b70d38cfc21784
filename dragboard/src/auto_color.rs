//! Deterministic auto-color assignment for columns.
//!
//! Maps a column name to an accent color from a curated palette using a
//! simple hash, so columns configured without an explicit color still render
//! consistently across sessions.

/// Curated palette of 8 column accent colors (6-char hex without `#`).
const PALETTE: &[&str] = &[
    "8b7355", // umber
    "1d76db", // blue
    "0e8a16", // green
    "e36209", // orange
    "5319e7", // purple
    "006b75", // teal
    "b60205", // dark red
    "fbca04", // gold
];

/// Return a deterministic accent color for a column name.
///
/// Uses a simple FNV-1a hash mapped to the palette index.
pub fn auto_color(name: &str) -> &'static str {
    let hash = fnv1a(name);
    let idx = (hash as usize) % PALETTE.len();
    PALETTE[idx]
}

/// FNV-1a hash (32-bit) for short strings.
fn fnv1a(s: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}
