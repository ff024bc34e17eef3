//! Deterministic key hashing for stylistic variation.
//!
//! Every per-element decision in the crate (should this point/edge/face be
//! drawn, how is this stroke segmented, how does this point jitter) derives
//! from a string key through the helpers in this module. There is no stored
//! random state anywhere: the same key always yields the same value, across
//! calls, processes, and releases.
//!
//! Primary helper: [`hash01`], which maps any key into `[0, 1)`. Both render
//! backends must use these functions; a second hash implementation would let
//! the backends drift apart.

/// Maps a string key to a value in `[0, 1)`.
///
/// The key bytes are folded with a wrapping multiply-add, then pushed through
/// an xorshift-multiply avalanche so near-identical keys ("3-4" vs "3-5")
/// decorrelate, and finally bucketed by modulo.
pub fn hash01(key: &str) -> f32 {
    let mut h: u32 = 0;
    for byte in key.bytes() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(byte));
    }
    (mix_u32(h) % 100_000) as f32 / 100_000.0
}

/// Canonical key for an undirected point pair: lexicographic minimum first.
///
/// Edge gates and stroke textures key off this, so the value must not depend
/// on traversal direction.
pub fn pair_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}:{b}")
    } else {
        format!("{b}:{a}")
    }
}

/// Gate key for point visibility.
pub fn point_gate_key(id: &str) -> String {
    format!("point-{id}")
}

/// Gate key for edge visibility, from a [`pair_key`].
pub fn edge_gate_key(pair: &str) -> String {
    format!("edge-{pair}")
}

/// Whether an element keyed by `key` is included at the given frequency.
///
/// `frequency = 1.0` includes every key, `frequency = 0.0` effectively none.
pub fn gate(key: &str, frequency: f32) -> bool {
    hash01(key) <= frequency
}

/// Seed for the per-point, per-well jitter stream.
pub fn jitter_seed(point_id: &str, well_id: &str) -> f32 {
    hash01(&format!("{point_id}:{well_id}")) * 1000.0
}

/// Sine-fract noise in `[0, 1)`, the shader-style generator used for jitter.
///
/// `lane` separates independent draws from one seed (x and y offsets).
pub fn unit_noise(seed: f32, lane: u32) -> f32 {
    let raw = (seed + lane as f32 * 12.989_8).sin() * 43_758.547;
    let folded = raw.rem_euclid(1.0);
    // rem_euclid of a tiny negative rounds up to exactly 1.0 in f32.
    if folded < 1.0 {
        folded
    } else {
        0.0
    }
}

#[inline]
fn mix_u32(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^ (x >> 16)
}
