//! Minimal 2D geometry types for the cut-cell crates (x horizontal, z vertical).
#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vertex {
    pub x: f64,
    pub z: f64,
}

impl Vertex {
    pub const ORIGIN: Vertex = Vertex { x: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Hashable identity matching `==` on finite coordinates.
    #[inline]
    pub fn key(self) -> VertexKey {
        VertexKey(canonical_bits(self.x), canonical_bits(self.z))
    }
}

/// Bit pattern of a vertex with `-0.0` folded onto `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexKey(u64, u64);

#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}

/// Adjacent pairs `(s[i], s[i + 1])` of a slice.
pub fn pairs(s: &[f64]) -> Vec<(f64, f64)> {
    s.windows(2).map(|w| (w[0], w[1])).collect()
}
