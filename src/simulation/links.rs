//! Pairwise connector graph over the cube set
//!
//! `LinkSet` is the complete graph on cube indices: one `Link` per
//! unordered pair `(a, b)` with `a < b`, built in nested a-outer/b-inner
//! order and immutable afterwards. Links never own geometry; endpoints
//! and distances are derived on demand from the live `System` positions,
//! so they can never go stale.

use super::states::{NVec3, System};

/// Unordered index pair with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
}

#[derive(Debug, Clone)]
pub struct LinkSet {
    pub links: Vec<Link>,
}

impl LinkSet {
    /// Build the complete graph over `n` cubes: `n(n-1)/2` links.
    pub fn complete(n: usize) -> Self {
        let mut links = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for a in 0..n {
            for b in (a + 1)..n {
                links.push(Link { a, b });
            }
        }
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Current endpoint positions of link `k`.
    pub fn endpoints(&self, sys: &System, k: usize) -> (NVec3, NVec3) {
        let link = &self.links[k];
        (sys.cubes[link.a].x, sys.cubes[link.b].x)
    }

    /// Euclidean distance between the endpoints of link `k`.
    pub fn distance(&self, sys: &System, k: usize) -> f64 {
        let (a, b) = self.endpoints(sys, k);
        (a - b).norm()
    }

    /// All pairwise distances in link order, labeled by the index pair.
    pub fn distances(&self, sys: &System) -> Vec<(usize, usize, f64)> {
        self.links
            .iter()
            .map(|l| (l.a, l.b, (sys.cubes[l.a].x - sys.cubes[l.b].x).norm()))
            .collect()
    }
}
