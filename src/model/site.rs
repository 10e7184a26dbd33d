use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteKey {
    pub chain: usize,
    pub position: usize,
}

impl SiteKey {
    pub fn new(chain: usize, position: usize) -> Self {
        Self { chain, position }
    }

    #[inline]
    pub fn with_position(&self, position: usize) -> Self {
        Self {
            chain: self.chain,
            position,
        }
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.chain, self.position)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BindingSite {
    pub id: usize,
    pub key: SiteKey,
    pub coords: [f64; 3],
}

impl BindingSite {
    pub fn new(id: usize, chain: usize, position: usize, coords: [f64; 3]) -> Self {
        Self {
            id,
            key: SiteKey::new(chain, position),
            coords,
        }
    }

    #[inline]
    pub fn chain(&self) -> usize {
        self.key.chain
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.key.position
    }
}
