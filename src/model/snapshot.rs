use std::collections::BTreeMap;

use log::warn;

use super::site::BindingSite;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub sites: Vec<BindingSite>,
    pub chain_length: usize,
}

impl Snapshot {
    /// Builds a snapshot and infers the chain length from the sites.
    ///
    /// The length is the number of binding sites on the lowest-numbered
    /// chain. Chains whose site count differs are reported as a data
    /// inconsistency but kept.
    pub fn new(sites: Vec<BindingSite>) -> Self {
        let chain_length = infer_chain_length(&sites);
        Self {
            sites,
            chain_length,
        }
    }

    #[inline]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn chain_count(&self) -> usize {
        let mut chains: Vec<usize> = self.sites.iter().map(|s| s.chain()).collect();
        chains.sort_unstable();
        chains.dedup();
        chains.len()
    }
}

fn infer_chain_length(sites: &[BindingSite]) -> usize {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for site in sites {
        *counts.entry(site.chain()).or_insert(0) += 1;
    }

    let Some((&first_chain, &length)) = counts.iter().next() else {
        return 0;
    };

    for (&chain, &count) in &counts {
        if count != length {
            warn!(
                "chain {} has {} binding sites, expected {} (from chain {})",
                chain, count, length, first_chain
            );
        }
    }

    length
}
