use serde::{Deserialize, Serialize};

use super::site::SiteKey;

/// Aggregated backbone connection from one junction to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Identifier of the neighboring junction.
    pub junction: usize,
    /// Shortest distance among the backbone bonds behind this link.
    pub distance: f64,
    /// Number of backbone bonds connecting the two junctions.
    pub multiplicity: usize,
}

impl Link {
    pub fn new(junction: usize, distance: f64, multiplicity: usize) -> Self {
        Self {
            junction,
            distance,
            multiplicity,
        }
    }
}

/// A cross-link node built from spatially close binding sites.
///
/// Junctions are created by the merger with only `id`, `centroid`,
/// `members` and `mass` set. The remaining fields are filled by the later
/// pipeline stages and are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub id: usize,
    pub centroid: [f64; 3],
    /// Sorted, deduplicated binding sites merged into this junction.
    pub members: Vec<SiteKey>,
    pub mass: usize,
    pub small: bool,
    pub bridge: bool,
    /// Links sorted by neighbor id.
    pub neighbors: Vec<Link>,
    pub degree: usize,
    pub multidegree: usize,
    pub component: Option<usize>,
}

impl Junction {
    pub fn new(id: usize, centroid: [f64; 3], mut members: Vec<SiteKey>) -> Self {
        members.sort_unstable();
        members.dedup();
        let mass = members.len();
        Self {
            id,
            centroid,
            members,
            mass,
            small: false,
            bridge: false,
            neighbors: Vec::new(),
            degree: 0,
            multidegree: 0,
            component: None,
        }
    }

    #[inline]
    pub fn contains(&self, key: &SiteKey) -> bool {
        self.members.binary_search(key).is_ok()
    }

    pub fn neighbor_ids(&self) -> Vec<usize> {
        self.neighbors.iter().map(|l| l.junction).collect()
    }

    /// Small junctions that are not bridges carry no edges in the graph.
    #[inline]
    pub fn is_dangling(&self) -> bool {
        self.small && !self.bridge
    }

    pub fn to_record(&self) -> JunctionRecord {
        JunctionRecord::from(self)
    }
}

/// Flat, serializable view of a [`Junction`], one row of the per-snapshot
/// output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionRecord {
    pub junction_id: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub members: Vec<(usize, usize)>,
    pub mass: usize,
    pub small_junction: bool,
    pub bridge: bool,
    /// `(neighbor id, minimum distance, multiplicity)` triples.
    pub neighbors: Vec<(usize, f64, usize)>,
    pub neighbors_list: Vec<usize>,
    pub component: Option<usize>,
    #[serde(rename = "degreeG")]
    pub degree_g: usize,
    #[serde(rename = "degreeMG")]
    pub degree_mg: usize,
}

impl From<&Junction> for JunctionRecord {
    fn from(j: &Junction) -> Self {
        Self {
            junction_id: j.id,
            x: j.centroid[0],
            y: j.centroid[1],
            z: j.centroid[2],
            members: j.members.iter().map(|k| (k.chain, k.position)).collect(),
            mass: j.mass,
            small_junction: j.small,
            bridge: j.bridge,
            neighbors: j
                .neighbors
                .iter()
                .map(|l| (l.junction, l.distance, l.multiplicity))
                .collect(),
            neighbors_list: j.neighbor_ids(),
            component: j.component,
            degree_g: j.degree,
            degree_mg: j.multidegree,
        }
    }
}

impl From<JunctionRecord> for Junction {
    fn from(r: JunctionRecord) -> Self {
        let members = r
            .members
            .into_iter()
            .map(|(chain, position)| SiteKey::new(chain, position))
            .collect();
        let mut junction = Junction::new(r.junction_id, [r.x, r.y, r.z], members);
        junction.small = r.small_junction;
        junction.bridge = r.bridge;
        junction.neighbors = r
            .neighbors
            .into_iter()
            .map(|(id, distance, multiplicity)| Link::new(id, distance, multiplicity))
            .collect();
        junction.component = r.component;
        junction.degree = r.degree_g;
        junction.multidegree = r.degree_mg;
        junction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_junction_deduplicates_members() {
        let members = vec![
            SiteKey::new(2, 1),
            SiteKey::new(0, 4),
            SiteKey::new(2, 1),
        ];
        let j = Junction::new(7, [1.0, 2.0, 3.0], members);
        assert_eq!(j.mass, 2);
        assert_eq!(j.members, vec![SiteKey::new(0, 4), SiteKey::new(2, 1)]);
        assert!(j.contains(&SiteKey::new(2, 1)));
        assert!(!j.contains(&SiteKey::new(2, 2)));
        assert!(j.component.is_none());
    }

    #[test]
    fn record_uses_table_column_names() {
        let mut j = Junction::new(0, [0.5, 1.5, 2.5], vec![SiteKey::new(1, 2)]);
        j.neighbors = vec![Link::new(3, 0.9, 2)];
        j.component = Some(0);
        j.degree = 1;
        j.multidegree = 2;

        let value = serde_json::to_value(j.to_record()).unwrap();
        assert_eq!(value["junction_id"], 0);
        assert_eq!(value["degreeG"], 1);
        assert_eq!(value["degreeMG"], 2);
        assert_eq!(value["neighbors_list"], serde_json::json!([3]));
        assert_eq!(value["members"], serde_json::json!([[1, 2]]));
    }

    #[test]
    fn record_converts_back_to_junction() {
        let mut j = Junction::new(4, [0.0, 1.0, 0.0], vec![SiteKey::new(0, 0), SiteKey::new(1, 3)]);
        j.small = true;
        j.bridge = true;
        j.neighbors = vec![Link::new(1, 1.2, 1), Link::new(2, 0.8, 1)];
        j.component = Some(3);
        j.degree = 2;
        j.multidegree = 2;

        let back = Junction::from(j.to_record());
        assert_eq!(back, j);
    }
}
