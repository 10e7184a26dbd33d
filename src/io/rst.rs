use crate::io::{Format, error::Error};
use crate::model::site::BindingSite;
use crate::model::snapshot::Snapshot;
use crate::network::Boundary;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::BufRead;

const COLUMN_COUNT: usize = 14;
const BACKBONE_BEAD_TYPE: u32 = 2;

const COL_CHAIN: usize = 0;
const COL_BEAD_TYPE: usize = 3;
const COL_WRAPPED: usize = 5;
const COL_UNWRAPPED: usize = 8;

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: [f64; 3],
    count: usize,
}

impl Accumulator {
    fn add(&mut self, coords: [f64; 3]) {
        for (s, c) in self.sum.iter_mut().zip(coords) {
            *s += c;
        }
        self.count += 1;
    }

    fn mean(&self) -> [f64; 3] {
        let n = self.count.max(1) as f64;
        [self.sum[0] / n, self.sum[1] / n, self.sum[2] / n]
    }
}

/// Rebuilds binding sites from a restart dump.
///
/// Beads of the backbone type separate binding sites: every non-backbone
/// bead that follows `k` backbone beads of its chain belongs to site `k` of
/// that chain. A site sits at the mean position of its beads. Site labels
/// are then renumbered densely so that positions run from zero.
pub fn read<R: BufRead>(reader: R, boundary: Boundary) -> Result<Snapshot, Error> {
    let coord_col = if boundary.is_periodic() {
        COL_WRAPPED
    } else {
        COL_UNWRAPPED
    };

    let mut backbone_seen: HashMap<usize, usize> = HashMap::new();
    let mut groups: BTreeMap<(usize, usize), Accumulator> = BTreeMap::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != COLUMN_COUNT {
            return Err(Error::parse(
                Format::Rst,
                line_no,
                format!("expected {COLUMN_COUNT} columns, found {}", parts.len()),
            ));
        }

        let chain = parts[COL_CHAIN]
            .parse::<usize>()
            .map_err(|_| Error::parse(Format::Rst, line_no, "invalid polymer index"))?;
        let bead_type = parts[COL_BEAD_TYPE]
            .parse::<u32>()
            .map_err(|_| Error::parse(Format::Rst, line_no, "invalid bead type"))?;

        let counter = backbone_seen.entry(chain).or_insert(0);
        if bead_type == BACKBONE_BEAD_TYPE {
            *counter += 1;
            continue;
        }
        let label = *counter;

        let coords = parse_coords(&parts[coord_col..coord_col + 3], line_no)?;
        groups.entry((chain, label)).or_default().add(coords);
    }

    let labels: BTreeSet<usize> = groups.keys().map(|&(_, label)| label).collect();
    let rank: HashMap<usize, usize> = labels
        .into_iter()
        .enumerate()
        .map(|(position, label)| (label, position))
        .collect();

    let sites: Vec<BindingSite> = groups
        .iter()
        .enumerate()
        .map(|(id, (&(chain, label), acc))| BindingSite::new(id, chain, rank[&label], acc.mean()))
        .collect();

    Ok(Snapshot::new(sites))
}

fn parse_coords(fields: &[&str], line_no: usize) -> Result<[f64; 3], Error> {
    let mut coords = [0.0; 3];
    for (axis, field) in coords.iter_mut().zip(fields) {
        *axis = field.parse::<f64>().map_err(|_| {
            Error::parse(Format::Rst, line_no, format!("invalid coordinate '{field}'"))
        })?;
    }
    Ok(coords)
}
