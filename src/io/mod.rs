//! Reading snapshots and writing junction tables.
//!
//! Two snapshot layouts are understood:
//!
//! - [`Format::Sites`] – one binding site per line, `chain position x y z`.
//! - [`Format::Rst`] – raw 14-column simulation restart dump; binding sites
//!   are rebuilt from the non-backbone beads.
//!
//! Pipeline output is written as a JSON array of junction records and,
//! optionally, a tab-separated edge list.

use std::fmt;
use std::io::{BufRead, Write};

use crate::graph::EdgeList;
use crate::model::junction::JunctionRecord;
use crate::model::snapshot::Snapshot;
use crate::network::Boundary;

pub mod error;

mod edges;
mod records;
mod rst;
mod sites;

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Sites,
    Rst,
    Json,
    EdgeList,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Sites => write!(f, "binding-site table"),
            Format::Rst => write!(f, "RST"),
            Format::Json => write!(f, "JSON"),
            Format::EdgeList => write!(f, "edge list"),
        }
    }
}

/// Reads a plain binding-site table.
pub fn read_sites<R: BufRead>(reader: R) -> Result<Snapshot, Error> {
    sites::read(reader)
}

/// Reads a raw restart dump, keeping wrapped coordinates for periodic
/// boundaries and unwrapped ones otherwise.
pub fn read_rst<R: BufRead>(reader: R, boundary: Boundary) -> Result<Snapshot, Error> {
    rst::read(reader, boundary)
}

/// Reads a snapshot in the given input format.
pub fn read_snapshot<R: BufRead>(
    reader: R,
    format: Format,
    boundary: Boundary,
) -> Result<Snapshot, Error> {
    match format {
        Format::Sites => read_sites(reader),
        Format::Rst => read_rst(reader, boundary),
        other => Err(Error::UnsupportedReadFormat(other)),
    }
}

pub fn write_records<W: Write>(writer: W, records: &[JunctionRecord]) -> Result<(), Error> {
    records::write(writer, records)
}

pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<JunctionRecord>, Error> {
    records::read(reader)
}

pub fn write_edge_list<W: Write>(writer: W, edges: &EdgeList) -> Result<(), Error> {
    edges::write(writer, edges)
}
