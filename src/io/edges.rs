use crate::graph::EdgeList;
use crate::io::error::Error;
use std::io::Write;

const HEADER: &str = "source\ttarget\tlinks";

pub fn write<W: Write>(mut writer: W, edges: &EdgeList) -> Result<(), Error> {
    writeln!(writer, "{HEADER}")?;
    for edge in edges.iter() {
        writeln!(writer, "{}\t{}\t{}", edge.source, edge.target, edge.links)?;
    }
    writer.flush()?;
    Ok(())
}
