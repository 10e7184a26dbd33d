use crate::io::error::Error;
use crate::model::junction::JunctionRecord;
use std::io::{BufRead, Write};

pub fn write<W: Write>(mut writer: W, records: &[JunctionRecord]) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read<R: BufRead>(reader: R) -> Result<Vec<JunctionRecord>, Error> {
    Ok(serde_json::from_reader(reader)?)
}
