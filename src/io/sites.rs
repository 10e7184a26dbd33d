use crate::io::{Format, error::Error};
use crate::model::site::BindingSite;
use crate::model::snapshot::Snapshot;
use std::io::BufRead;

pub fn read<R: BufRead>(reader: R) -> Result<Snapshot, Error> {
    let mut sites = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(Error::parse(
                Format::Sites,
                line_no,
                format!("expected 5 columns (chain position x y z), found {}", parts.len()),
            ));
        }

        let chain = parse_index(parts[0], "chain", line_no)?;
        let position = parse_index(parts[1], "position", line_no)?;
        let mut coords = [0.0; 3];
        for (axis, value) in coords.iter_mut().zip(&parts[2..]) {
            *axis = value.parse::<f64>().map_err(|_| {
                Error::parse(Format::Sites, line_no, format!("invalid coordinate '{value}'"))
            })?;
        }

        sites.push(BindingSite::new(sites.len(), chain, position, coords));
    }

    Ok(Snapshot::new(sites))
}

fn parse_index(value: &str, name: &str, line_no: usize) -> Result<usize, Error> {
    value
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sites, line_no, format!("invalid {name} '{value}'")))
}
