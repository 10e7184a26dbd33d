use std::io::{self, Write};

use anyhow::{Result, bail};

use polynet::graph::average_clustering;
use polynet::graph::lattice::{Connectivity, Droplet};

use crate::cli::LatticeArgs;
use crate::display::{Context as DisplayContext, print_lattice_comparison};

pub fn run_lattice(args: LatticeArgs, ctx: DisplayContext) -> Result<()> {
    if args.side < 2 {
        bail!("Lattice side must be at least 2, got {}", args.side);
    }
    if args.multiplicity == 0 {
        bail!("Link multiplicity must be at least 1");
    }

    let connectivity: Connectivity = args.connectivity.into();
    let (simulated, analytic) = compare(args.side, connectivity, args.multiplicity);

    if ctx.interactive {
        print_lattice_comparison(
            args.side,
            connectivity,
            args.multiplicity,
            simulated,
            analytic,
        );
    } else {
        let mut out = io::stdout().lock();
        writeln!(out, "side\tconnectivity\tmultiplicity\tsimulated\tanalytic")?;
        writeln!(
            out,
            "{}\t{}\t{}\t{:.12}\t{:.12}",
            args.side, connectivity, args.multiplicity, simulated, analytic
        )?;
    }

    Ok(())
}

/// Simulated average clustering of the droplet next to the closed form.
///
/// Parallel links scale every triangle by the cube of the multiplicity, so
/// the closed form is scaled the same way.
fn compare(side: usize, connectivity: Connectivity, multiplicity: usize) -> (f64, f64) {
    let droplet = Droplet::with_connectivity(side, connectivity);
    let simulated = average_clustering(&droplet.graph(multiplicity));
    let scale = (multiplicity as f64).powi(3);
    (simulated, scale * connectivity.analytic_average(side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_matches_analytic_for_both_rules() {
        for connectivity in [Connectivity::SquareDiagonal, Connectivity::CubeDiagonal] {
            let (simulated, analytic) = compare(4, connectivity, 1);
            assert!((simulated - analytic).abs() < 1e-9, "{connectivity}");
        }
    }

    #[test]
    fn multiplicity_scales_both_sides() {
        let (simulated, analytic) = compare(3, Connectivity::SquareDiagonal, 2);
        assert!((simulated - analytic).abs() < 1e-9);
    }
}
