use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "polynet",
    about = "Junction graphs and topology metrics for polymer-network snapshots",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build junction networks from snapshot files
    #[command(visible_alias = "a")]
    Analyze(AnalyzeArgs),

    /// Compare a synthetic lattice droplet against its closed-form clustering
    #[command(visible_alias = "l")]
    Lattice(LatticeArgs),
}

/// Pipeline options, layered on top of the optional configuration file.
#[derive(Args, Default)]
#[command(next_help_heading = "Network Options")]
pub struct NetworkOptions {
    /// Network configuration (TOML file)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Boundary conditions of the simulation box
    #[arg(long, value_name = "KIND")]
    pub boundary: Option<BoundaryArg>,

    /// Edge length of the cubic box
    #[arg(long = "box-size", value_name = "L")]
    pub box_size: Option<f64>,

    /// Binding sites closer than this are merged
    #[arg(long, value_name = "R")]
    pub radius: Option<f64>,

    /// Backbone scan used to link junctions
    #[arg(long, value_name = "MODE")]
    pub links: Option<LinkModeArg>,

    /// Junctions below this mass are small
    #[arg(long = "small-threshold", value_name = "N")]
    pub small_threshold: Option<usize>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Snapshot files to process
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory (next to each input if omitted)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Input format (inferred from extension if not specified)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Also write a tab-separated edge list per snapshot
    #[arg(long)]
    pub edges: bool,

    /// Keep small non-bridge junctions in the edge list
    #[arg(long = "include-small")]
    pub include_small: bool,

    #[command(flatten)]
    pub network: NetworkOptions,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct LatticeArgs {
    /// Number of lattice points along each side
    #[arg(long, value_name = "N", default_value = "5")]
    pub side: usize,

    /// Neighborhood rule linking lattice points
    #[arg(long, value_name = "RULE", default_value = "square")]
    pub connectivity: ConnectivityArg,

    /// Parallel edges per lattice link
    #[arg(long, value_name = "M", default_value = "1")]
    pub multiplicity: usize,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    /// Periodic box, minimum-image distances
    #[value(alias = "pbc")]
    Periodic,
    /// Open box, Euclidean distances
    #[value(alias = "npbc")]
    NonPeriodic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LinkModeArg {
    /// Adjacent backbone site only
    Immediate,
    /// Adjacent backbone site only (default)
    Linear,
    /// Walk past sites of the same junction
    FarLinear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Binding-site table (chain position x y z)
    Sites,
    /// Raw 14-column restart dump
    Rst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConnectivityArg {
    /// Axis neighbors and square diagonals
    Square,
    /// Axis neighbors, square and cube diagonals
    Cube,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_accepts_aliases_and_overrides() {
        let cli = Cli::try_parse_from([
            "polynet",
            "analyze",
            "a.rst",
            "b.rst",
            "--boundary",
            "npbc",
            "--links",
            "far-linear",
            "--radius",
            "1.2",
            "--edges",
        ])
        .unwrap();

        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.inputs.len(), 2);
        assert_eq!(args.network.boundary, Some(BoundaryArg::NonPeriodic));
        assert_eq!(args.network.links, Some(LinkModeArg::FarLinear));
        assert_eq!(args.network.radius, Some(1.2));
        assert!(args.edges);
        assert!(args.network.box_size.is_none());
    }

    #[test]
    fn analyze_requires_an_input() {
        assert!(Cli::try_parse_from(["polynet", "analyze"]).is_err());
    }

    #[test]
    fn lattice_defaults() {
        let cli = Cli::try_parse_from(["polynet", "lattice"]).unwrap();
        let Command::Lattice(args) = cli.command else {
            panic!("expected lattice");
        };
        assert_eq!(args.side, 5);
        assert_eq!(args.connectivity, ConnectivityArg::Square);
        assert_eq!(args.multiplicity, 1);
    }
}
