use polynet::graph::lattice::Connectivity;
use polynet::io::Format;
use polynet::{Boundary, LinkMode};

use crate::cli;

impl From<cli::BoundaryArg> for Boundary {
    fn from(b: cli::BoundaryArg) -> Self {
        match b {
            cli::BoundaryArg::Periodic => Self::Periodic,
            cli::BoundaryArg::NonPeriodic => Self::NonPeriodic,
        }
    }
}

impl From<cli::LinkModeArg> for LinkMode {
    fn from(m: cli::LinkModeArg) -> Self {
        match m {
            cli::LinkModeArg::Immediate => Self::Immediate,
            cli::LinkModeArg::Linear => Self::Linear,
            cli::LinkModeArg::FarLinear => Self::FarLinear,
        }
    }
}

impl From<cli::InputFormat> for Format {
    fn from(f: cli::InputFormat) -> Self {
        match f {
            cli::InputFormat::Sites => Self::Sites,
            cli::InputFormat::Rst => Self::Rst,
        }
    }
}

impl From<cli::ConnectivityArg> for Connectivity {
    fn from(c: cli::ConnectivityArg) -> Self {
        match c {
            cli::ConnectivityArg::Square => Self::SquareDiagonal,
            cli::ConnectivityArg::Cube => Self::CubeDiagonal,
        }
    }
}
