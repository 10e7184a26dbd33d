mod analyze;
mod lattice;

use analyze::run_analyze;
use lattice::run_lattice;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Analyze(args) => run_analyze(args, ctx),
        Command::Lattice(args) => run_lattice(args, ctx),
    }
}
