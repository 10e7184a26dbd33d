use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use log::error;

pub struct BatchBar {
    bar: ProgressBar,
    start: Instant,
    item_start: Instant,
}

impl BatchBar {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.cyan} [{pos}/{len}] {bar:30.cyan/blue} {msg}")
                .expect("invalid template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .progress_chars("█▓░"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));

        let now = Instant::now();
        Self {
            bar,
            start: now,
            item_start: now,
        }
    }

    pub fn start_item(&mut self, name: &str) {
        self.item_start = Instant::now();
        self.bar.set_message(format!("{name}..."));
    }

    pub fn complete_item(&mut self, name: &str, substeps: &[String]) {
        let elapsed = self.item_start.elapsed();
        self.bar.suspend(|| {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(
                stderr,
                "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
                name,
                elapsed.as_secs_f64()
            );
            for substep in substeps {
                let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", substep);
            }
        });
        self.bar.inc(1);
    }

    pub fn fail_item(&mut self, name: &str, err: &anyhow::Error) {
        self.bar.suspend(|| super::print_item_error(name, err));
        self.bar.inc(1);
    }

    pub fn finish(self, succeeded: usize, failed: usize) {
        self.bar.finish_and_clear();
        print_footer(self.start.elapsed(), succeeded, failed);
    }
}

fn print_footer(elapsed: Duration, succeeded: usize, failed: usize) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
    );
    let _ = writeln!(stderr);
    if failed == 0 {
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {} snapshots analyzed {:>29}",
            succeeded,
            format!("Total: {:.2}s", elapsed.as_secs_f64())
        );
    } else {
        let _ = writeln!(
            stderr,
            "  \x1b[33m!\x1b[0m {} analyzed, {} failed {:>29}",
            succeeded,
            failed,
            format!("Total: {:.2}s", elapsed.as_secs_f64())
        );
    }
    let _ = writeln!(stderr);
}

pub enum Progress {
    Interactive(BatchBar),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total: usize) -> Self {
        if interactive {
            Self::Interactive(BatchBar::new(total as u64))
        } else {
            Self::Silent
        }
    }

    pub fn start_item(&mut self, name: &str) {
        if let Self::Interactive(b) = self {
            b.start_item(name);
        }
    }

    pub fn complete_item(&mut self, name: &str, substeps: &[String]) {
        if let Self::Interactive(b) = self {
            b.complete_item(name, substeps);
        }
    }

    pub fn fail_item(&mut self, name: &str, err: &anyhow::Error) {
        match self {
            Self::Interactive(b) => b.fail_item(name, err),
            Self::Silent => error!("{name}: {err:#}"),
        }
    }

    pub fn finish(self, succeeded: usize, failed: usize) {
        if let Self::Interactive(b) = self {
            b.finish(succeeded, failed);
        }
    }
}
