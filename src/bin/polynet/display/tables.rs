use std::io::{self, Write};

use polynet::graph::lattice::Connectivity;
use polynet::{NetworkConfig, NetworkSummary};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_config(config: &NetworkConfig) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Boundary", config.boundary.to_string()),
        ("Box Size", format!("{:.2}", config.box_size)),
        ("Search Radius", format!("{:.3}", config.search_radius)),
        ("Link Mode", config.link_mode.to_string()),
        (
            "Small Junction",
            format!("mass < {}", config.small_junction_threshold),
        ),
    ];

    print_kv_table(&mut out, "Network Configuration", &rows);
}

pub fn print_batch_summary(reports: &[(String, NetworkSummary)]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let count_w = 7usize;
    let cc_w = 7usize;
    let sep_overhead = 15;
    let name_w = SAFE_TABLE_WIDTH.saturating_sub(3 * count_w + cc_w + sep_overhead);

    let line = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{left}{}{mid}{}{mid}{}{mid}{}{mid}{}{right}",
            INDENT,
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(cc_w + 2),
        )
    };

    let _ = writeln!(out, "{}┌─ Network Summary ─┐", INDENT);
    let _ = writeln!(out, "{}", line("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:>count_w$} │ {:>count_w$} │ {:>cc_w$} │",
        INDENT,
        "Snapshot",
        "Junct.",
        "Comp.",
        "Main",
        "⟨C⟩",
    );
    let _ = writeln!(out, "{}", line("├", "┼", "┤"));

    for (name, summary) in reports {
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:>count_w$} │ {:>count_w$} │ {:>cc_w$.4} │",
            INDENT,
            truncate(name, name_w),
            summary.junctions,
            summary.components,
            summary.main_component_size,
            summary.average_clustering,
        );
    }

    let _ = writeln!(out, "{}", line("└", "┴", "┘"));
}

pub fn print_lattice_comparison(
    side: usize,
    connectivity: Connectivity,
    multiplicity: usize,
    simulated: f64,
    analytic: f64,
) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Side", format!("{side} ({} points)", side * side * side)),
        ("Connectivity", connectivity.to_string()),
        ("Multiplicity", multiplicity.to_string()),
        ("Simulated ⟨C⟩", format!("{simulated:.10}")),
        ("Analytic ⟨C⟩", format!("{analytic:.10}")),
    ];
    if analytic != 0.0 {
        rows.push(("Ratio", format!("{:.6}", simulated / analytic)));
    }

    print_kv_table(&mut out, "Lattice Droplet", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
