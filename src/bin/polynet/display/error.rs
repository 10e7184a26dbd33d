use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// One-line report for a snapshot that failed inside a batch.
pub fn print_item_error(name: &str, err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "  \x1b[31m✗\x1b[0m {name}");
    for cause in err.chain() {
        let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {cause}");
    }
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(io_err) = err.downcast_ref::<polynet::io::Error>() {
        io_hints(io_err, &mut hints);
    } else if let Some(net_err) = err.downcast_ref::<polynet::NetworkError>() {
        network_hints(net_err, &mut hints);
    } else if let Some(std_err) = err.downcast_ref::<std::io::Error>() {
        std_io_hints(std_err, &mut hints);
    }

    hints
}

fn io_hints(err: &polynet::io::Error, hints: &mut Vec<String>) {
    use polynet::io::{Error as IoError, Format};

    match err {
        IoError::Io { source } => std_io_hints(source, hints),

        IoError::Parse { format, line, .. } => {
            hints.push(format!(
                "Parser stopped at line {} of the {} input",
                line, format
            ));
            match format {
                Format::Sites => {
                    hints.push("Each line needs five columns: chain position x y z".into());
                    hints.push("Chain and position must be non-negative integers".into());
                }
                Format::Rst => {
                    hints.push("RST rows need 14 whitespace-separated columns".into());
                    hints.push("Use --format sites for plain binding-site tables".into());
                }
                Format::Json | Format::EdgeList => {}
            }
        }

        IoError::UnsupportedReadFormat(fmt) => {
            hints.push(format!("The '{}' format cannot be used for input", fmt));
            hints.push("Supported input formats: sites, rst".into());
        }

        IoError::Serialize(_) => {
            hints.push("Junction records could not be encoded as JSON".into());
        }
    }
}

fn network_hints(err: &polynet::NetworkError, hints: &mut Vec<String>) {
    use polynet::NetworkError;

    match err {
        NetworkError::ConfigParse(_) => {
            hints.push("The configuration file has invalid TOML syntax or unknown keys".into());
            hints.push(
                "Accepted keys: boundary, box_size, search_radius, link_mode, small_junction_threshold"
                    .into(),
            );
        }
        NetworkError::UnknownBoundary(_) => {
            hints.push("Use 'periodic' (pbc) or 'non-periodic' (npbc)".into());
        }
        NetworkError::UnknownLinkMode(_) => {
            hints.push("Use 'immediate', 'linear' or 'far-linear'".into());
        }
        NetworkError::InvalidParameter { name, .. } => {
            hints.push(format!("Check the value given for '{name}'"));
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("File is not valid UTF-8 text".into());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}
