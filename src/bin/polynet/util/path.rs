use std::path::{Path, PathBuf};

/// `input` with its extension replaced by `suffix`, placed in `dir` when
/// given and next to the input otherwise.
pub fn output_path(input: &Path, dir: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let name = format!("{}{}", stem.to_string_lossy(), suffix);
    match dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
