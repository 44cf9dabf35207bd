use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// The files found at or under a set of paths passed on the command line.
#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub errors: Vec<walkdir::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Recursively find every file at or under `paths` whose extension is one of
/// `file_exts` (with or without a leading `.`).
///
/// If a single file path is given and nothing matched, that file is
/// returned anyway on the presumption that the user named it on purpose.
pub(crate) fn find_files(
    paths: &[PathBuf],
    file_exts: &[String],
) -> std::io::Result<FoundFiles> {
    let file_exts: HashSet<&str> =
        file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = FoundFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(err);
                    continue;
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let ext_matches =
                entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| file_exts.contains(ext.as_ref()));
            if ext_matches {
                log::trace!("Found file at {entry_path:#?}.");
                found.file_paths.push(std::fs::canonicalize(entry_path)?);
            } else {
                log::trace!("Skipping file with unmatched extension: {entry_path:#?}.");
                found.num_skipped += 1;
            }
        }
    }

    if let [only_path] = paths
        && found.file_paths.is_empty()
        && only_path.is_file() {
        let only_path = std::fs::canonicalize(only_path)?;
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any \
            of the expected file extensions ({}).",
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.file_paths.push(only_path);
    }

    Ok(found)
}
