//! Runs the generator over every `.ui` file in a directory.

use crate::{gen_view_binding, Config, FileError};
use log::{debug, error, info, trace, warn};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const UI_SUFFIX: &str = ".ui";

/// Outcome of a run. Failed inputs have already been logged.
#[derive(Debug, Default)]
pub struct Summary {
    pub generated: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// `.ui` files directly inside `dir`, sorted by name. Subdirectories are not
/// descended into.
pub fn ui_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(UI_SUFFIX) {
            trace!("skipping {}", entry.path().display());
            continue;
        }
        if entry.file_type()?.is_dir() {
            debug!("skipping directory {}", entry.path().display());
            continue;
        }
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

/// Reads, scans, renders and writes one file. The header is rendered in full
/// before anything touches the output directory.
pub fn process_file(config: &Config, path: &Path) -> Result<PathBuf, FileError> {
    let xml = fs::read(path).map_err(|source| FileError::Read { path: path.to_path_buf(), source })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let out = gen_view_binding(&config.application_id, &file_name, &xml)
        .map_err(|err| FileError::from_generate(path.to_path_buf(), err))?;

    let dst = config.output_directory.join(&out.file_name);
    replace_file(&config.output_directory, &dst, out.contents.as_bytes())
        .map_err(|source| FileError::Write { path: dst.clone(), source })?;
    Ok(dst)
}

/// Writes `contents` to a temporary file in `dir` and renames it over `dst`.
/// On failure `dst` keeps whatever it held before and the temporary is removed.
fn replace_file(dir: &Path, dst: &Path, contents: &[u8]) -> io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(dst).map_err(|e| e.error)?;
    Ok(())
}

/// Processes every `.ui` file in the configured directory. A file that fails
/// is logged and skipped; only failing to list the directory stops the run.
pub fn run(config: &Config) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();

    for path in ui_files(&config.directory)? {
        match process_file(config, &path) {
            Ok(dst) => {
                info!("generated {} from {}", dst.display(), path.display());
                if let Some(prev) = written.insert(dst.clone(), path.clone()) {
                    warn!(
                        "{} and {} both map to {}; the latter wins",
                        prev.display(),
                        path.display(),
                        dst.display()
                    );
                }
                summary.generated.push(dst);
            }
            Err(err) => {
                error!("{}", report(&err));
                summary.failed.push(path);
            }
        }
    }

    info!(
        "{} view binding(s) generated, {} file(s) failed",
        summary.generated.len(),
        summary.failed.len()
    );
    Ok(summary)
}

/// `err` followed by its sources, colon separated.
fn report(err: &dyn StdError) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(e) = source {
        msg.push_str(": ");
        msg.push_str(&e.to_string());
        source = e.source();
    }
    msg
}
