use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::ConvertConfig;
use crate::converter::convert_file;
use crate::error::ConvertError;
use crate::report::{print_progress, Report};

/// Convert `path`, which may be a single file or a directory.
///
/// Errors at the root are returned: a path that cannot be stat'ed, a
/// directory that cannot be listed, or the conversion error of a single
/// input file. Inside a directory every failure is printed and recorded in
/// the report, and the walk carries on with the remaining entries.
pub fn process(path: &Path, config: &ConvertConfig) -> Result<Report, ConvertError> {
    let path_access = |e| ConvertError::PathAccess {
        path: path.to_path_buf(),
        source: e,
    };
    let metadata = fs::metadata(path).map_err(path_access)?;

    if metadata.is_dir() {
        fs::read_dir(path).map_err(path_access)?;

        let mut report = Report::for_directory();
        walk_dir(path, config, &mut report);
        return Ok(report);
    }

    let result = convert_file(path, config);
    print_progress(path, &result);

    let mut report = Report::new();
    report.push(path, Ok(result?));
    Ok(report)
}

/// Depth-first over `root` in file-name order. Without `recursive` only the
/// immediate children are visited and subdirectories are left alone.
fn walk_dir(root: &Path, config: &ConvertConfig, report: &mut Report) {
    let max_depth = if config.recursive { usize::MAX } else { 1 };

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                log::debug!("Walk error under {}: {}", root.display(), e);
                report.record(&path, Err(ConvertError::from(e)));
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            if !config.recursive {
                log::debug!("Skipping subdirectory {} (not recursive)", entry.path().display());
            }
            continue;
        }
        if !file_type.is_file() {
            log::debug!("Skipping special file {}", entry.path().display());
            continue;
        }

        let path = entry.path();
        let result = convert_file(path, config);
        if let Err(ref e) = result {
            log::debug!("Error converting {}: {}", path.display(), e);
        }
        report.record(path, result);
    }
}
