//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::backend::{DeclarationGenerator, OutputWriter};
use crate::emit::EmitConfig;
use crate::scan::{Project, scan_root_for};

use super::{CliError, CliResult, ExitCode, UNUSABLE_PROJECT_PATH};

/// Where the generated document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Write `<dir>/<file name>`, creating `dir` when needed.
    Directory(PathBuf),
    /// Print to standard output.
    Stdout,
}

/// Scan the directory containing `project_path` and render the document.
///
/// Malformed documents inside the project are skipped with a warning; only an unusable project path or an
/// unreadable scan root fails.
pub fn generate_document(project_path: &Path, config: &EmitConfig) -> CliResult<String> {
    let Some(root) = scan_root_for(project_path) else {
        return Err(CliError::failure(UNUSABLE_PROJECT_PATH));
    };

    tracing::debug!(root = %root.display(), "scanning project");
    let project = Project::scan(root)?;
    Ok(DeclarationGenerator::new(project.catalog(), config).render())
}

/// Generate the document and deliver it to `output`, logging the elapsed time.
pub fn generate(project_path: &Path, output: &Output, config: &EmitConfig) -> CliResult<ExitCode> {
    let start = Instant::now();

    let document = generate_document(project_path, config)?;

    match output {
        Output::Directory(destination) => {
            let writer = OutputWriter::new(destination, config.file_name.as_str());
            writer.write(&document).map_err(|e| {
                CliError::failure(format!("Unable to write {}: {}", writer.target().display(), e))
            })?;
        }
        Output::Stdout => print!("{document}"),
    }

    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!("Processed in: {elapsed:.2}ms");
    Ok(ExitCode::SUCCESS)
}
