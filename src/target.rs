//! Locates the bundled analyzer executable.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Filename of the bundled executable, without the platform suffix.
pub const ANALYZER_NAME: &str = "pdf_analyzer";

/// Returns the directory containing the launcher itself.
///
/// The analyzer is expected to sit next to the launcher, and the launcher's
/// directory also becomes the working directory of the analyzer.
pub fn launcher_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the launcher executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("`{}` has no parent directory", exe.display()))?;

    Ok(dir.to_path_buf())
}

/// Candidate filenames in resolution order: the name with the platform
/// executable suffix, then the bare name.
fn candidates() -> Vec<String> {
    let suffix = std::env::consts::EXE_SUFFIX;
    let mut candidates = vec![format!("{ANALYZER_NAME}{suffix}")];
    if !suffix.is_empty() {
        candidates.push(ANALYZER_NAME.to_owned());
    }

    candidates
}

/// Finds the analyzer executable in `dir`, trying each candidate name in
/// order.
pub fn locate(dir: &Path) -> anyhow::Result<PathBuf> {
    candidates()
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
        .with_context(|| {
            format!(
                "Could not find the `{ANALYZER_NAME}` executable in `{}`",
                dir.display()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::{locate, ANALYZER_NAME};

    #[test]
    fn finds_bare_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ANALYZER_NAME), b"").unwrap();

        let path = locate(dir.path()).unwrap();

        assert_eq!(path, dir.path().join(ANALYZER_NAME));
    }

    #[cfg(windows)]
    #[test]
    fn prefers_suffixed_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pdf_analyzer.exe"), b"").unwrap();
        std::fs::write(dir.path().join(ANALYZER_NAME), b"").unwrap();

        let path = locate(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("pdf_analyzer.exe"));
    }

    #[test]
    fn missing_executable_names_the_directory() {
        let dir = tempfile::tempdir().unwrap();

        let error = locate(dir.path()).unwrap_err();

        let message = format!("{error:#}");
        assert!(message.contains(&dir.path().display().to_string()));
        assert!(message.contains(ANALYZER_NAME));
    }
}
