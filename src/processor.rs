//! Orchestration: read the component file and run each declared vendor script.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::{ComponentConfig, component_file_name};
use crate::error::Error;
use crate::logging;
use crate::strategy::{ScriptHome, VendorStrategy};

/// The parameters for one vendoring run, fixed at startup and shared
/// read-only across every strategy invocation.
#[derive(Debug, Clone)]
pub struct VendorJob {
    pub pkg_name: String,
    pub pkg_path: PathBuf,
    /// Path to the source tarball file, or its name. Passed through to the
    /// vendor script untouched.
    pub src_tarball: String,
    /// Folder where the vendor script should place the new tarball(s).
    pub out_folder: PathBuf,
    pub pkg_version: String,
    pub vendor_version: String,
    /// Upstream URL, required only by the `git_submodules` strategy.
    pub source_url: Option<String>,
}

/// Runs the vendor scripts declared for a single package.
#[derive(Debug)]
pub struct VendorProcessor {
    job: VendorJob,
    shared_script_dir: PathBuf,
}

impl VendorProcessor {
    /// `shared_script_dir` is where the non-package-local scripts live. It is
    /// resolved once at startup and never changes for the lifetime of the
    /// processor.
    pub fn new(job: VendorJob, shared_script_dir: PathBuf) -> Self {
        Self {
            job,
            shared_script_dir,
        }
    }

    /// Process the package's component file and run every declared strategy
    /// in order.
    ///
    /// A missing or unreadable component file falls back to a single
    /// [`VendorStrategy::Legacy`] dispatch. Strategies are not deduplicated;
    /// a repeated entry runs its script again.
    pub fn process(&self) -> Result<(), Error> {
        match ComponentConfig::load(&self.job.pkg_path, &self.job.pkg_name) {
            None => {
                let file = self
                    .job
                    .pkg_path
                    .join(component_file_name(&self.job.pkg_name));
                logging::debug(&format!(
                    "Failed to read {} file. Attempting to run custom vendor script.",
                    file.display()
                ));
                self.dispatch(VendorStrategy::Legacy)
            }
            Some(config) => {
                for strategy in config.vendor_strategies(&self.job.pkg_name)? {
                    self.dispatch(strategy)?;
                }
                Ok(())
            }
        }
    }

    /// Run the script bound to `strategy`.
    ///
    /// A script that cannot be found, or a `git_submodules` dispatch without
    /// a source URL, is logged and skipped (the caller moves on to the next
    /// strategy). A script that exits non-zero is fatal: the returned
    /// [`Error::ScriptFailed`] carries the captured stderr, or stdout when
    /// stderr was empty, verbatim.
    pub fn dispatch(&self, strategy: VendorStrategy) -> Result<(), Error> {
        let script_name = strategy.script_name();
        logging::debug(&format!(
            "Processing vendor type: '{strategy}', script name mapped to '{script_name}'"
        ));

        let script_dir = match strategy.script_home() {
            ScriptHome::Package => self.job.pkg_path.as_path(),
            ScriptHome::Shared => self.shared_script_dir.as_path(),
        };

        let Some(script_path) = find_script(script_dir, script_name) else {
            logging::error(
                &format!(
                    "Vendor script '{script_name}' not found in {} folder",
                    script_dir.display()
                ),
                true,
            );
            return Ok(());
        };

        logging::debug(&format!("Vendor script path: {}", script_path.display()));

        let mut args: Vec<&OsStr> = vec![
            "--srcTarball".as_ref(),
            self.job.src_tarball.as_ref(),
            "--outFolder".as_ref(),
            self.job.out_folder.as_os_str(),
            "--pkgVersion".as_ref(),
            self.job.pkg_version.as_ref(),
        ];

        if strategy.wants_vendor_version() {
            args.push("--vendorVersion".as_ref());
            args.push(self.job.vendor_version.as_ref());
        }

        if strategy.requires_source_url() {
            match self.job.source_url.as_deref() {
                Some(url) if !url.is_empty() => {
                    args.push("--gitUrl".as_ref());
                    args.push(url.as_ref());
                }
                _ => {
                    logging::error("Source URL is required for git submodules", true);
                    return Ok(());
                }
            }
        }

        // Blocks until the script exits; a hung script hangs the run.
        let output = Command::new("bash")
            .arg(&script_path)
            .args(&args)
            .stdin(Stdio::null())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            // Empty stderr means the script reported the failure on stdout.
            let message = if stderr.is_empty() {
                stdout.into_owned()
            } else {
                stderr.into_owned()
            };
            logging::error(&message, true);
            return Err(Error::ScriptFailed {
                script: script_name.to_string(),
                status: output.status,
                message,
            });
        }

        logging::success(&format!(
            "Successfully processed vendor type: '{strategy}'"
        ));
        let report = if stderr.is_empty() { stdout } else { stderr };
        logging::debug(&format!("Script output: \n{report}"));

        Ok(())
    }
}

/// Search `dir` recursively for a file called `name`.
fn find_script(dir: &Path, name: &str) -> Option<PathBuf> {
    walkdir::WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| entry.file_type().is_file() && entry.file_name() == name)
        .map(walkdir::DirEntry::into_path)
}

#[cfg(test)]
mod test_dispatch {
    use super::*;

    fn job_in(pkg_dir: &Path) -> VendorJob {
        VendorJob {
            pkg_name: "foo".to_string(),
            pkg_path: pkg_dir.to_path_buf(),
            src_tarball: "foo-1.2.3.tar.gz".to_string(),
            out_folder: pkg_dir.join("out"),
            pkg_version: "1.2.3".to_string(),
            vendor_version: "1".to_string(),
            source_url: None,
        }
    }

    fn write_script(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), format!("#!/bin/bash\n{body}\n")).unwrap();
    }

    #[test]
    fn missing_script_is_skipped() {
        let pkg_dir = tempfile::tempdir().unwrap();
        let processor = VendorProcessor::new(job_in(pkg_dir.path()), pkg_dir.path().join("shared"));
        assert!(processor.dispatch(VendorStrategy::Legacy).is_ok());
    }

    #[test]
    fn script_is_found_in_a_subdirectory() {
        let pkg_dir = tempfile::tempdir().unwrap();
        let nested = pkg_dir.path().join("nested/deeper");
        std::fs::create_dir_all(&nested).unwrap();
        let marker = pkg_dir.path().join("ran.txt");
        write_script(
            &nested,
            "generate_source_tarball.sh",
            &format!("touch '{}'", marker.display()),
        );
        let processor = VendorProcessor::new(job_in(pkg_dir.path()), pkg_dir.path().join("shared"));
        processor.dispatch(VendorStrategy::Custom).unwrap();
        assert!(marker.exists());
    }

    #[test]
    fn git_submodules_without_url_spawns_nothing() {
        let pkg_dir = tempfile::tempdir().unwrap();
        let shared_dir = tempfile::tempdir().unwrap();
        let marker = shared_dir.path().join("ran.txt");
        write_script(
            shared_dir.path(),
            "generate_git_submodules_vendor.sh",
            &format!("touch '{}'", marker.display()),
        );
        let processor =
            VendorProcessor::new(job_in(pkg_dir.path()), shared_dir.path().to_path_buf());
        processor.dispatch(VendorStrategy::GitSubmodules).unwrap();
        assert!(!marker.exists());
    }

    #[test]
    fn git_submodules_with_empty_url_spawns_nothing() {
        let pkg_dir = tempfile::tempdir().unwrap();
        let shared_dir = tempfile::tempdir().unwrap();
        let marker = shared_dir.path().join("ran.txt");
        write_script(
            shared_dir.path(),
            "generate_git_submodules_vendor.sh",
            &format!("touch '{}'", marker.display()),
        );
        let mut job = job_in(pkg_dir.path());
        job.source_url = Some(String::new());
        let processor = VendorProcessor::new(job, shared_dir.path().to_path_buf());
        processor.dispatch(VendorStrategy::GitSubmodules).unwrap();
        assert!(!marker.exists());
    }

    #[test]
    fn git_submodules_passes_the_url() {
        let pkg_dir = tempfile::tempdir().unwrap();
        let shared_dir = tempfile::tempdir().unwrap();
        let record = shared_dir.path().join("args.txt");
        write_script(
            shared_dir.path(),
            "generate_git_submodules_vendor.sh",
            &format!("printf '%s\\n' \"$@\" > '{}'", record.display()),
        );
        let mut job = job_in(pkg_dir.path());
        job.source_url = Some("https://example.com/foo.git".to_string());
        let processor = VendorProcessor::new(job, shared_dir.path().to_path_buf());
        processor.dispatch(VendorStrategy::GitSubmodules).unwrap();
        let args = std::fs::read_to_string(&record).unwrap();
        assert!(args.contains("--gitUrl\nhttps://example.com/foo.git\n"));
        assert!(args.contains("--vendorVersion\n1\n"));
    }

    #[test]
    fn failing_script_reports_stderr_verbatim() {
        let pkg_dir = tempfile::tempdir().unwrap();
        write_script(
            pkg_dir.path(),
            "generate_source_tarball.sh",
            "echo progress; echo 'boom' >&2; exit 1",
        );
        let processor = VendorProcessor::new(job_in(pkg_dir.path()), pkg_dir.path().join("shared"));
        let result = processor.dispatch(VendorStrategy::Custom);
        match result {
            Err(Error::ScriptFailed {
                script, message, ..
            }) => {
                assert_eq!(script, "generate_source_tarball.sh");
                assert_eq!(message, "boom\n");
            }
            other => panic!("expected ScriptFailed, got {other:?}"),
        }
    }

    #[test]
    fn failing_script_falls_back_to_stdout() {
        let pkg_dir = tempfile::tempdir().unwrap();
        write_script(
            pkg_dir.path(),
            "generate_source_tarball.sh",
            "echo 'tarball not found'; exit 2",
        );
        let processor = VendorProcessor::new(job_in(pkg_dir.path()), pkg_dir.path().join("shared"));
        let result = processor.dispatch(VendorStrategy::Custom);
        match result {
            Err(Error::ScriptFailed { message, .. }) => {
                assert_eq!(message, "tarball not found\n");
            }
            other => panic!("expected ScriptFailed, got {other:?}"),
        }
    }
}
