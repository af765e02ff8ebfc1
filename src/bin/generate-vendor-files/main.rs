use std::process::ExitCode;

use vendor_files::{VendorProcessor, logging};

mod args;
mod error;

use crate::error::AppError;

fn main() -> ExitCode {
    let validated = match args::parse() {
        Ok(validated) => validated,
        Err(err) => {
            logging::error(&err.to_string(), true);
            return err.into();
        }
    };

    let args::ValidatedArgs {
        job,
        shared_script_dir,
    } = validated;

    logging::debug(&format!("Src tarball path: {}", job.src_tarball));
    logging::debug(&format!("Out folder path: {}", job.out_folder.display()));
    logging::debug(&format!("Package version: {}", job.pkg_version));
    logging::debug(&format!("Vendor version: {}", job.vendor_version));
    logging::debug(&format!("Package name: {}", job.pkg_name));
    logging::debug(&format!("Package path: {}", job.pkg_path.display()));
    logging::debug(&format!(
        "Source url: {}",
        job.source_url.as_deref().unwrap_or("None")
    ));
    logging::debug(&format!(
        "Shared script directory: {}",
        shared_script_dir.display()
    ));

    match VendorProcessor::new(job, shared_script_dir).process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::error(&err.to_string(), true);
            AppError::from(err).into()
        }
    }
}
