use std::path::{Path, PathBuf};

use clap::Parser;

use vendor_files::VendorJob;

use crate::error::AppError;

// Shamelessly borrowed from https://github.com/crate-ci/clap-cargo/blob/0378657ffdf2b67bcd6f1ab56e04a1322b92dd0e/src/style.rs
use anstyle::AnsiColor::*;
use anstyle::Effects;
use anstyle::Style;

const HEADER: Style = Green.on_default().effects(Effects::BOLD);
const USAGE: Style = Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = Cyan.on_default();
const ERROR: Style = Red.on_default().effects(Effects::BOLD);
const VALID: Style = Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = Yellow.on_default().effects(Effects::BOLD);

const APP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

/// The flag spellings are the established pipeline interface and must not be
/// renamed.
#[derive(Debug, Parser)]
#[command(name = "generate-vendor-files")]
#[command(about = "Run the vendor scripts declared in a package's component file")]
#[command(version)]
#[command(styles = APP_STYLING)]
#[command(term_width = 80)]
struct Args {
    /// Package name
    #[arg(long = "pkgName", value_name = "NAME")]
    pkg_name: String,

    /// Package path
    #[arg(long = "pkgPath", value_name = "PATH")]
    pkg_path: PathBuf,

    /// Path to the source tarball file, or its name
    #[arg(long = "srcTarball", value_name = "TARBALL")]
    src_tarball: String,

    /// Folder where to copy the new tarball(s)
    #[arg(long = "outFolder", value_name = "PATH")]
    out_folder: PathBuf,

    /// Package version
    #[arg(long = "pkgVersion", value_name = "VERSION")]
    pkg_version: String,

    /// Vendor version
    #[arg(long = "vendorVersion", value_name = "VERSION")]
    vendor_version: String,

    /// Source URL, used mainly by git submodules
    #[arg(long = "sourceUrl", value_name = "URL")]
    source_url: Option<String>,
}

#[derive(Debug)]
pub struct ValidatedArgs {
    pub job: VendorJob,
    pub shared_script_dir: PathBuf,
}

impl ValidatedArgs {
    /// Detect the shared script directory, falling back from
    /// `VENDOR_SCRIPTS_DIR` to the directory of the running executable.
    fn detect_shared_script_dir() -> Result<PathBuf, AppError> {
        match std::env::var_os("VENDOR_SCRIPTS_DIR") {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent().map(Path::to_path_buf).ok_or_else(|| {
                    AppError::arg_validation(
                        "could not determine the shared script directory".to_string(),
                    )
                })
            }
        }
    }
}

impl TryFrom<Args> for ValidatedArgs {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !args.pkg_path.is_dir() {
            return Err(AppError::arg_validation(format!(
                "package path does not exist: {}",
                args.pkg_path.display()
            )));
        }

        Ok(ValidatedArgs {
            job: VendorJob {
                pkg_name: args.pkg_name,
                pkg_path: args.pkg_path,
                src_tarball: args.src_tarball,
                out_folder: args.out_folder,
                pkg_version: args.pkg_version,
                vendor_version: args.vendor_version,
                source_url: args.source_url,
            },
            shared_script_dir: ValidatedArgs::detect_shared_script_dir()?,
        })
    }
}

pub fn parse() -> Result<ValidatedArgs, AppError> {
    ValidatedArgs::try_from(Args::parse())
}
