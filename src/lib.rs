//! Resolve and run the vendor scripts declared in a package's component file.
//!
//! A package declares how its third-party sources are vendored in
//! `<pkg_name>.component.toml`, placed in the package directory. The
//! `components.<pkg_name>.vendors.vendor_types` array lists one or more
//! strategies drawn from `go`, `cargo`, `custom`, `git_submodules` and
//! `legacy`; each strategy is bound to an external shell script which does the
//! actual fetching and packaging. Packages without a component file fall back
//! to the `legacy` strategy.
//!
//! # Usage
//!
//! Parse a component document and inspect the declared strategies:
//!
//! ```rust
//! use vendor_files::{ComponentConfig, VendorStrategy};
//!
//! # fn main() -> Result<(), vendor_files::Error> {
//! let document = r#"
//! [components.foo.vendors]
//! vendor_types = ["go", "custom"]
//! "#;
//!
//! let config = ComponentConfig::parse(document, "foo.component.toml")?;
//! let strategies = config.vendor_strategies("foo")?;
//! assert_eq!(strategies, [VendorStrategy::Go, VendorStrategy::Custom]);
//! # Ok(())
//! # }
//! ```
//!
//! Run every declared strategy for a package:
//!
//! ```no_run
//! use vendor_files::{VendorJob, VendorProcessor};
//!
//! # fn main() -> Result<(), vendor_files::Error> {
//! let job = VendorJob {
//!     pkg_name: "foo".to_string(),
//!     pkg_path: "/sources/foo".into(),
//!     src_tarball: "foo-1.2.3.tar.gz".to_string(),
//!     out_folder: "/build/out".into(),
//!     pkg_version: "1.2.3".to_string(),
//!     vendor_version: "1".to_string(),
//!     source_url: None,
//! };
//!
//! VendorProcessor::new(job, "/usr/share/vendor-scripts".into()).process()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Failure model
//!
//! A missing or unreadable component file is not an error: the package is
//! treated as legacy. A declared strategy whose script cannot be found, or a
//! `git_submodules` entry without a source URL, is logged and skipped. A
//! vendor script that exits non-zero aborts the whole run with
//! [`Error::ScriptFailed`](crate::Error::ScriptFailed).

mod config;
mod error;
pub mod logging;
mod processor;
mod strategy;

#[doc(inline)]
pub use crate::config::{ComponentConfig, component_file_name};
#[doc(inline)]
pub use crate::error::Error;
#[doc(inline)]
pub use crate::processor::{VendorJob, VendorProcessor};
#[doc(inline)]
pub use crate::strategy::{ScriptHome, VendorStrategy};
