//! The closed set of vendor strategies and their script bindings.

use crate::error::Error;

/// A named method of obtaining a package's third-party sources.
///
/// The set is closed: configuration strings parse through [`FromStr`] and
/// anything outside the five known identifiers is rejected with
/// [`Error::InvalidStrategy`].
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorStrategy {
    /// Download a Go module cache.
    Go,
    /// Produce a cargo vendor directory.
    Cargo,
    /// A package-local script that builds the source tarball itself.
    Custom,
    /// Clone the package's git submodules. Requires a source URL.
    GitSubmodules,
    /// The fallback applied when no component file exists. Same script as
    /// `custom`, but the script does not accept a vendor version.
    Legacy,
}

/// Where a strategy's script lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptHome {
    /// Alongside the package being vendored.
    Package,
    /// In the tool's shared script directory.
    Shared,
}

pub(crate) const STRATEGY_VARIANTS: &[VendorStrategy] = &[
    VendorStrategy::Go,
    VendorStrategy::Cargo,
    VendorStrategy::Custom,
    VendorStrategy::GitSubmodules,
    VendorStrategy::Legacy,
];

impl VendorStrategy {
    /// The file name of the script implementing this strategy.
    pub fn script_name(&self) -> &'static str {
        match self {
            Self::Go => "generate_go_vendor.sh",
            Self::Cargo => "generate_cargo_vendor.sh",
            Self::GitSubmodules => "generate_git_submodules_vendor.sh",
            Self::Custom => "generate_source_tarball.sh",
            Self::Legacy => "generate_source_tarball.sh",
        }
    }

    /// Where to search for this strategy's script. `custom` and `legacy`
    /// scripts ship inside the package folder; the rest are shared.
    pub fn script_home(&self) -> ScriptHome {
        match self {
            Self::Custom | Self::Legacy => ScriptHome::Package,
            Self::Go | Self::Cargo | Self::GitSubmodules => ScriptHome::Shared,
        }
    }

    /// Whether the script takes a `--vendorVersion` argument. Legacy scripts
    /// predate that argument and do not accept it.
    pub fn wants_vendor_version(&self) -> bool {
        !matches!(self, Self::Legacy)
    }

    /// Whether the script needs a `--gitUrl` argument.
    pub fn requires_source_url(&self) -> bool {
        matches!(self, Self::GitSubmodules)
    }
}

impl std::str::FromStr for VendorStrategy {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "go" => Ok(Self::Go),
            "cargo" => Ok(Self::Cargo),
            "custom" => Ok(Self::Custom),
            "git_submodules" => Ok(Self::GitSubmodules),
            "legacy" => Ok(Self::Legacy),
            _ => Err(Error::InvalidStrategy {
                value: value.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for VendorStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Go => write!(f, "go"),
            Self::Cargo => write!(f, "cargo"),
            Self::Custom => write!(f, "custom"),
            Self::GitSubmodules => write!(f, "git_submodules"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}
