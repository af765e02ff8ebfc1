//! Reading the per-package component file.

use std::path::Path;

use crate::error::Error;
use crate::logging;
use crate::strategy::VendorStrategy;

/// The component file name for a package.
pub fn component_file_name(pkg_name: &str) -> String {
    format!("{pkg_name}.component.toml")
}

#[derive(Debug, serde::Deserialize)]
struct VendorsSpec {
    vendor_types: Vec<String>,
}

/// A parsed `<pkg_name>.component.toml` document.
#[derive(Debug)]
pub struct ComponentConfig {
    document: toml::Table,
    /// Where the document came from, for error messages.
    file: String,
}

impl ComponentConfig {
    /// Parse a component document from a string. `file` names the origin for
    /// error reporting.
    pub fn parse<S: AsRef<str>>(document: S, file: &str) -> Result<Self, Error> {
        let document = document.as_ref().parse::<toml::Table>()?;
        Ok(Self {
            document,
            file: file.to_string(),
        })
    }

    /// Attempt to load the component file for `pkg_name` from `pkg_path`.
    ///
    /// A file that cannot be read or parsed is reported to the pipeline log
    /// and collapses to `None`; the caller treats `None` as "apply the legacy
    /// strategy". Only lookups *inside* a well-formed document can fail the
    /// run.
    pub fn load(pkg_path: &Path, pkg_name: &str) -> Option<Self> {
        let file = pkg_path.join(component_file_name(pkg_name));
        let text = match std::fs::read_to_string(&file) {
            Ok(text) => text,
            Err(err) => {
                logging::error(
                    &format!("Failed to read {} file: {err}", file.display()),
                    true,
                );
                return None;
            }
        };
        match Self::parse(text, &file.display().to_string()) {
            Ok(config) => Some(config),
            Err(err) => {
                logging::error(
                    &format!("Failed to read {} file: {err}", file.display()),
                    true,
                );
                None
            }
        }
    }

    /// The ordered strategy list declared at
    /// `components.<pkg_name>.vendors.vendor_types`.
    ///
    /// Strategies are returned in declared order and are not deduplicated;
    /// a repeated identifier runs its script again.
    pub fn vendor_strategies(&self, pkg_name: &str) -> Result<Vec<VendorStrategy>, Error> {
        let vendors = self
            .document
            .get("components")
            .and_then(|v| v.get(pkg_name))
            .and_then(|v| v.get("vendors"))
            .and_then(|v| v.as_table())
            .ok_or_else(|| Error::MissingComponentTable {
                path: format!("components.{pkg_name}.vendors"),
                file: self.file.clone(),
            })?;
        let spec: VendorsSpec = toml::Value::Table(vendors.clone())
            .try_into()
            .map_err(|err| Error::InvalidVendorsTable {
                component: pkg_name.to_string(),
                err,
            })?;
        spec.vendor_types
            .iter()
            .map(|value| value.parse())
            .collect()
    }
}

#[cfg(test)]
mod test_component_config {
    use super::*;

    #[test]
    fn parse_declared_strategies_in_order() {
        let config = ComponentConfig::parse(
            r#"
            [components.foo.vendors]
            vendor_types = ["go", "cargo"]
            "#,
            "foo.component.toml",
        )
        .unwrap();
        let strategies = config.vendor_strategies("foo").unwrap();
        assert_eq!(strategies, [VendorStrategy::Go, VendorStrategy::Cargo]);
    }

    #[test]
    fn repeated_strategies_are_kept() {
        let config = ComponentConfig::parse(
            r#"
            [components.foo.vendors]
            vendor_types = ["custom", "custom"]
            "#,
            "foo.component.toml",
        )
        .unwrap();
        let strategies = config.vendor_strategies("foo").unwrap();
        assert_eq!(
            strategies,
            [VendorStrategy::Custom, VendorStrategy::Custom]
        );
    }

    #[test]
    fn unknown_strategy_identifier_fails() {
        let config = ComponentConfig::parse(
            r#"
            [components.foo.vendors]
            vendor_types = ["go", "npm"]
            "#,
            "foo.component.toml",
        )
        .unwrap();
        let result = config.vendor_strategies("foo");
        assert!(matches!(
            result,
            Err(Error::InvalidStrategy { value }) if value == "npm"
        ));
    }

    #[test]
    fn missing_component_entry_fails() {
        let config = ComponentConfig::parse(
            r#"
            [components.bar.vendors]
            vendor_types = ["go"]
            "#,
            "foo.component.toml",
        )
        .unwrap();
        let result = config.vendor_strategies("foo");
        assert!(matches!(
            result,
            Err(Error::MissingComponentTable { path, .. }) if path == "components.foo.vendors"
        ));
    }

    #[test]
    fn missing_vendor_types_key_fails() {
        let config = ComponentConfig::parse(
            r#"
            [components.foo.vendors]
            other = 1
            "#,
            "foo.component.toml",
        )
        .unwrap();
        let result = config.vendor_strategies("foo");
        assert!(matches!(
            result,
            Err(Error::InvalidVendorsTable { component, .. }) if component == "foo"
        ));
    }

    #[test]
    fn invalid_toml_document_fails_parse() {
        let result = ComponentConfig::parse("not a toml document :(", "foo.component.toml");
        assert!(matches!(result, Err(Error::TomlInvalid(_))));
    }
}
