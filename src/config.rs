// Tue Oct 13 2026 - Alex

use crate::error::{GenError, Result};
use crate::model::ClassDecl;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A class the generator adds to the parsed model on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticClass {
    pub name: String,
    pub abi_name: String,
    pub parent_name: String,
    pub parent_abi_name: String,
}

impl SyntheticClass {
    pub fn new(name: &str, abi_name: &str, parent_name: &str, parent_abi_name: &str) -> Self {
        Self {
            name: name.to_string(),
            abi_name: abi_name.to_string(),
            parent_name: parent_name.to_string(),
            parent_abi_name: parent_abi_name.to_string(),
        }
    }

    pub fn to_class(&self) -> ClassDecl {
        ClassDecl::new(&self.name, &self.abi_name).with_parent(&self.parent_name, &self.parent_abi_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub namespace: String,
    pub interop_namespace: String,
    /// Static class holding `DllName`, `ALIGN`, `CEF_CALL` and the free functions.
    pub native_class: String,
    pub abi_prefix: String,
    pub struct_path: PathBuf,
    pub static_table_path: PathBuf,
    pub static_table_filename: String,
    pub version_filename: String,
    pub wrapper_path: PathBuf,
    pub manifest_filename: String,
    pub make_backup: bool,
    pub synthetic_classes: Vec<SyntheticClass>,
    pub schema_file: Option<PathBuf>,
    pub type_tables_file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "Xilium.CefGlue".to_string(),
            interop_namespace: "Xilium.CefGlue.Interop".to_string(),
            native_class: "libcef".to_string(),
            abi_prefix: "cef".to_string(),
            struct_path: PathBuf::from("Interop/Classes.g"),
            static_table_path: PathBuf::from("Interop"),
            static_table_filename: "libcef.g.cs".to_string(),
            version_filename: "version.g.cs".to_string(),
            wrapper_path: PathBuf::from("Classes.g"),
            manifest_filename: "CefGlue.g.props".to_string(),
            make_backup: false,
            synthetic_classes: vec![SyntheticClass::new(
                "CefUserData",
                "cef_user_data_t",
                "CefBaseRefCounted",
                "cef_base_ref_counted_t",
            )],
            schema_file: None,
            type_tables_file: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    pub fn with_backup(mut self, make_backup: bool) -> Self {
        self.make_backup = make_backup;
        self
    }

    pub fn with_schema_file(mut self, path: PathBuf) -> Self {
        self.schema_file = Some(path);
        self
    }

    pub fn with_type_tables_file(mut self, path: PathBuf) -> Self {
        self.type_tables_file = Some(path);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("namespace", &self.namespace),
            ("interop_namespace", &self.interop_namespace),
            ("native_class", &self.native_class),
            ("static_table_filename", &self.static_table_filename),
            ("version_filename", &self.version_filename),
            ("manifest_filename", &self.manifest_filename),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(GenError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }
        if self.static_table_filename == self.version_filename {
            return Err(GenError::InvalidConfig(
                "static_table_filename and version_filename must differ".to_string(),
            ));
        }
        for class in &self.synthetic_classes {
            if class.name.is_empty() || class.abi_name.is_empty() {
                return Err(GenError::InvalidConfig("synthetic class needs a name and an ABI name".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.synthetic_classes.len(), 1);
        assert_eq!(config.synthetic_classes[0].to_class().parent_abi_name, "cef_base_ref_counted_t");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{ "namespace": "My.Cef", "make_backup": true }"#).unwrap();
        assert_eq!(config.namespace, "My.Cef");
        assert_eq!(config.interop_namespace, "Xilium.CefGlue.Interop");
        assert!(config.make_backup);
    }

    #[test]
    fn test_validate_rejects_empty_namespace() {
        let config = GeneratorConfig::new().with_namespace(" ");
        assert!(matches!(config.validate(), Err(GenError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_clashing_filenames() {
        let mut config = GeneratorConfig::new();
        config.version_filename = config.static_table_filename.clone();
        assert!(config.validate().is_err());
    }
}
