// Mon Oct 12 2026 - Alex

//! Declarative class classification.
//!
//! Generation behaviour per class (role, rename, reversibility, auto-dispose)
//! comes from a flat table keyed by the logical class name. Emitters consult
//! it instead of specializing per class kind.

pub mod builtin;
pub mod role;

pub use role::ClassRole;

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub role: ClassRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub reversible: bool,
    #[serde(default)]
    pub autodispose: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

impl ClassDef {
    pub fn new(role: ClassRole) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn proxy() -> Self {
        Self::new(ClassRole::PROXY)
    }

    pub fn handler() -> Self {
        Self::new(ClassRole::HANDLER)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_reversible(mut self, reversible: bool) -> Self {
        self.reversible = reversible;
        self
    }

    pub fn with_autodispose(mut self, autodispose: bool) -> Self {
        self.autodispose = autodispose;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationSchema {
    classes: IndexMap<String, ClassDef>,
}

impl ClassificationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut schema = Self::new();
        for &(name, role, rename, reversible, autodispose) in builtin::BUILTIN_CLASSES {
            let mut def = ClassDef::new(role)
                .with_reversible(reversible)
                .with_autodispose(autodispose);
            if let Some(rename) = rename {
                def = def.with_name(rename);
            }
            schema.insert(name, def);
        }
        schema
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn insert(&mut self, name: &str, def: ClassDef) {
        self.classes.insert(name.to_string(), def);
    }

    pub fn with_class(mut self, name: &str, def: ClassDef) -> Self {
        self.insert(name, def);
        self
    }

    /// Entries of `other` replace entries of the same name.
    pub fn merge(&mut self, other: ClassificationSchema) {
        self.classes.extend(other.classes);
    }

    pub fn get(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Empty when the class is not listed; the driver rejects that before
    /// generating anything.
    pub fn role(&self, name: &str) -> ClassRole {
        self.get(name).map(|d| d.role).unwrap_or_else(ClassRole::empty)
    }

    pub fn is_proxy(&self, name: &str) -> bool {
        self.role(name).is_proxy()
    }

    pub fn is_handler(&self, name: &str) -> bool {
        self.role(name).is_handler()
    }

    pub fn display_name(&self, name: &str) -> String {
        self.get(name)
            .and_then(|d| d.name.clone())
            .unwrap_or_else(|| name.to_string())
    }

    pub fn is_reversible(&self, name: &str) -> bool {
        self.get(name).map(|d| d.reversible).unwrap_or(false)
    }

    pub fn is_autodispose(&self, name: &str) -> bool {
        self.get(name).map(|d| d.autodispose).unwrap_or(false)
    }

    pub fn is_abstract(&self, name: &str) -> bool {
        self.get(name).map(|d| d.is_abstract).unwrap_or(false)
    }

    pub fn overview(&self, name: &str) -> Vec<String> {
        vec![format!("Role: {}", self.role(name))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookups() {
        let schema = ClassificationSchema::builtin();

        assert!(schema.is_proxy("CefBrowser"));
        assert!(!schema.is_handler("CefBrowser"));
        assert!(schema.is_handler("CefClient"));
        assert!(schema.is_reversible("CefClient"));
        assert!(schema.is_autodispose("CefResourceHandler"));
        assert_eq!(schema.display_name("CefDOMNode"), "CefDomNode");
        assert_eq!(schema.display_name("CefBrowser"), "CefBrowser");
    }

    #[test]
    fn test_missing_class_defaults() {
        let schema = ClassificationSchema::builtin();

        assert!(schema.role("CefNotListed").is_empty());
        assert_eq!(schema.display_name("CefNotListed"), "CefNotListed");
        assert!(!schema.is_reversible("CefNotListed"));
        assert!(!schema.is_autodispose("CefNotListed"));
    }

    #[test]
    fn test_schema_from_json() {
        let json = r#"{
            "Widget": { "role": "PROXY" },
            "WidgetObserver": { "role": "HANDLER", "name": "WidgetListener", "autodispose": true },
            "Hybrid": { "role": "PROXY | HANDLER", "abstract": true }
        }"#;

        let schema = ClassificationSchema::from_json_str(json).unwrap();
        assert_eq!(schema.len(), 3);
        assert!(schema.is_proxy("Widget"));
        assert_eq!(schema.display_name("WidgetObserver"), "WidgetListener");
        assert!(schema.is_autodispose("WidgetObserver"));
        assert!(schema.is_abstract("Hybrid"));
        assert_eq!(schema.overview("Hybrid"), vec!["Role: PROXY+HANDLER".to_string()]);
    }

    #[test]
    fn test_merge_overrides() {
        let mut schema = ClassificationSchema::builtin();
        let before = schema.len();
        schema.merge(ClassificationSchema::new().with_class("CefBrowser", ClassDef::handler()));

        assert_eq!(schema.len(), before);
        assert!(schema.is_handler("CefBrowser"));
    }
}
