// Mon Oct 12 2026 - Alex

//! Pre-parsed native object model.
//!
//! The header parser lives outside this crate. It hands over a JSON document
//! with every class (name, ABI struct name, parent, static and virtual
//! functions, doc comment) and every global function. Everything here is
//! read-only input for the generator.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

impl Argument {
    pub fn new(ty: &str, name: &str) -> Self {
        Self {
            ty: ty.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// One method or free function at the ABI level.
///
/// `arguments` never contains the implicit `self` of a virtual method; the
/// signature normalizer adds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub abi_name: String,
    pub return_type: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub comment: Vec<String>,
}

impl FunctionDecl {
    pub fn new(name: &str, abi_name: &str, return_type: &str) -> Self {
        Self {
            name: name.to_string(),
            abi_name: abi_name.to_string(),
            return_type: return_type.to_string(),
            arguments: Vec::new(),
            is_static: false,
            comment: Vec::new(),
        }
    }

    pub fn with_arg(mut self, ty: &str, name: &str) -> Self {
        self.arguments.push(Argument::new(ty, name));
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_comment(mut self, line: &str) -> Self {
        self.comment.push(line.to_string());
        self
    }

    /// A C prototype of `name(void)` is a function without arguments.
    pub fn has_no_arguments(&self) -> bool {
        self.arguments.is_empty()
            || (self.arguments.len() == 1 && self.arguments[0].ty.trim() == "void" && self.arguments[0].name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub abi_name: String,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub parent_abi_name: String,
    #[serde(default)]
    pub static_functions: Vec<FunctionDecl>,
    #[serde(default)]
    pub virtual_functions: Vec<FunctionDecl>,
    #[serde(default)]
    pub doc_comment: Vec<String>,
}

impl ClassDecl {
    pub fn new(name: &str, abi_name: &str) -> Self {
        Self {
            name: name.to_string(),
            abi_name: abi_name.to_string(),
            parent_name: String::new(),
            parent_abi_name: String::new(),
            static_functions: Vec::new(),
            virtual_functions: Vec::new(),
            doc_comment: Vec::new(),
        }
    }

    pub fn with_parent(mut self, name: &str, abi_name: &str) -> Self {
        self.parent_name = name.to_string();
        self.parent_abi_name = abi_name.to_string();
        self
    }

    pub fn with_virtual(mut self, func: FunctionDecl) -> Self {
        self.virtual_functions.push(func.with_static(false));
        self
    }

    pub fn with_static(mut self, func: FunctionDecl) -> Self {
        self.static_functions.push(func.with_static(true));
        self
    }

    pub fn with_comment(mut self, line: &str) -> Self {
        self.doc_comment.push(line.to_string());
        self
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abi_name)?;
        if !self.parent_name.is_empty() {
            write!(f, " : {}", self.parent_name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectModel {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    #[serde(default)]
    pub functions: Vec<FunctionDecl>,
}

impl ObjectModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn with_class(mut self, cls: ClassDecl) -> Self {
        self.classes.push(cls);
        self
    }

    pub fn with_function(mut self, func: FunctionDecl) -> Self {
        self.functions.push(func);
        self
    }

    pub fn classes(&self) -> &[ClassDecl] {
        &self.classes
    }

    pub fn functions(&self) -> &[FunctionDecl] {
        &self.functions
    }

    pub fn class_by_name(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn class_by_abi_name(&self, abi_name: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|c| c.abi_name == abi_name)
    }

    /// Classes ordered by logical name, the order every generation pass uses.
    pub fn sorted_classes(&self) -> Vec<&ClassDecl> {
        let mut classes: Vec<&ClassDecl> = self.classes.iter().collect();
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_json() {
        let json = r#"{
            "classes": [{
                "name": "CefWidget",
                "abi_name": "cef_widget_t",
                "parent_name": "CefBaseRefCounted",
                "parent_abi_name": "cef_base_ref_counted_t",
                "virtual_functions": [{
                    "name": "Resize",
                    "abi_name": "resize",
                    "return_type": "void",
                    "arguments": [{ "type": "int", "name": "width" }, { "type": "int", "name": "height" }]
                }]
            }],
            "functions": [{ "name": "Shutdown", "abi_name": "cef_shutdown", "return_type": "void" }]
        }"#;

        let model = ObjectModel::from_json_str(json).unwrap();
        assert_eq!(model.classes().len(), 1);
        assert_eq!(model.functions().len(), 1);

        let widget = model.class_by_abi_name("cef_widget_t").unwrap();
        assert_eq!(widget.virtual_functions[0].arguments[1], Argument::new("int", "height"));
        assert!(widget.static_functions.is_empty());
    }

    #[test]
    fn test_void_argument_list() {
        let func = FunctionDecl::new("Quit", "cef_quit", "void").with_arg("void", "");
        assert!(func.has_no_arguments());

        let func = FunctionDecl::new("Run", "cef_run", "void").with_arg("int", "code");
        assert!(!func.has_no_arguments());
    }

    #[test]
    fn test_sorted_classes() {
        let model = ObjectModel::new()
            .with_class(ClassDecl::new("CefZip", "cef_zip_t"))
            .with_class(ClassDecl::new("CefApp", "cef_app_t"));

        let names: Vec<&str> = model.sorted_classes().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["CefApp", "CefZip"]);
    }
}
