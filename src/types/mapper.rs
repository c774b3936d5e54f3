// Mon Oct 12 2026 - Alex

use crate::model::ClassDecl;
use crate::types::dictionary::{TypeTables, TARGET_KEYWORDS};
use indexmap::IndexMap;

const INDIRECTION: char = '*';

/// Native type spelling -> target type spelling.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    concrete: IndexMap<String, String>,
    enums: IndexMap<String, String>,
    structs: IndexMap<String, String>,
    platform_retval: IndexMap<String, Vec<String>>,
}

impl TypeMapper {
    pub fn new(tables: TypeTables) -> Self {
        Self {
            concrete: tables.concrete,
            enums: tables.enums,
            structs: IndexMap::new(),
            platform_retval: tables.platform_retval,
        }
    }

    pub fn builtin() -> Self {
        Self::new(TypeTables::builtin())
    }

    /// Rebuilds the struct table from the full class list. Called once per run.
    pub fn register_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a ClassDecl>) {
        self.structs.clear();
        for cls in classes {
            self.structs.insert(cls.abi_name.clone(), cls.abi_name.clone());
        }
    }

    pub fn register_struct(&mut self, abi_name: &str, target_name: &str) {
        self.structs.insert(abi_name.to_string(), target_name.to_string());
    }

    pub fn struct_count(&self) -> usize {
        self.structs.len()
    }

    pub fn map(&self, native: &str) -> String {
        let (bare, depth) = strip_type(native);

        let mapped = match self.lookup(bare) {
            Some(target) => target.to_string(),
            None => {
                log::warn!("C type \"{}\" is not mapped to a target type (processed to \"{}\")", native, bare);
                bare.to_string()
            }
        };

        let mut result = mapped;
        for _ in 0..depth {
            result.push(INDIRECTION);
        }
        result
    }

    pub fn is_mapped(&self, native: &str) -> bool {
        let (bare, _) = strip_type(native);
        self.lookup(bare).is_some()
    }

    fn lookup(&self, bare: &str) -> Option<&str> {
        self.concrete
            .get(bare)
            .or_else(|| self.enums.get(bare))
            .or_else(|| self.structs.get(bare))
            .map(|s| s.as_str())
    }

    /// Name suffixes of the per-platform variants of a target return type.
    /// A single unsuffixed variant unless the table declares otherwise.
    pub fn platform_suffixes(&self, target_return: &str) -> Vec<String> {
        match self.platform_retval.get(target_return) {
            Some(suffixes) if !suffixes.is_empty() => suffixes.clone(),
            _ => vec![String::new()],
        }
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn quote_name(name: &str) -> String {
    if TARGET_KEYWORDS.contains(&name) {
        format!("@{}", name)
    } else {
        name.to_string()
    }
}

/// Strips indirection and qualifiers, returning the bare name and the
/// pointer depth.
fn strip_type(native: &str) -> (&str, usize) {
    let mut ctype = native.trim();
    let mut depth = 0;

    while let Some(rest) = ctype.strip_suffix(INDIRECTION) {
        depth += 1;
        ctype = rest.trim_end();
        if let Some(rest) = strip_keyword_suffix(ctype, "const") {
            ctype = rest;
        }
    }

    for qualifier in ["const", "struct", "enum"] {
        if let Some(rest) = strip_keyword_prefix(ctype, qualifier) {
            ctype = rest;
        }
    }

    if let Some(rest) = ctype.strip_prefix('_') {
        ctype = rest.trim_start();
    }

    (ctype, depth)
}

fn strip_keyword_prefix<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

fn strip_keyword_suffix<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = s.strip_suffix(keyword)?;
    if rest.is_empty() || rest.ends_with(char::is_whitespace) || rest.ends_with(INDIRECTION) {
        Some(rest.trim_end())
    } else {
        None
    }
}
