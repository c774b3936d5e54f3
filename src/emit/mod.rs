// Wed Oct 14 2026 - Alex

//! Generated artifact emitters.
//!
//! Every emitter is a pure function of a class, its computed layout and the
//! shared [`EmitContext`]; nothing here touches the filesystem.

pub mod handler;
pub mod layout;
pub mod manifest;
pub mod proxy;
pub mod statics;
pub mod version;
pub mod wrapper;
pub mod writer;

pub use writer::CodeWriter;

use crate::config::GeneratorConfig;
use crate::model::ClassDecl;
use crate::schema::{ClassRole, ClassificationSchema};
use crate::structure::{Signature, SignatureNormalizer};
use crate::types::TypeMapper;

pub struct EmitContext<'a> {
    pub config: &'a GeneratorConfig,
    pub schema: &'a ClassificationSchema,
    pub mapper: &'a TypeMapper,
}

impl<'a> EmitContext<'a> {
    pub fn new(config: &'a GeneratorConfig, schema: &'a ClassificationSchema, mapper: &'a TypeMapper) -> Self {
        Self { config, schema, mapper }
    }

    pub fn normalizer(&self) -> SignatureNormalizer<'a> {
        SignatureNormalizer::new(self.mapper, &self.config.abi_prefix)
    }

    pub fn role(&self, cls: &ClassDecl) -> ClassRole {
        self.schema.role(&cls.name)
    }

    /// Name of the generated wrapper class.
    pub fn wrapper_name(&self, cls: &ClassDecl) -> String {
        self.schema.display_name(&cls.name)
    }

    pub fn native_class(&self) -> &str {
        &self.config.native_class
    }

    /// `[DllImport]` direct-call entry, shared by class statics and the
    /// free-function table.
    pub fn dll_import(&self, w: &mut CodeWriter, sig: &Signature) {
        let nm = self.native_class();
        w.line(&format!("// {}", sig.name));
        w.line(&format!(
            "[DllImport({}.DllName, EntryPoint = \"{}\", CallingConvention = {}.CEF_CALL)]",
            nm, sig.entry_point, nm
        ));
        w.line(&format!(
            "public static extern {} {}({});",
            sig.target_return,
            sig.target_name,
            sig.args_proto()
        ));
        w.blank();
    }

    /// `/// <summary>` block; nothing when there is no text.
    pub fn xml_doc(&self, w: &mut CodeWriter, comment: &[String]) {
        let lines: Vec<String> = comment
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && *l != "/")
            .map(crate::utils::naming::escape_xml)
            .collect();
        if lines.is_empty() {
            return;
        }
        w.line("/// <summary>");
        for line in lines {
            w.line(&format!("/// {}", line));
        }
        w.line("/// </summary>");
    }
}
