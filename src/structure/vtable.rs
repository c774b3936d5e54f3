// Tue Oct 13 2026 - Alex

use crate::error::{GenError, Result};
use crate::model::{ClassDecl, ObjectModel};
use crate::structure::signature::{Signature, SignatureNormalizer};
use std::collections::HashSet;
use std::fmt;

/// Functions provided by a root capability struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    AddRef,
    Release,
    HasOneRef,
    HasAtLeastOneRef,
    Del,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::AddRef => "AddRef",
            Capability::Release => "Release",
            Capability::HasOneRef => "HasOneRef",
            Capability::HasAtLeastOneRef => "HasAtLeastOneRef",
            Capability::Del => "Del",
        }
    }

    pub fn abi_name(&self) -> &'static str {
        match self {
            Capability::AddRef => "add_ref",
            Capability::Release => "release",
            Capability::HasOneRef => "has_one_ref",
            Capability::HasAtLeastOneRef => "has_at_least_one_ref",
            Capability::Del => "del",
        }
    }

    pub fn return_type(&self) -> &'static str {
        match self {
            Capability::AddRef | Capability::Del => "void",
            Capability::Release | Capability::HasOneRef | Capability::HasAtLeastOneRef => "int",
        }
    }
}

const REF_COUNTED_CAPABILITIES: &[Capability] = &[
    Capability::AddRef,
    Capability::Release,
    Capability::HasOneRef,
    Capability::HasAtLeastOneRef,
];

const SCOPED_CAPABILITIES: &[Capability] = &[Capability::Del];

/// Recognized root of a class hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    RefCounted,
    Scoped,
}

impl RootKind {
    pub fn from_abi_name(abi_name: &str) -> Option<Self> {
        match abi_name {
            "cef_base_ref_counted_t" | "cef_base_t" => Some(RootKind::RefCounted),
            "cef_base_scoped_t" => Some(RootKind::Scoped),
            _ => None,
        }
    }

    pub fn abi_name(&self) -> &'static str {
        match self {
            RootKind::RefCounted => "cef_base_ref_counted_t",
            RootKind::Scoped => "cef_base_scoped_t",
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            RootKind::RefCounted => REF_COUNTED_CAPABILITIES,
            RootKind::Scoped => SCOPED_CAPABILITIES,
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abi_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VTableSlot {
    pub index: usize,
    pub signature: Signature,
}

impl VTableSlot {
    pub fn is_base_capability(&self) -> bool {
        self.signature.is_base_capability()
    }

    pub fn field_name(&self) -> &str {
        &self.signature.field_name
    }

    pub fn delegate_type(&self) -> &str {
        &self.signature.delegate_type
    }
}

impl fmt::Display for VTableSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_mark = if self.is_base_capability() { " [base]" } else { "" };
        write!(f, "[{}] {} {}{}", self.index, self.signature.field_name, self.signature, base_mark)
    }
}

/// Ordered dispatch layout of one class. Field order of the flat struct
/// follows slot order exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VTableLayout {
    pub class_name: String,
    pub class_abi_name: String,
    pub root: RootKind,
    /// ABI names from the nearest-root ancestor down to the class itself.
    pub chain: Vec<String>,
    pub slots: Vec<VTableSlot>,
    /// Class statics; direct calls without a slot.
    pub static_calls: Vec<Signature>,
}

impl VTableLayout {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn base_slots(&self) -> impl Iterator<Item = &VTableSlot> {
        self.slots.iter().filter(|s| s.is_base_capability())
    }

    pub fn own_slots(&self) -> impl Iterator<Item = &VTableSlot> {
        self.slots.iter().filter(|s| !s.is_base_capability())
    }

    /// Slots added by the class itself, not by an ancestor.
    pub fn declared_slots(&self) -> impl Iterator<Item = &VTableSlot> {
        let abi = self.class_abi_name.as_str();
        self.own_slots().filter(move |s| s.signature.interface_name == abi)
    }

    pub fn slot_by_name(&self, name: &str) -> Option<&VTableSlot> {
        self.slots.iter().find(|s| s.signature.name == name)
    }

    /// True when the class derives directly from the root struct.
    pub fn is_root_child(&self) -> bool {
        self.chain.len() == 1
    }

    pub fn is_ref_counted(&self) -> bool {
        self.root == RootKind::RefCounted
    }
}

impl fmt::Display for VTableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VTable for {} ({}) : {}", self.class_name, self.class_abi_name, self.root)?;
        writeln!(f, "  Chain: {}", self.chain.join(" -> "))?;
        writeln!(f, "  Slots: {}", self.slots.len())?;
        for slot in &self.slots {
            writeln!(f, "  {}", slot)?;
        }
        for call in &self.static_calls {
            writeln!(f, "  [static] {}", call)?;
        }
        Ok(())
    }
}

/// Computes [`VTableLayout`]s by walking the inheritance chain.
pub struct VTableBuilder<'a> {
    model: &'a ObjectModel,
    normalizer: SignatureNormalizer<'a>,
}

impl<'a> VTableBuilder<'a> {
    pub fn new(model: &'a ObjectModel, normalizer: SignatureNormalizer<'a>) -> Self {
        Self { model, normalizer }
    }

    /// Ancestors ordered root to leaf (the class itself last) plus the kind
    /// of the root they hang off.
    pub fn ancestry(&self, cls: &'a ClassDecl) -> Result<(Vec<&'a ClassDecl>, RootKind)> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = cls;

        let root = loop {
            if !seen.insert(current.abi_name.as_str()) {
                return Err(GenError::InheritanceCycle(current.name.clone()));
            }
            chain.push(current);

            if let Some(kind) = RootKind::from_abi_name(&current.parent_abi_name) {
                break kind;
            }

            let parent = self
                .model
                .class_by_name(&current.parent_name)
                .or_else(|| self.model.class_by_abi_name(&current.parent_abi_name));

            match parent {
                Some(parent) => current = parent,
                None => {
                    let base = if current.parent_abi_name.is_empty() {
                        current.parent_name.clone()
                    } else {
                        current.parent_abi_name.clone()
                    };
                    return Err(GenError::UnsupportedBase {
                        class: cls.name.clone(),
                        base,
                    });
                }
            }
        };

        chain.reverse();
        Ok((chain, root))
    }

    pub fn build(&self, cls: &'a ClassDecl) -> Result<VTableLayout> {
        let (chain, root) = self.ancestry(cls)?;
        let mut slots = Vec::new();

        for capability in root.capabilities() {
            let index = slots.len();
            slots.push(VTableSlot {
                index,
                signature: self.normalizer.base_capability(cls, *capability, index),
            });
        }

        for ancestor in &chain {
            for func in &ancestor.virtual_functions {
                let index = slots.len();
                slots.push(VTableSlot {
                    index,
                    signature: self.normalizer.virtual_method(func, ancestor, index),
                });
            }
        }

        let static_calls = cls
            .static_functions
            .iter()
            .map(|func| self.normalizer.class_static(func, cls))
            .collect();

        log::debug!("{}: {} slots over {} class(es), root {}", cls.name, slots.len(), chain.len(), root);

        Ok(VTableLayout {
            class_name: cls.name.clone(),
            class_abi_name: cls.abi_name.clone(),
            root,
            chain: chain.iter().map(|c| c.abi_name.clone()).collect(),
            slots,
            static_calls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FunctionDecl;
    use crate::types::TypeMapper;

    fn chain_model() -> ObjectModel {
        ObjectModel::new()
            .with_class(
                ClassDecl::new("C", "c_t")
                    .with_parent("B", "b_t")
                    .with_virtual(FunctionDecl::new("H", "h", "void")),
            )
            .with_class(
                ClassDecl::new("A", "a_t")
                    .with_parent("CefBaseRefCounted", "cef_base_ref_counted_t"),
            )
            .with_class(
                ClassDecl::new("B", "b_t")
                    .with_parent("A", "a_t")
                    .with_virtual(FunctionDecl::new("F", "f", "void"))
                    .with_virtual(FunctionDecl::new("G", "g", "int")),
            )
    }

    #[test]
    fn test_slot_indices_follow_chain() {
        let model = chain_model();
        let mapper = TypeMapper::builtin();
        let builder = VTableBuilder::new(&model, SignatureNormalizer::new(&mapper, "cef"));

        let c = model.class_by_name("C").unwrap();
        let layout = builder.build(c).unwrap();

        assert_eq!(layout.root, RootKind::RefCounted);
        assert_eq!(layout.chain, vec!["a_t", "b_t", "c_t"]);
        assert_eq!(layout.len(), 7);
        assert_eq!(layout.base_slots().count(), 4);
        assert_eq!(layout.slot_by_name("AddRef").unwrap().index, 0);
        assert_eq!(layout.slot_by_name("HasAtLeastOneRef").unwrap().index, 3);
        assert_eq!(layout.slot_by_name("F").unwrap().index, 4);
        assert_eq!(layout.slot_by_name("G").unwrap().index, 5);
        assert_eq!(layout.slot_by_name("H").unwrap().index, 6);
        assert_eq!(layout.declared_slots().count(), 1);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let model = chain_model();
        let mapper = TypeMapper::builtin();
        let builder = VTableBuilder::new(&model, SignatureNormalizer::new(&mapper, "cef"));
        let c = model.class_by_name("C").unwrap();

        let first = builder.build(c).unwrap();
        let b = builder.build(model.class_by_name("B").unwrap()).unwrap();
        let second = builder.build(c).unwrap();

        assert_eq!(first, second);
        assert_eq!(b.slot_by_name("F").unwrap().index, first.slot_by_name("F").unwrap().index);
    }

    #[test]
    fn test_inherited_slot_uses_declaring_self() {
        let model = chain_model();
        let mapper = TypeMapper::builtin();
        let builder = VTableBuilder::new(&model, SignatureNormalizer::new(&mapper, "cef"));

        let layout = builder.build(model.class_by_name("C").unwrap()).unwrap();
        let f = layout.slot_by_name("F").unwrap();

        assert_eq!(f.signature.interface_name, "b_t");
        assert_eq!(f.signature.target_args[0].ty, "b_t*");
        assert_eq!(layout.slot_by_name("Release").unwrap().signature.target_args[0].ty, "c_t*");
    }

    #[test]
    fn test_scoped_root() {
        let model = ObjectModel::new().with_class(
            ClassDecl::new("CefView", "cef_view_t")
                .with_parent("CefBaseScoped", "cef_base_scoped_t")
                .with_virtual(FunctionDecl::new("Layout", "layout", "void")),
        );
        let mapper = TypeMapper::builtin();
        let builder = VTableBuilder::new(&model, SignatureNormalizer::new(&mapper, "cef"));

        let layout = builder.build(&model.classes()[0]).unwrap();
        assert_eq!(layout.root, RootKind::Scoped);
        assert_eq!(layout.slots[0].field_name(), "_base._del");
        assert_eq!(layout.slot_by_name("Layout").unwrap().index, 1);
    }

    #[test]
    fn test_unsupported_base() {
        let model = ObjectModel::new().with_class(
            ClassDecl::new("CefOdd", "cef_odd_t").with_parent("CefUnknown", "cef_unknown_t"),
        );
        let mapper = TypeMapper::builtin();
        let builder = VTableBuilder::new(&model, SignatureNormalizer::new(&mapper, "cef"));

        match builder.build(&model.classes()[0]) {
            Err(GenError::UnsupportedBase { class, base }) => {
                assert_eq!(class, "CefOdd");
                assert_eq!(base, "cef_unknown_t");
            }
            other => panic!("expected UnsupportedBase, got {:?}", other),
        }
    }

    #[test]
    fn test_inheritance_cycle() {
        let model = ObjectModel::new()
            .with_class(ClassDecl::new("X", "x_t").with_parent("Y", "y_t"))
            .with_class(ClassDecl::new("Y", "y_t").with_parent("X", "x_t"));
        let mapper = TypeMapper::builtin();
        let builder = VTableBuilder::new(&model, SignatureNormalizer::new(&mapper, "cef"));

        assert!(matches!(builder.build(&model.classes()[0]), Err(GenError::InheritanceCycle(_))));
    }

    #[test]
    fn test_statics_have_no_slot() {
        let model = ObjectModel::new().with_class(
            ClassDecl::new("Widget", "widget_t")
                .with_parent("Base", "cef_base_ref_counted_t")
                .with_static(FunctionDecl::new("Create", "widget_create", "struct _widget_t*")),
        );
        let mapper = TypeMapper::builtin();
        let builder = VTableBuilder::new(&model, SignatureNormalizer::new(&mapper, "cef"));

        let layout = builder.build(&model.classes()[0]).unwrap();
        assert_eq!(layout.len(), 4);
        assert_eq!(layout.static_calls.len(), 1);
        assert!(layout.slot_by_name("Create").is_none());
    }
}
