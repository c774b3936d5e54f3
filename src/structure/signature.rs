// Tue Oct 13 2026 - Alex

use crate::model::{ClassDecl, FunctionDecl};
use crate::structure::vtable::Capability;
use crate::types::{quote_name, TypeMapper};
use crate::utils::naming::{strip_abi_suffix, to_abi_case};
use std::fmt;

pub const SELF_ARG: &str = "self";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// One of the root capability functions (add_ref, release, ...).
    BaseCapability,
    Virtual,
    /// Class-scoped, non-virtual.
    Static,
    /// Free function of the native library.
    Global,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetArg {
    pub ty: String,
    pub name: String,
}

impl TargetArg {
    pub fn new(ty: &str, name: &str) -> Self {
        Self {
            ty: ty.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for TargetArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Fully normalized description of one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub kind: FunctionKind,
    /// Vtable slot; 0 for functions without one.
    pub slot: usize,
    /// Logical name, e.g. `Resize`.
    pub name: String,
    /// ABI name, e.g. `resize` for a method or `cef_widget_create` for a static.
    pub abi_name: String,
    /// Field of the flat struct holding the function pointer.
    pub field_name: String,
    pub delegate_type: String,
    /// Flat struct type the function belongs to.
    pub interface_name: String,
    /// Name of the generated interop entry.
    pub target_name: String,
    pub target_return: String,
    pub target_args: Vec<TargetArg>,
    /// Exported symbol for direct calls.
    pub entry_point: String,
    pub comment: Vec<String>,
}

impl Signature {
    pub fn is_base_capability(&self) -> bool {
        self.kind == FunctionKind::BaseCapability
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self.kind, FunctionKind::BaseCapability | FunctionKind::Virtual)
    }

    pub fn returns_void(&self) -> bool {
        self.target_return == "void"
    }

    pub fn slot_id(&self) -> String {
        format!("{:x}", self.slot)
    }

    pub fn delegate_slot(&self) -> String {
        format!("_ds{:x}", self.slot)
    }

    pub fn args_proto(&self) -> String {
        join_proto(&self.target_args)
    }

    pub fn arg_names(&self) -> String {
        self.target_args.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
    }

    /// Arguments without the leading `self`.
    pub fn instance_args(&self) -> &[TargetArg] {
        match self.target_args.first() {
            Some(first) if first.name == SELF_ARG => &self.target_args[1..],
            _ => &self.target_args,
        }
    }

    pub fn instance_args_proto(&self) -> String {
        join_proto(self.instance_args())
    }

    pub fn instance_arg_names(&self) -> Vec<&str> {
        self.instance_args().iter().map(|a| a.name.as_str()).collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}({})", self.target_return, self.target_name, self.args_proto())
    }
}

fn join_proto(args: &[TargetArg]) -> String {
    args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ")
}

/// Turns native declarations into [`Signature`]s.
pub struct SignatureNormalizer<'a> {
    mapper: &'a TypeMapper,
    abi_prefix: &'a str,
}

impl<'a> SignatureNormalizer<'a> {
    pub fn new(mapper: &'a TypeMapper, abi_prefix: &'a str) -> Self {
        Self { mapper, abi_prefix }
    }

    /// A virtual method declared by `declaring`, placed at `slot`.
    pub fn virtual_method(&self, func: &FunctionDecl, declaring: &ClassDecl, slot: usize) -> Signature {
        let mut args = vec![TargetArg::new(&format!("{}*", declaring.abi_name), SELF_ARG)];
        args.extend(self.map_args(func));

        Signature {
            kind: FunctionKind::Virtual,
            slot,
            name: func.name.clone(),
            abi_name: func.abi_name.clone(),
            field_name: format!("_{}", func.abi_name),
            delegate_type: format!("{}_delegate", func.abi_name),
            interface_name: declaring.abi_name.clone(),
            target_name: func.abi_name.clone(),
            target_return: self.mapper.map(&func.return_type),
            target_args: args,
            entry_point: func.abi_name.clone(),
            comment: func.comment.clone(),
        }
    }

    pub fn class_static(&self, func: &FunctionDecl, cls: &ClassDecl) -> Signature {
        let mut target_name = to_abi_case(&func.name);

        let prefix = strip_abi_suffix(&cls.abi_name);
        if let Some(sub_prefix) = prefix.strip_prefix(self.abi_prefix) {
            if !sub_prefix.is_empty() {
                if let Some(pos) = target_name.find(sub_prefix) {
                    target_name.truncate(pos);
                }
            }
        }

        Signature {
            kind: FunctionKind::Static,
            slot: 0,
            name: func.name.clone(),
            abi_name: func.abi_name.clone(),
            field_name: format!("_{}", func.abi_name),
            delegate_type: format!("{}_delegate", func.abi_name),
            interface_name: cls.abi_name.clone(),
            target_name,
            target_return: self.mapper.map(&func.return_type),
            target_args: self.map_args(func),
            entry_point: func.abi_name.clone(),
            comment: func.comment.clone(),
        }
    }

    pub fn global(&self, func: &FunctionDecl) -> Signature {
        let global_prefix = format!("{}_", self.abi_prefix);
        let target_name = func
            .abi_name
            .strip_prefix(global_prefix.as_str())
            .unwrap_or(&func.abi_name)
            .to_string();

        Signature {
            kind: FunctionKind::Global,
            slot: 0,
            name: func.name.clone(),
            abi_name: func.abi_name.clone(),
            field_name: format!("_{}", func.abi_name),
            delegate_type: format!("{}_delegate", func.abi_name),
            interface_name: String::new(),
            target_name,
            target_return: self.mapper.map(&func.return_type),
            target_args: self.map_args(func),
            entry_point: func.abi_name.clone(),
            comment: func.comment.clone(),
        }
    }

    /// Root capability function as seen through `cls`.
    pub fn base_capability(&self, cls: &ClassDecl, capability: Capability, slot: usize) -> Signature {
        let abi = capability.abi_name();

        Signature {
            kind: FunctionKind::BaseCapability,
            slot,
            name: capability.name().to_string(),
            abi_name: abi.to_string(),
            field_name: format!("_base._{}", abi),
            delegate_type: format!("{}_delegate", abi),
            interface_name: cls.abi_name.clone(),
            target_name: abi.to_string(),
            target_return: capability.return_type().to_string(),
            target_args: vec![TargetArg::new(&format!("{}*", cls.abi_name), SELF_ARG)],
            entry_point: abi.to_string(),
            comment: Vec::new(),
        }
    }

    fn map_args(&self, func: &FunctionDecl) -> Vec<TargetArg> {
        if func.has_no_arguments() {
            return Vec::new();
        }

        func.arguments
            .iter()
            .map(|arg| TargetArg::new(&self.mapper.map(&arg.ty), &quote_name(&arg.name)))
            .collect()
    }
}
