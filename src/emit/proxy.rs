// Wed Oct 14 2026 - Alex

use crate::emit::{CodeWriter, EmitContext};
use crate::model::ClassDecl;
use crate::structure::{RootKind, Signature, VTableLayout};

/// Per-slot static forwarders inside the flat struct. Each caches the last
/// resolved pointer and its decoded delegate.
pub fn struct_members(ctx: &EmitContext, w: &mut CodeWriter, layout: &VTableLayout) {
    for slot in &layout.slots {
        let sig = &slot.signature;
        let id = sig.slot_id();

        for px in ctx.mapper.platform_suffixes(&sig.target_return) {
            let delegate = format!("{}{}", sig.delegate_type, px);
            let cached_ptr = format!("_p{}{}", id, px);
            let cached_delegate = format!("_d{}{}", id, px);

            w.line(&format!("// {}", sig.name));
            w.line(&format!("private static IntPtr {};", cached_ptr));
            w.line(&format!("private static {} {};", delegate, cached_delegate));
            w.blank();

            w.open(&format!(
                "public static {}{} {}{}({})",
                sig.target_return,
                px,
                sig.target_name,
                px,
                sig.args_proto()
            ));
            w.line(&format!("{} d;", delegate));
            w.line(&format!("var p = self->{};", sig.field_name));
            w.line(&format!("if (p == {}) {{ d = {}; }}", cached_ptr, cached_delegate));
            w.open("else");
            w.line(&format!(
                "d = ({})Marshal.GetDelegateForFunctionPointer(p, typeof({}));",
                delegate, delegate
            ));
            w.line(&format!(
                "if ({} == IntPtr.Zero) {{ {} = d; {} = p; }}",
                cached_ptr, cached_delegate, cached_ptr
            ));
            w.close();
            if sig.returns_void() {
                w.line(&format!("d({});", sig.arg_names()));
            } else {
                w.line(&format!("return d({});", sig.arg_names()));
            }
            w.close();
            w.blank();
        }
    }
}

/// Header line of the proxy wrapper class.
pub fn class_header(ctx: &EmitContext, cls: &ClassDecl, layout: &VTableLayout) -> String {
    let name = ctx.wrapper_name(cls);
    let sealed = if ctx.schema.is_abstract(&cls.name) { "" } else { "sealed " };

    let base = if !layout.is_root_child() {
        format!(" : {}", ctx.schema.display_name(&cls.parent_name))
    } else if layout.is_ref_counted() {
        " : IDisposable".to_string()
    } else {
        String::new()
    };

    format!("public {}unsafe partial class {}{}", sealed, name, base)
}

/// Body of the call-forwarding wrapper.
pub fn wrapper_body(ctx: &EmitContext, w: &mut CodeWriter, cls: &ClassDecl, layout: &VTableLayout) {
    let name = ctx.wrapper_name(cls);
    let iname = layout.class_abi_name.as_str();
    let is_impl = layout.is_root_child();

    let self_accessor = if is_impl {
        "_self".to_string()
    } else {
        format!("({}*)_self", iname)
    };
    let new_keyword = if is_impl { "" } else { "new " };
    let access = if ctx.schema.is_abstract(&cls.name) { "private protected" } else { "private" };

    w.block(&format!("internal static {} FromNative({}* ptr)", name, iname), |w| {
        w.line(&format!("return new {}(ptr);", name));
    });
    w.blank();

    w.block(&format!("internal static {} FromNativeOrNull({}* ptr)", name, iname), |w| {
        w.line("if (ptr == null) return null;");
        w.line(&format!("return new {}(ptr);", name));
    });
    w.blank();

    if is_impl {
        w.line(&format!("{} {}* _self;", access, iname));
        if layout.is_ref_counted() {
            w.line(&format!("{} int _disposed = 0;", access));
        }
        w.blank();

        w.block(&format!("{} {}({}* ptr)", access, name, iname), |w| {
            w.line("if (ptr == null) throw new ArgumentNullException(\"ptr\");");
            w.line("_self = ptr;");
            if layout.is_ref_counted() {
                w.line("CefObjectTracker.Track(this);");
            }
        });
    } else {
        w.line(&format!("{} {}({}* ptr)", access, name, iname));
        w.line(&format!("    : base(({}*)ptr) {{ }}", cls.parent_abi_name));
    }
    w.blank();

    if is_impl {
        match layout.root {
            RootKind::RefCounted => ref_counted_members(w, &name, iname),
            RootKind::Scoped => {}
        }
    }

    w.block(&format!("internal {}{}* ToNative()", new_keyword, iname), |w| {
        if layout.is_ref_counted() {
            w.line("AddRef();");
        }
        w.line(&format!("return {};", self_accessor));
    });

    let normalizer = ctx.normalizer();
    for func in &cls.static_functions {
        w.blank();
        ctx.xml_doc(w, &func.comment);
        static_forwarder(w, &name, iname, &normalizer.class_static(func, cls));
    }

    for slot in layout.declared_slots() {
        w.blank();
        ctx.xml_doc(w, &slot.signature.comment);
        instance_forwarder(w, &name, iname, &self_accessor, &slot.signature);
    }
}

fn ref_counted_members(w: &mut CodeWriter, name: &str, iname: &str) {
    w.block(&format!("~{}()", name), |w| {
        w.block("if (Interlocked.CompareExchange(ref _disposed, 1, 0) == 0)", |w| {
            w.line("Release();");
            w.line("_self = null;");
        });
    });
    w.blank();

    w.block("public void Dispose()", |w| {
        w.block("if (Interlocked.CompareExchange(ref _disposed, 1, 0) == 0)", |w| {
            w.line("Release();");
            w.line("_self = null;");
        });
        w.line("CefObjectTracker.Untrack(this);");
        w.line("GC.SuppressFinalize(this);");
    });
    w.blank();

    w.block("internal void AddRef()", |w| {
        w.line(&format!("{}.add_ref(_self);", iname));
    });
    w.blank();

    w.block("internal bool Release()", |w| {
        w.line(&format!("return {}.release(_self) != 0;", iname));
    });
    w.blank();

    w.block("internal bool HasOneRef", |w| {
        w.line(&format!("get {{ return {}.has_one_ref(_self) != 0; }}", iname));
    });
    w.blank();

    w.block("internal bool HasAtLeastOneRef", |w| {
        w.line(&format!("get {{ return {}.has_at_least_one_ref(_self) != 0; }}", iname));
    });
    w.blank();
}

/// Own-class pointers come back as wrapper objects.
fn public_return(sig: &Signature, name: &str, iname: &str) -> (String, bool) {
    if sig.target_return == format!("{}*", iname) {
        (name.to_string(), true)
    } else {
        (sig.target_return.clone(), false)
    }
}

fn emit_call(w: &mut CodeWriter, sig: &Signature, name: &str, iname: &str, call: String) {
    let (_, wraps) = public_return(sig, name, iname);
    if sig.returns_void() {
        w.line(&format!("{};", call));
    } else if wraps {
        w.line(&format!("return {}.FromNativeOrNull({});", name, call));
    } else {
        w.line(&format!("return {};", call));
    }
}

fn static_forwarder(w: &mut CodeWriter, name: &str, iname: &str, sig: &Signature) {
    let (ret, _) = public_return(sig, name, iname);
    w.block(&format!("public static {} {}({})", ret, sig.name, sig.args_proto()), |w| {
        let call = format!("{}.{}({})", iname, sig.target_name, sig.arg_names());
        emit_call(w, sig, name, iname, call);
    });
}

fn instance_forwarder(w: &mut CodeWriter, name: &str, iname: &str, self_accessor: &str, sig: &Signature) {
    let (ret, _) = public_return(sig, name, iname);
    w.block(&format!("public {} {}({})", ret, sig.name, sig.instance_args_proto()), |w| {
        let mut args = vec![self_accessor];
        args.extend(sig.instance_arg_names());
        let call = format!("{}.{}({})", iname, sig.target_name, args.join(", "));
        emit_call(w, sig, name, iname, call);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::emit::fixtures::*;

    fn render(name: &str) -> (String, String) {
        let model = widget_model();
        let mapper = widget_mapper(&model);
        let schema = widget_schema();
        let config = GeneratorConfig::default();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let cls = model.class_by_name(name).unwrap();
        let layout = layout_of(&model, &mapper, name);

        let mut members = CodeWriter::new();
        struct_members(&ctx, &mut members, &layout);

        let mut body = CodeWriter::new();
        body.open(&class_header(&ctx, cls, &layout));
        wrapper_body(&ctx, &mut body, cls, &layout);
        body.close();

        (members.finish(), body.finish())
    }

    #[test]
    fn test_forwarder_uses_slot_cache() {
        let (members, _) = render("Widget");

        assert!(members.contains("private static IntPtr _p4;"));
        assert!(members.contains("private static resize_delegate _d4;"));
        assert!(members.contains("public static void resize(widget_t* self, int width, int height)"));
        assert!(members.contains("var p = self->_resize;"));
        assert!(members.contains("d(self, width, height);"));
        assert!(members.contains("var p = self->_base._release;"));
        assert!(members.contains("return d(self);"));
    }

    #[test]
    fn test_derived_wrapper_forwards_through_slot() {
        let (_, body) = render("Widget");

        assert!(body.contains("public sealed unsafe partial class Widget : Base"));
        assert!(body.contains("private Widget(widget_t* ptr)"));
        assert!(body.contains(": base((base_t*)ptr) { }"));
        assert!(body.contains("internal new widget_t* ToNative()"));
        assert!(body.contains("public static Widget Create()"));
        assert!(body.contains("return Widget.FromNativeOrNull(widget_t.create());"));
        assert!(body.contains("public void Resize(int width, int height)"));
        assert!(body.contains("widget_t.resize((widget_t*)_self, width, height);"));
        assert!(!body.contains("~Widget()"));
    }

    #[test]
    fn test_root_child_wrapper_guards_release() {
        let (_, body) = render("Base");

        assert!(body.contains("public unsafe partial class Base : IDisposable"));
        assert!(body.contains("private protected base_t* _self;"));
        assert!(body.contains("if (ptr == null) throw new ArgumentNullException(\"ptr\");"));
        assert_eq!(body.matches("Interlocked.CompareExchange(ref _disposed, 1, 0) == 0").count(), 2);
        assert!(body.contains("~Base()"));
        assert!(body.contains("return base_t.release(_self) != 0;"));
        assert!(body.contains("internal base_t* ToNative()"));
    }

    #[test]
    fn test_root_child_wrapper_is_tracked() {
        let (_, body) = render("Base");

        assert!(body.contains("_self = ptr;\n        CefObjectTracker.Track(this);"));
        assert_eq!(body.matches("CefObjectTracker.Untrack(this);").count(), 1);

        let dispose = body.find("public void Dispose()").unwrap();
        let untrack = body.find("CefObjectTracker.Untrack(this);").unwrap();
        let suppress = body.find("GC.SuppressFinalize(this);").unwrap();
        assert!(dispose < untrack && untrack < suppress);

        let (_, derived) = render("Widget");
        assert!(!derived.contains("CefObjectTracker"));
    }
}
