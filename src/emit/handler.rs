// Wed Oct 14 2026 - Alex

use crate::emit::{CodeWriter, EmitContext};
use crate::model::ClassDecl;
use crate::structure::{RootKind, Signature, VTableLayout};

/// Allocation helpers inside the flat struct. The size is computed once in
/// the static constructor.
pub fn struct_members(w: &mut CodeWriter, layout: &VTableLayout) {
    let iname = layout.class_abi_name.as_str();

    w.line("private static int _sizeof;");
    w.blank();

    w.block(&format!("static {}()", iname), |w| {
        w.line(&format!("_sizeof = Marshal.SizeOf(typeof({}));", iname));
    });
    w.blank();

    w.block(&format!("internal static {}* Alloc()", iname), |w| {
        w.line(&format!("var ptr = ({}*)Marshal.AllocHGlobal(_sizeof);", iname));
        w.line(&format!("*ptr = new {}();", iname));
        w.line("ptr->_base._size = (UIntPtr)_sizeof;");
        w.line("return ptr;");
    });
    w.blank();

    w.block(&format!("internal static void Free({}* ptr)", iname), |w| {
        w.line("Marshal.FreeHGlobal((IntPtr)ptr);");
    });
    w.blank();
}

pub fn class_header(ctx: &EmitContext, cls: &ClassDecl) -> String {
    format!("public abstract unsafe partial class {}", ctx.wrapper_name(cls))
}

/// Body of the callback-receiving wrapper.
///
/// Every live object is rooted in the per-class `_roots` map while native
/// code holds a reference. `_roots` is always locked before `SyncRoot`.
pub fn wrapper_body(ctx: &EmitContext, w: &mut CodeWriter, cls: &ClassDecl, layout: &VTableLayout) {
    let name = ctx.wrapper_name(cls);
    let iname = layout.class_abi_name.as_str();
    let autodispose = ctx.schema.is_autodispose(&cls.name);

    w.line(&format!(
        "private static Dictionary<IntPtr, {}> _roots = new Dictionary<IntPtr, {}>();",
        name, name
    ));
    w.blank();

    if layout.is_ref_counted() {
        w.line("private int _refct;");
    }
    w.line(&format!("private {}* _self;", iname));
    w.line("private int _disposed;");
    w.blank();

    w.line("protected object SyncRoot { get { return this; } }");
    w.blank();

    if ctx.schema.is_reversible(&cls.name) {
        reverse_lookup(w, &name, iname, layout.is_ref_counted());
    }

    for slot in &layout.slots {
        w.line(&format!("private {}.{} {};", iname, slot.delegate_type(), slot.signature.delegate_slot()));
    }
    w.blank();

    w.block(&format!("protected {}()", name), |w| {
        w.line(&format!("_self = {}.Alloc();", iname));
        w.blank();
        for slot in &layout.slots {
            let sig = &slot.signature;
            w.line(&format!(
                "{} = new {}.{}({});",
                sig.delegate_slot(),
                iname,
                sig.delegate_type,
                sig.target_name
            ));
            w.line(&format!(
                "_self->{} = Marshal.GetFunctionPointerForDelegate({});",
                sig.field_name,
                sig.delegate_slot()
            ));
        }
        if layout.root == RootKind::Scoped {
            w.blank();
            w.line("lock (_roots) { _roots.Add((IntPtr)_self, this); }");
        }
    });
    w.blank();

    w.block(&format!("~{}()", name), |w| {
        w.line("Dispose(false);");
    });
    w.blank();

    w.block("private void Dispose()", |w| {
        w.line("Dispose(true);");
        w.line("GC.SuppressFinalize(this);");
    });
    w.blank();

    w.block("protected virtual void Dispose(bool disposing)", |w| {
        w.block("if (Interlocked.CompareExchange(ref _disposed, 1, 0) == 0)", |w| {
            w.line(&format!("{}.Free(_self);", iname));
            w.line("_self = null;");
        });
    });
    w.blank();

    match layout.root {
        RootKind::RefCounted => ref_counted_capabilities(w, iname, autodispose),
        RootKind::Scoped => scoped_capabilities(w, iname),
    }

    w.block(&format!("internal {}* ToNative()", iname), |w| {
        if layout.is_ref_counted() {
            w.line("add_ref(_self);");
        }
        w.line("return _self;");
    });
    w.blank();

    w.line("[Conditional(\"DEBUG\")]");
    w.block(&format!("private void CheckSelf({}* self)", iname), |w| {
        w.line("if (_self != self) throw ExceptionBuilder.InvalidSelfReference();");
    });

    for slot in layout.own_slots() {
        w.blank();
        thunk(ctx, w, &slot.signature);
    }
}

fn reverse_lookup(w: &mut CodeWriter, name: &str, iname: &str, ref_counted: bool) {
    w.block(&format!("internal static {} FromNativeOrNull({}* ptr)", name, iname), |w| {
        w.line(&format!("{} value;", name));
        w.line("bool found;");
        w.block("lock (_roots)", |w| {
            w.line("found = _roots.TryGetValue((IntPtr)ptr, out value);");
            if ref_counted {
                w.line("// the caller handed us a reference; give it back");
                w.line("if (found) value.release(ptr);");
            }
        });
        w.line("return found ? value : null;");
    });
    w.blank();

    w.block(&format!("internal static {} FromNative({}* ptr)", name, iname), |w| {
        w.line("var value = FromNativeOrNull(ptr);");
        w.line("if (value == null) throw ExceptionBuilder.ObjectNotFound();");
        w.line("return value;");
    });
    w.blank();
}

fn ref_counted_capabilities(w: &mut CodeWriter, iname: &str, autodispose: bool) {
    w.block(&format!("private void add_ref({}* self)", iname), |w| {
        w.block("lock (_roots)", |w| {
            w.block("lock (SyncRoot)", |w| {
                w.line("var result = ++_refct;");
                w.block("if (result == 1)", |w| {
                    w.line("_roots.Add((IntPtr)_self, this);");
                });
            });
        });
    });
    w.blank();

    w.block(&format!("private int release({}* self)", iname), |w| {
        w.block("lock (_roots)", |w| {
            w.block("lock (SyncRoot)", |w| {
                w.line("var result = --_refct;");
                w.block("if (result == 0)", |w| {
                    w.line("_roots.Remove((IntPtr)_self);");
                    if autodispose {
                        w.line("Dispose();");
                    }
                    w.line("return 1;");
                });
                w.line("return 0;");
            });
        });
    });
    w.blank();

    w.block(&format!("private int has_one_ref({}* self)", iname), |w| {
        w.line("lock (SyncRoot) { return _refct == 1 ? 1 : 0; }");
    });
    w.blank();

    w.block(&format!("private int has_at_least_one_ref({}* self)", iname), |w| {
        w.line("lock (SyncRoot) { return _refct != 0 ? 1 : 0; }");
    });
    w.blank();
}

fn scoped_capabilities(w: &mut CodeWriter, iname: &str) {
    w.block(&format!("private void del({}* self)", iname), |w| {
        w.line("CheckSelf(self);");
        w.line("lock (_roots) { _roots.Remove((IntPtr)_self); }");
        w.line("Dispose();");
    });
    w.blank();
}

/// Native entry for one slot: checks `self`, then forwards into the
/// overridable method.
fn thunk(ctx: &EmitContext, w: &mut CodeWriter, sig: &Signature) {
    w.block(&format!("private {} {}({})", sig.target_return, sig.target_name, sig.args_proto()), |w| {
        w.line("CheckSelf(self);");
        let call = format!("{}({})", sig.name, sig.instance_arg_names().join(", "));
        if sig.returns_void() {
            w.line(&format!("{};", call));
        } else {
            w.line(&format!("return {};", call));
        }
    });
    w.blank();

    ctx.xml_doc(w, &sig.comment);
    w.block(
        &format!("protected virtual {} {}({})", sig.target_return, sig.name, sig.instance_args_proto()),
        |w| {
            if !sig.returns_void() {
                w.line(&format!("return default({});", sig.target_return));
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::emit::fixtures::*;
    use crate::model::{FunctionDecl, ObjectModel};
    use crate::schema::{ClassDef, ClassificationSchema};
    use crate::types::TypeMapper;

    fn render(model: &ObjectModel, schema: &ClassificationSchema, name: &str) -> String {
        let mapper = widget_mapper(model);
        let config = GeneratorConfig::default();
        let ctx = EmitContext::new(&config, schema, &mapper);
        let cls = model.class_by_name(name).unwrap();
        let layout = layout_of(model, &mapper, name);

        let mut w = CodeWriter::new();
        w.open(&class_header(&ctx, cls));
        wrapper_body(&ctx, &mut w, cls, &layout);
        w.close();
        w.finish()
    }

    #[test]
    fn test_lock_order_roots_first() {
        let text = render(&widget_model(), &widget_schema(), "WidgetObserver");

        let registry = text.find("private void add_ref").and_then(|start| {
            let body = &text[start..];
            Some((body.find("lock (_roots)")?, body.find("lock (SyncRoot)")?))
        });
        let (outer, inner) = registry.unwrap();
        assert!(outer < inner);
        assert!(text.contains("public abstract unsafe partial class WidgetObserver"));
    }

    #[test]
    fn test_slots_populated_with_thunks() {
        let text = render(&widget_model(), &widget_schema(), "WidgetObserver");

        assert!(text.contains("_ds0 = new widget_observer_t.add_ref_delegate(add_ref);"));
        assert!(text.contains("_self->_base._release = Marshal.GetFunctionPointerForDelegate(_ds1);"));
        assert!(text.contains("_ds4 = new widget_observer_t.on_resized_delegate(on_resized);"));
        assert!(text.contains("_self->_on_resized = Marshal.GetFunctionPointerForDelegate(_ds4);"));
        assert!(text.contains("private int on_resized(widget_observer_t* self, widget_t* widget, int width)"));
        assert!(text.contains("return OnResized(widget, width);"));
        assert!(text.contains("protected virtual int OnResized(widget_t* widget, int width)"));
        assert!(text.contains("return default(int);"));
    }

    #[test]
    fn test_reversible_and_autodispose() {
        let text = render(&widget_model(), &widget_schema(), "WidgetObserver");

        assert!(text.contains("internal static WidgetObserver FromNativeOrNull(widget_observer_t* ptr)"));
        assert!(text.contains("found = _roots.TryGetValue((IntPtr)ptr, out value);"));
        assert!(text.contains("if (found) value.release(ptr);"));
        assert!(text.contains("throw ExceptionBuilder.ObjectNotFound();"));
        assert!(text.contains("_roots.Remove((IntPtr)_self);\n                    Dispose();"));
        assert!(text.contains("if (_self != self) throw ExceptionBuilder.InvalidSelfReference();"));
    }

    #[test]
    fn test_plain_handler_has_no_reverse_lookup() {
        let schema = ClassificationSchema::new().with_class("WidgetObserver", ClassDef::handler());
        let text = render(&widget_model(), &schema, "WidgetObserver");

        assert!(!text.contains("FromNative"));
        assert!(!text.contains("Dispose();\n                    return 1;"));
        assert!(text.contains("_roots.Add((IntPtr)_self, this);"));
    }

    #[test]
    fn test_scoped_handler_uses_del() {
        let model = ObjectModel::new().with_class(
            ClassDecl::new("CefViewDelegate", "cef_view_delegate_t")
                .with_parent("CefBaseScoped", "cef_base_scoped_t")
                .with_virtual(FunctionDecl::new("OnLayout", "on_layout", "void")),
        );
        let schema = ClassificationSchema::new().with_class("CefViewDelegate", ClassDef::handler());
        let mapper = TypeMapper::builtin();
        let config = GeneratorConfig::default();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let cls = &model.classes()[0];
        let layout = layout_of(&model, &mapper, "CefViewDelegate");

        let mut w = CodeWriter::new();
        wrapper_body(&ctx, &mut w, cls, &layout);
        let text = w.finish();

        assert!(text.contains("private void del(cef_view_delegate_t* self)"));
        assert!(text.contains("_self->_base._del = Marshal.GetFunctionPointerForDelegate(_ds0);"));
        assert!(!text.contains("_refct"));
        assert!(text.contains("lock (_roots) { _roots.Add((IntPtr)_self, this); }"));
        assert!(text.contains("private static Dictionary<IntPtr, CefViewDelegate> _roots"));
        assert!(text.contains("protected virtual void OnLayout()"));
    }

    #[test]
    fn test_roots_declared_in_every_handler() {
        let text = render(&widget_model(), &widget_schema(), "WidgetObserver");

        assert!(text.contains(
            "private static Dictionary<IntPtr, WidgetObserver> _roots = new Dictionary<IntPtr, WidgetObserver>();"
        ));
        assert!(!text.contains("HandleRegistry"));

        let plain = ClassificationSchema::new().with_class("WidgetObserver", ClassDef::handler());
        let text = render(&widget_model(), &plain, "WidgetObserver");
        assert!(text.contains("private static Dictionary<IntPtr, WidgetObserver> _roots"));
        assert!(!text.contains("HandleRegistry"));
    }
}
