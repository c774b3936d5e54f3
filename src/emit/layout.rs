// Wed Oct 14 2026 - Alex

use crate::emit::{handler, proxy, CodeWriter, EmitContext};
use crate::model::ClassDecl;
use crate::structure::VTableLayout;

/// Flat struct mirroring the native dispatch table of `cls`.
///
/// Field order is slot order: the root capability struct first, then one
/// function pointer per non-base slot.
pub fn struct_file(ctx: &EmitContext, cls: &ClassDecl, layout: &VTableLayout) -> String {
    let role = ctx.role(cls);
    let nm = ctx.native_class();
    let mut w = CodeWriter::source_file(&ctx.config.interop_namespace);

    w.usings(&[
        "System",
        "System.Diagnostics.CodeAnalysis",
        "System.Runtime.InteropServices",
        "System.Security",
    ]);

    w.line(&format!("[StructLayout(LayoutKind.Sequential, Pack = {}.ALIGN)]", nm));
    w.line("[SuppressMessage(\"Microsoft.Design\", \"CA1049:TypesThatOwnNativeResourcesShouldBeDisposable\")]");
    w.open(&format!("internal unsafe struct {}", layout.class_abi_name));

    w.line(&format!("internal {} _base;", layout.root.abi_name()));
    for slot in layout.own_slots() {
        w.line(&format!("internal IntPtr {};", slot.field_name()));
    }
    w.blank();

    let normalizer = ctx.normalizer();
    for func in &cls.static_functions {
        ctx.dll_import(&mut w, &normalizer.class_static(func, cls));
    }

    let visibility = if role.is_proxy() { "private" } else { "internal" };
    for slot in &layout.slots {
        let sig = &slot.signature;
        for px in ctx.mapper.platform_suffixes(&sig.target_return) {
            w.line(&format!("[UnmanagedFunctionPointer({}.CEF_CALLBACK)]", nm));
            w.line("#if !DEBUG");
            w.line("[SuppressUnmanagedCodeSecurity]");
            w.line("#endif");
            w.line(&format!(
                "{} delegate {}{} {}{}({});",
                visibility,
                sig.target_return,
                px,
                sig.delegate_type,
                px,
                sig.args_proto()
            ));
            w.blank();
        }
    }

    if role.is_proxy() {
        proxy::struct_members(ctx, &mut w, layout);
    } else if role.is_handler() {
        handler::struct_members(&mut w, layout);
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::emit::fixtures::*;

    #[test]
    fn test_widget_struct_fields() {
        let model = widget_model();
        let mapper = widget_mapper(&model);
        let schema = widget_schema();
        let config = GeneratorConfig::default();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let widget = model.class_by_name("Widget").unwrap();
        let layout = layout_of(&model, &mapper, "Widget");

        let text = struct_file(&ctx, widget, &layout);

        assert!(text.contains("namespace Xilium.CefGlue.Interop"));
        assert!(text.contains("internal unsafe struct widget_t"));
        assert!(text.contains("internal cef_base_ref_counted_t _base;"));
        assert_eq!(text.matches("internal IntPtr ").count(), 1);
        assert!(text.contains("internal IntPtr _resize;"));
        assert!(text.contains("EntryPoint = \"widget_create\""));
        assert!(text.contains("public static extern widget_t* create();"));
        assert!(text.contains("private delegate void resize_delegate(widget_t* self, int width, int height);"));
        assert!(text.contains("private delegate int release_delegate(widget_t* self);"));
        assert!(!text.contains("Alloc()"));
    }

    #[test]
    fn test_handler_struct_has_allocation() {
        let model = widget_model();
        let mapper = widget_mapper(&model);
        let schema = widget_schema();
        let config = GeneratorConfig::default();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let observer = model.class_by_name("WidgetObserver").unwrap();
        let layout = layout_of(&model, &mapper, "WidgetObserver");

        let text = struct_file(&ctx, observer, &layout);

        assert!(text.contains("internal delegate int on_resized_delegate(widget_observer_t* self, widget_t* widget, int width);"));
        assert!(text.contains("internal static widget_observer_t* Alloc()"));
        assert!(text.contains("ptr->_base._size = (UIntPtr)_sizeof;"));
        assert!(!text.contains("GetDelegateForFunctionPointer"));
    }

    #[test]
    fn test_platform_suffix_variants() {
        let model = widget_model();
        let mut tables = crate::types::TypeTables::builtin();
        tables.platform_retval.insert("int".to_string(), vec!["_win".to_string(), "_posix".to_string()]);
        let mut mapper = crate::types::TypeMapper::new(tables);
        mapper.register_classes(model.classes());
        let schema = widget_schema();
        let config = GeneratorConfig::default();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let layout = layout_of(&model, &mapper, "Widget");

        let text = struct_file(&ctx, model.class_by_name("Widget").unwrap(), &layout);

        assert!(text.contains("private delegate int_win release_delegate_win(widget_t* self);"));
        assert!(text.contains("private delegate int_posix release_delegate_posix(widget_t* self);"));
        assert!(text.contains("private delegate void add_ref_delegate(widget_t* self);"));
    }
}
