// Wed Oct 14 2026 - Alex

use crate::emit::{handler, proxy, CodeWriter, EmitContext};
use crate::model::ClassDecl;
use crate::structure::VTableLayout;

/// Wrapper class file: the proxy part or the handler part, as the class role
/// asks. Roles are validated as exclusive before emission.
pub fn wrapper_file(ctx: &EmitContext, cls: &ClassDecl, layout: &VTableLayout) -> String {
    let role = ctx.role(cls);
    let mut w = CodeWriter::source_file(&ctx.config.namespace);

    let interop = ctx.config.interop_namespace.as_str();
    w.usings(&[
        "System",
        "System.Collections.Generic",
        "System.Diagnostics",
        "System.Runtime.InteropServices",
        "System.Threading",
        interop,
    ]);

    for line in ctx.schema.overview(&cls.name) {
        w.line(&format!("// {}", line));
    }
    ctx.xml_doc(&mut w, &cls.doc_comment);

    if role.is_proxy() {
        w.open(&proxy::class_header(ctx, cls, layout));
        proxy::wrapper_body(ctx, &mut w, cls, layout);
        w.close();
    } else if role.is_handler() {
        w.open(&handler::class_header(ctx, cls));
        handler::wrapper_body(ctx, &mut w, cls, layout);
        w.close();
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::emit::fixtures::*;

    #[test]
    fn test_widget_wrapper() {
        let model = widget_model();
        let mapper = widget_mapper(&model);
        let schema = widget_schema();
        let config = GeneratorConfig::default();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let widget = model.class_by_name("Widget").unwrap();
        let layout = layout_of(&model, &mapper, "Widget");

        let text = wrapper_file(&ctx, widget, &layout);

        assert!(text.starts_with("//\n// DO NOT MODIFY! THIS IS AUTOGENERATED FILE!\n//\nnamespace Xilium.CefGlue\n{"));
        assert!(text.contains("    using Xilium.CefGlue.Interop;"));
        assert!(text.contains("// Role: PROXY"));
        assert!(text.contains("/// A &lt;resizable&gt; widget."));
        assert!(text.contains("public static Widget Create()"));
        assert!(text.contains("public void Resize(int width, int height)"));
        assert!(!text.contains("abstract unsafe partial class"));
    }

    #[test]
    fn test_handler_wrapper_uses_display_name() {
        let model = widget_model();
        let mapper = widget_mapper(&model);
        let schema = widget_schema().with_class(
            "WidgetObserver",
            crate::schema::ClassDef::handler().with_name("WidgetListener"),
        );
        let config = GeneratorConfig::default();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let cls = model.class_by_name("WidgetObserver").unwrap();
        let layout = layout_of(&model, &mapper, "WidgetObserver");

        let text = wrapper_file(&ctx, cls, &layout);

        assert!(text.contains("public abstract unsafe partial class WidgetListener"));
        assert!(text.contains("protected WidgetListener()"));
        assert!(text.contains("// Role: HANDLER"));
    }
}
