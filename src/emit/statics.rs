// Wed Oct 14 2026 - Alex

use crate::emit::{CodeWriter, EmitContext};
use crate::model::FunctionDecl;

/// The free-function table: one `DllImport` per global function, bound to
/// its ABI symbol.
pub fn static_table_file(ctx: &EmitContext, functions: &[FunctionDecl]) -> String {
    let normalizer = ctx.normalizer();
    let mut w = CodeWriter::source_file(&ctx.config.interop_namespace);

    w.usings(&["System", "System.Runtime.InteropServices", "System.Diagnostics.CodeAnalysis"]);

    w.open(&format!("internal static unsafe partial class {}", ctx.native_class()));
    for func in functions {
        ctx.dll_import(&mut w, &normalizer.global(func));
    }
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::schema::ClassificationSchema;
    use crate::types::TypeMapper;

    #[test]
    fn test_one_entry_per_function() {
        let config = GeneratorConfig::default();
        let schema = ClassificationSchema::new();
        let mapper = TypeMapper::builtin();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let functions = vec![
            FunctionDecl::new("CefShutdown", "cef_shutdown", "void").with_arg("void", ""),
            FunctionDecl::new("CefExecuteProcess", "cef_execute_process", "int")
                .with_arg("const struct _cef_main_args_t*", "args")
                .with_arg("void*", "windows_sandbox_info"),
        ];

        let text = static_table_file(&ctx, &functions);

        assert!(text.contains("internal static unsafe partial class libcef"));
        assert_eq!(text.matches("[DllImport(libcef.DllName").count(), 2);
        assert!(text.contains("EntryPoint = \"cef_shutdown\", CallingConvention = libcef.CEF_CALL)]"));
        assert!(text.contains("public static extern void shutdown();"));
        assert!(text.contains("public static extern int execute_process(cef_main_args_t* args, void* windows_sandbox_info);"));
    }
}
