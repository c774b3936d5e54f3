// Wed Oct 14 2026 - Alex

use crate::emit::{CodeWriter, EmitContext};
use crate::error::Result;
use crate::version::{Platform, VersionConstants};

pub fn version_file(ctx: &EmitContext, constants: &VersionConstants) -> Result<String> {
    let mut w = CodeWriter::source_file(&ctx.config.interop_namespace);
    w.usings(&["System", "System.Runtime.InteropServices", "System.Diagnostics.CodeAnalysis"]);

    w.open(&format!("internal static unsafe partial class {}", ctx.native_class()));

    w.line(&format!("public const string CEF_VERSION = {};", constants.cef_version));
    w.line(&format!("public const int CEF_VERSION_MAJOR = {};", constants.cef_version_major));
    w.line(&format!("public const int CEF_COMMIT_NUMBER = {};", constants.cef_commit_number));
    w.line(&format!("public const string CEF_COMMIT_HASH = {};", constants.cef_commit_hash));
    w.blank();

    w.line(&format!("public const int CHROME_VERSION_MAJOR = {};", constants.chrome_version_major));
    w.line(&format!("public const int CHROME_VERSION_MINOR = {};", constants.chrome_version_minor));
    w.line(&format!("public const int CHROME_VERSION_BUILD = {};", constants.chrome_version_build));
    w.line(&format!("public const int CHROME_VERSION_PATCH = {};", constants.chrome_version_patch));
    w.blank();

    w.line(&format!("public const int CEF_API_VERSION = {};", constants.api.version));
    for platform in Platform::ALL {
        w.line(&format!(
            "public const string CEF_API_HASH_PLATFORM_{} = \"{}\";",
            platform.constant_suffix(),
            constants.api.require_hash(platform)?
        ));
    }

    Ok(w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::schema::ClassificationSchema;
    use crate::types::TypeMapper;
    use crate::version::samples::*;

    #[test]
    fn test_version_file() {
        let config = GeneratorConfig::default();
        let schema = ClassificationSchema::new();
        let mapper = TypeMapper::builtin();
        let ctx = EmitContext::new(&config, &schema, &mapper);
        let constants = VersionConstants::extract(VERSION_H, API_VERSIONS_H).unwrap();

        let text = version_file(&ctx, &constants).unwrap();

        assert!(text.contains("namespace Xilium.CefGlue.Interop"));
        assert!(text.contains("public const string CEF_VERSION = \"134.3.2+g615db2f+chromium-134.0.6998.118\";"));
        assert!(text.contains("public const int CHROME_VERSION_BUILD = 6998;"));
        assert!(text.contains("public const int CEF_API_VERSION = 13400;"));
        assert!(text.contains("public const string CEF_API_HASH_PLATFORM_MACOS = \"1d8a5b9b7c3e0f1e2a6c4d9b8e7f6a5b4c3d2e1f\";"));
    }
}
