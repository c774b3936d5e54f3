// Wed Oct 14 2026 - Alex

use crate::utils::naming::escape_xml;
use itertools::Itertools;

/// MSBuild item list of every generated source, sorted and deduplicated.
/// Paths are relative to the output root.
pub fn manifest_file<S: AsRef<str>>(paths: &[S]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" ?>\n");
    xml.push_str("<Project>\n");
    xml.push_str("    <ItemGroup>\n");

    for path in paths.iter().map(|p| p.as_ref()).sorted().dedup() {
        xml.push_str(&format!("        <Compile Include=\"{}\"/>\n", escape_xml(path)));
    }

    xml.push_str("    </ItemGroup>\n");
    xml.push_str("</Project>\n");
    xml
}
