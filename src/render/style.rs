//! Per-verb colours and the stylesheets embedded by each HTML variant.

/// Visual tag for an HTTP verb: CSS class suffix and badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodTag {
    pub class: &'static str,
    pub color: &'static str,
}

const GET: MethodTag = MethodTag {
    class: "get",
    color: "#61affe",
};
const POST: MethodTag = MethodTag {
    class: "post",
    color: "#49cc90",
};
const PUT: MethodTag = MethodTag {
    class: "put",
    color: "#fca130",
};
const DELETE: MethodTag = MethodTag {
    class: "delete",
    color: "#f93e3e",
};

/// Look up the tag for `method`, case-insensitively.
///
/// Unrecognised verbs get the GET tag so every badge is styled.
pub fn method_tag(method: &str) -> MethodTag {
    match method.trim().to_ascii_lowercase().as_str() {
        "post" => POST,
        "put" => PUT,
        "delete" => DELETE,
        _ => GET,
    }
}

/// Stylesheet for the inline preview.
pub const PREVIEW_CSS: &str = "\
.api-docs { font-family: system-ui, sans-serif; line-height: 1.5; color: #333; }
.api-docs .endpoint { margin-bottom: 2em; padding: 1em; border: 1px solid #e2e8f0; border-radius: 6px; }
.api-docs .endpoint h3 { display: flex; align-items: center; gap: 0.6em; }
.api-docs .method { display: inline-block; padding: 0.2em 0.6em; border-radius: 4px; color: white; font-weight: bold; }
.api-docs .method.get { background: #61affe; }
.api-docs .method.post { background: #49cc90; }
.api-docs .method.put { background: #fca130; }
.api-docs .method.delete { background: #f93e3e; }
.api-docs .param-table { width: 100%; border-collapse: collapse; margin: 0.8em 0; font-size: 0.9em; }
.api-docs .param-table th, .api-docs .param-table td { padding: 0.4em; border: 1px solid #e2e8f0; text-align: left; vertical-align: top; }
.api-docs .param-table th { background: #f7fafc; }
.api-docs pre { background: #f8f9fa; padding: 0.8em; border-radius: 4px; overflow-x: auto; margin: 0; }
.api-docs code { font-family: monospace; }
";

/// Stylesheet for the standalone HTML export.
pub const STANDALONE_CSS: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 1200px; margin: 0 auto; padding: 20px; }
.container > h1 { text-align: center; color: #2c3e50; margin-bottom: 30px; }
.endpoint { margin-bottom: 30px; padding: 15px; border: 1px solid #ddd; border-radius: 4px; }
.endpoint h3 { display: flex; align-items: center; gap: 10px; margin-bottom: 15px; }
.method { display: inline-block; padding: 5px 10px; border-radius: 4px; font-weight: bold; color: white; min-width: 80px; text-align: center; }
.method.get { background: #61affe; }
.method.post { background: #49cc90; }
.method.put { background: #fca130; }
.method.delete { background: #f93e3e; }
.param-table { width: 100%; border-collapse: collapse; margin: 15px 0; font-size: 14px; }
.param-table th, .param-table td { padding: 8px; border: 1px solid #ddd; text-align: left; vertical-align: top; }
.param-table th { background: #f5f5f5; }
code { background: #f8f9fa; padding: 2px 4px; border-radius: 3px; font-family: monospace; }
pre { background: #f8f9fa; padding: 15px; border-radius: 4px; overflow-x: auto; }
h4 { margin: 20px 0 10px; }
";

/// Stylesheet for the Word variant. Word honours a limited CSS subset, so
/// units are points and layout is table-based.
pub const WORD_CSS: &str = "\
body { font-family: 'Calibri', sans-serif; font-size: 11pt; line-height: 1.3; }
.endpoint { margin-bottom: 20pt; page-break-inside: avoid; }
table { border-collapse: collapse; width: 100%; margin: 10pt 0; table-layout: fixed; }
th, td { border: 1pt solid #000; padding: 5pt; text-align: left; vertical-align: top; word-wrap: break-word; }
th { background-color: #f0f0f0; font-weight: bold; }
pre { white-space: pre-wrap; word-wrap: break-word; font-size: 9pt; font-family: 'Courier New', monospace; background-color: #f5f5f5; padding: 5pt; margin: 5pt 0; }
code { font-family: 'Courier New', monospace; background-color: #f5f5f5; padding: 1pt 3pt; font-size: 10pt; }
.method { padding: 2pt 5pt; color: white; font-weight: bold; margin-right: 5pt; }
";

/// Office namespace declarations for the Word variant's `<html>` element.
pub const WORD_NAMESPACES: &str = "xmlns:o='urn:schemas-microsoft-com:office:office' \
xmlns:w='urn:schemas-microsoft-com:office:word' \
xmlns='http://www.w3.org/TR/REC-html40'";

/// Conditional comment Word reads to open the document in print layout.
pub const WORD_DOCUMENT_SETTINGS: &str = "\
<!--[if gte mso 9]>
<xml>
<w:WordDocument>
<w:View>Print</w:View>
<w:Zoom>90</w:Zoom>
<w:DoNotOptimizeForBrowser/>
</w:WordDocument>
</xml>
<![endif]-->
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_verbs_case_insensitive() {
        assert_eq!(method_tag("GET").class, "get");
        assert_eq!(method_tag("post").color, "#49cc90");
        assert_eq!(method_tag("Put").class, "put");
        assert_eq!(method_tag("delete").color, "#f93e3e");
    }

    #[test]
    fn unknown_verb_falls_back_to_get() {
        assert_eq!(method_tag("PATCH"), method_tag("GET"));
        assert_eq!(method_tag(""), method_tag("GET"));
    }
}
