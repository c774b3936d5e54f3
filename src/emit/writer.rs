// Wed Oct 14 2026 - Alex

const AUTOGENERATED_HEADER: &str = "//\n// DO NOT MODIFY! THIS IS AUTOGENERATED FILE!\n//\n";

/// Line-oriented source builder with brace-aware indentation.
pub struct CodeWriter {
    code: String,
    depth: usize,
    indent_width: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            code: String::new(),
            depth: 0,
            indent_width: 4,
        }
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Starts a generated file: autogenerated marker and `namespace {` opened.
    pub fn source_file(namespace: &str) -> Self {
        let mut writer = Self::new();
        writer.file_header();
        writer.open(&format!("namespace {}", namespace));
        writer
    }

    pub fn file_header(&mut self) {
        self.code.push_str(AUTOGENERATED_HEADER);
    }

    pub fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.code.push('\n');
            return;
        }
        self.code.push_str(&" ".repeat(self.depth * self.indent_width));
        self.code.push_str(text);
        self.code.push('\n');
    }

    pub fn blank(&mut self) {
        self.code.push('\n');
    }

    pub fn usings(&mut self, namespaces: &[&str]) {
        for ns in namespaces {
            self.line(&format!("using {};", ns));
        }
        self.blank();
    }

    /// Writes `header` and an opening brace, then indents.
    pub fn open(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.depth += 1;
    }

    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// A braced block written by `body`.
    pub fn block<F: FnOnce(&mut Self)>(&mut self, header: &str, body: F) {
        self.open(header);
        body(self);
        self.close();
    }

    /// Closes every open block and returns the text.
    pub fn finish(mut self) -> String {
        while self.depth > 0 {
            self.close();
        }
        self.code
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
