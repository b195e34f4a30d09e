use std::cell::RefCell;

pub const DEFAULT_ROOT_DIRECTORY: &str = "Model";
pub const DEFAULT_DOMAIN_TYPE: &str = "mixed";

/// Options for DTO generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Whether to emit an assembler skeleton next to the DTO
    pub with_assembler: bool,
    /// Directory under the container where generated classes live
    pub root_directory: String,
    /// Domain type the assembler converts from and to
    pub assembler_domain_type: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            with_assembler: false,
            root_directory: DEFAULT_ROOT_DIRECTORY.to_string(),
            assembler_domain_type: DEFAULT_DOMAIN_TYPE.to_string(),
        }
    }
}

/// Compilation context for managing state during code generation
pub struct CompilerContext {
    buffer: RefCell<String>,
    indent_level: RefCell<usize>,
    /// Set after a member is emitted, so the next one is separated by a blank line
    pending_separator: RefCell<bool>,
}

impl CompilerContext {
    pub fn new() -> Self {
        Self {
            buffer: RefCell::new(String::new()),
            indent_level: RefCell::new(0),
            pending_separator: RefCell::new(false),
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    /// Add a line at the current indentation; empty lines carry no indentation
    pub fn add_line(&self, text: &str) {
        if !text.is_empty() {
            self.add_indented(text);
        }
        self.add("\n");
    }

    pub fn add_indented(&self, text: &str) {
        let indent = "    ".repeat(*self.indent_level.borrow());
        self.buffer.borrow_mut().push_str(&indent);
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    /// Open a `{` block on its own line and indent
    pub fn open_block(&self) {
        self.add_line("{");
        self.indent();
        *self.pending_separator.borrow_mut() = false;
    }

    /// Dedent and close the block opened by `open_block`; the block counts as a member
    pub fn close_block(&self) {
        self.dedent();
        self.add_line("}");
        *self.pending_separator.borrow_mut() = true;
    }

    /// Start a class member, separating it from the previous one
    pub fn begin_member(&self) {
        let mut pending = self.pending_separator.borrow_mut();
        if *pending {
            self.add("\n");
        }
        *pending = true;
    }

    /// Emit a `/** ... */` doc block at the current indentation
    pub fn add_doc_block(&self, lines: &[String]) {
        self.add_line("/**");
        for line in lines {
            if line.is_empty() {
                self.add_line(" *");
            } else {
                self.add_line(&format!(" * {}", line));
            }
        }
        self.add_line(" */");
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl Default for CompilerContext {
    fn default() -> Self {
        Self::new()
    }
}
