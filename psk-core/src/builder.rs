//! Line-oriented builder for generated C++ headers.

/// Fluent API for assembling preprocessor-heavy header files.
///
/// # Example
///
/// ```
/// use iop_psk_core::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .ifndef("FOO_H")
///     .blank()
///     .line("int foo();")
///     .endif()
///     .build();
///
/// assert_eq!(code, "#ifndef FOO_H\n#define FOO_H\n\nint foo();\n#endif");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line followed by a newline (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without a newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a `//` line comment (mutable).
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.push_comment(text);
        self
    }

    /// Open an include guard: `#ifndef GUARD` / `#define GUARD`.
    pub fn ifndef(self, guard: &str) -> Self {
        self.line(&format!("#ifndef {}", guard))
            .line(&format!("#define {}", guard))
    }

    /// `#include <path>`
    pub fn include(self, path: &str) -> Self {
        self.line(&format!("#include <{}>", path))
    }

    /// Close the include guard. Emitted without a trailing newline.
    pub fn endif(self) -> Self {
        self.raw("#endif")
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
