//! Rendering of `psk.hpp`.
//!
//! The identifiers below are referenced by firmware sources, so they are
//! fixed rather than configurable.

use crate::{CodeBuilder, GeneratedFile, PskToken};

/// Include guard macro.
pub const GUARD: &str = "IOP_PSK_H";
/// Header providing the `IOP_ROM` storage qualifier.
pub const INCLUDE: &str = "iop-hal/string.hpp";
/// Namespace wrapping the constant.
pub const NAMESPACE: &str = "generated";
/// Name of the generated constant.
pub const CONSTANT: &str = "PSK";
/// Storage qualifier placing the constant in flash.
pub const STORAGE_QUALIFIER: &str = "IOP_ROM";

/// Default location of the header, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "include/generated/psk.hpp";

/// Generator name written in the header comment unless overridden.
pub const DEFAULT_GENERATOR: &str = "`iop-psk` called by PlatformIO";

/// Settings that shape the header but not its identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Name of the build step, shown in the "computer generated" comment.
    pub generator: String,
}

impl HeaderConfig {
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATOR)
    }
}

/// The generated header holding a single token.
#[derive(Debug, Clone)]
pub struct PskHeader {
    token: PskToken,
    config: HeaderConfig,
}

impl PskHeader {
    pub fn new(token: PskToken, config: HeaderConfig) -> Self {
        Self { token, config }
    }

    pub fn token(&self) -> &PskToken {
        &self.token
    }
}

/// `constexpr static char PSK[] IOP_ROM = "...";`
pub(crate) fn declaration(token: &str) -> String {
    format!(
        "constexpr static char {}[] {} = \"{}\";",
        CONSTANT, STORAGE_QUALIFIER, token
    )
}

pub(crate) fn comment(generator: &str) -> String {
    format!(
        "This file is computer generated at build time ({})",
        generator
    )
}

pub(crate) fn namespace_open() -> String {
    format!("namespace {} {{", NAMESPACE)
}

pub(crate) fn namespace_close() -> String {
    format!("}} // namespace {}", NAMESPACE)
}

impl GeneratedFile for PskHeader {
    fn render(&self) -> String {
        CodeBuilder::new()
            .ifndef(GUARD)
            .blank()
            .comment(&comment(&self.config.generator))
            .blank()
            .include(INCLUDE)
            .blank()
            .line(&namespace_open())
            .line(&declaration(self.token.as_str()))
            .line(&namespace_close())
            .endif()
            .build()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn header() -> PskHeader {
        let token = PskToken::generate(&mut StdRng::seed_from_u64(3));
        PskHeader::new(token, HeaderConfig::default())
    }

    #[test]
    fn test_render_matches_template() {
        let header = header();
        let expected = format!(
            "#ifndef IOP_PSK_H\n\
             #define IOP_PSK_H\n\
             \n\
             // This file is computer generated at build time (`iop-psk` called by PlatformIO)\n\
             \n\
             #include <iop-hal/string.hpp>\n\
             \n\
             namespace generated {{\n\
             constexpr static char PSK[] IOP_ROM = \"{}\";\n\
             }} // namespace generated\n\
             #endif",
            header.token()
        );
        assert_eq!(header.render(), expected);
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        assert!(header().render().ends_with("#endif"));
    }

    #[test]
    fn test_render_uses_configured_generator() {
        let header = PskHeader::new(PskToken::random(), HeaderConfig::new("build/preBuild.py"));
        assert!(
            header
                .render()
                .contains("// This file is computer generated at build time (build/preBuild.py)\n")
        );
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            declaration("abc"),
            "constexpr static char PSK[] IOP_ROM = \"abc\";"
        );
    }
}
