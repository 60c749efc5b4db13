//! Structural check of an existing `psk.hpp`.

use crate::{
    PskToken,
    error::{Error, Result},
    header::{self, CONSTANT, GUARD, NAMESPACE, STORAGE_QUALIFIER},
};

/// What a well-formed header contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// The generator named in the header comment, if the comment is present.
    pub generator: Option<String>,
    /// The embedded token.
    pub token: PskToken,
}

/// Parse a header and verify its structure.
///
/// Checks for a balanced `IOP_PSK_H` include guard, exactly one `generated`
/// namespace block and exactly one `PSK` declaration inside it holding a
/// valid token.
pub fn inspect(content: &str) -> Result<HeaderInfo> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();

    let ifndef = format!("#ifndef {}", GUARD);
    let define = format!("#define {}", GUARD);
    if lines.first() != Some(&ifndef.as_str()) || lines.get(1) != Some(&define.as_str()) {
        return Err(Error::malformed(format!(
            "expected the file to open with '{}' and '{}'",
            ifndef, define
        )));
    }
    if lines.last() != Some(&"#endif") {
        return Err(Error::malformed("expected the file to end with '#endif'"));
    }
    let opened = count(&lines, |l| l.starts_with("#if"));
    let closed = count(&lines, |l| l.starts_with("#endif"));
    if opened != 1 || closed != 1 {
        return Err(Error::malformed(format!(
            "unbalanced include guard ({} opened, {} closed)",
            opened, closed
        )));
    }

    let open = header::namespace_open();
    let close = header::namespace_close();
    let start = single(&lines, |l| *l == open, &format!("namespace '{}'", NAMESPACE))?;
    let end = single(
        &lines,
        |l| *l == close,
        &format!("closing of namespace '{}'", NAMESPACE),
    )?;
    if end < start {
        return Err(Error::malformed(format!(
            "namespace '{}' is closed before it is opened",
            NAMESPACE
        )));
    }

    let prefix = format!(
        "constexpr static char {}[] {} = \"",
        CONSTANT, STORAGE_QUALIFIER
    );
    let array = format!("{}[]", CONSTANT);
    let decl = single(
        &lines,
        |l| l.contains(&array),
        &format!("declaration of '{}'", CONSTANT),
    )?;
    if !(start < decl && decl < end) {
        return Err(Error::malformed(format!(
            "'{}' is declared outside namespace '{}'",
            CONSTANT, NAMESPACE
        )));
    }
    let literal = lines[decl]
        .strip_prefix(prefix.as_str())
        .and_then(|rest| rest.strip_suffix("\";"))
        .ok_or_else(|| Error::malformed(format!("expected '{}<token>\";'", prefix)))?;
    let token = PskToken::parse(literal)?;

    let generator = lines.iter().find_map(|l| {
        l.strip_prefix("// This file is computer generated at build time (")
            .and_then(|rest| rest.strip_suffix(')'))
            .map(str::to_string)
    });

    Ok(HeaderInfo { generator, token })
}

fn count(lines: &[&str], pred: impl Fn(&str) -> bool) -> usize {
    lines.iter().filter(|l| pred(l)).count()
}

fn single(lines: &[&str], pred: impl Fn(&&str) -> bool, what: &str) -> Result<usize> {
    let mut found = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| pred(l))
        .map(|(i, _)| i);
    match (found.next(), found.next()) {
        (Some(i), None) => Ok(i),
        (None, _) => Err(Error::malformed(format!("missing {}", what))),
        (Some(_), Some(_)) => Err(Error::malformed(format!("more than one {}", what))),
    }
}
