//! Identifier and text helpers for generated source.
//!
//! `sanitize` and `indent` are the only transforms applied to human labels
//! and generated lines. The remaining helpers let callers check whether a
//! sanitized label is usable as a C# identifier and embed arbitrary strings
//! as C# verbatim literals.

/// One level of indentation in generated source.
pub const INDENT_UNIT: &str = "    ";

/// Replace every space in `label` with `_`.
///
/// No other character is touched; the caller is responsible for the rest of
/// the label being legal in the target identifier grammar (see
/// [`is_csharp_identifier`]).
///
/// # Examples
///
/// ```
/// use ghtest_core::sanitize;
/// assert_eq!(sanitize("adds two numbers"), "adds_two_numbers");
/// assert_eq!(sanitize(""), "");
/// ```
#[must_use]
pub fn sanitize(label: &str) -> String {
    label.replace(' ', "_")
}

/// Prefix `line` with `level` repetitions of [`INDENT_UNIT`].
///
/// # Examples
///
/// ```
/// use ghtest_core::indent;
/// assert_eq!(indent("{", 0), "{");
/// assert_eq!(indent("{", 2), "        {");
/// ```
#[must_use]
pub fn indent(line: &str, level: usize) -> String {
    let mut out = String::with_capacity(INDENT_UNIT.len() * level + line.len());
    for _ in 0..level {
        out.push_str(INDENT_UNIT);
    }
    out.push_str(line);
    out
}

/// C# reserved keywords. Contextual keywords (`var`, `async`, ...) are legal
/// identifiers and are not listed.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Returns `true` if `name` is a legal, non-keyword C# identifier.
///
/// Accepts letters (any Unicode alphabetic), digits, and `_`, with a
/// non-digit first character.
#[must_use]
pub fn is_csharp_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || first.is_alphabetic()) {
        return false;
    }
    if !chars.all(|c| c == '_' || c.is_alphanumeric()) {
        return false;
    }
    !CSHARP_KEYWORDS.contains(&name)
}

/// Render `value` as a C# verbatim string literal (`@"..."`), doubling any
/// embedded quotes.
///
/// # Examples
///
/// ```
/// use ghtest_core::ident::verbatim_literal;
/// assert_eq!(verbatim_literal(r"C:\tests\a.ghx"), r#"@"C:\tests\a.ghx""#);
/// assert_eq!(verbatim_literal(r#"say "hi""#), r#"@"say ""hi""""#);
/// ```
#[must_use]
pub fn verbatim_literal(value: &str) -> String {
    format!("@\"{}\"", value.replace('"', "\"\""))
}
