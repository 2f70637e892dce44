//! Naming conventions for generated Solidity.

/// Lower-case the first character of a name (e.g., "MoveSystem" -> "moveSystem").
///
/// Only the first character changes; the remainder is kept verbatim, so
/// acronyms stay intact ("ERC20System" -> "eRC20System").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Solidity keywords and reserved words that cannot be used as identifiers.
/// Source: https://docs.soliditylang.org/en/latest/cheatsheet.html#reserved-keywords
pub const SOLIDITY_RESERVED: &[&str] = &[
    // Keywords
    "abstract", "address", "anonymous", "as", "assembly", "bool", "break", "bytes", "calldata",
    "catch", "constant", "constructor", "continue", "contract", "delete", "do", "else", "emit",
    "enum", "error", "event", "external", "fallback", "false", "for", "function", "if",
    "immutable", "import", "indexed", "interface", "internal", "is", "library", "mapping",
    "memory", "modifier", "new", "override", "payable", "pragma", "private", "public", "pure",
    "receive", "return", "returns", "revert", "storage", "string", "struct", "true", "try",
    "type", "unchecked", "using", "view", "virtual", "while",
    // Reserved for future use
    "after", "alias", "apply", "auto", "byte", "case", "copyof", "default", "define", "final",
    "implements", "in", "inline", "let", "macro", "match", "mutable", "null", "of", "partial",
    "promise", "reference", "relocatable", "sealed", "sizeof", "static", "supports", "switch",
    "typedef", "typeof",
];

/// Check if a name is a Solidity keyword or reserved word.
pub fn is_reserved(name: &str) -> bool {
    SOLIDITY_RESERVED.contains(&name)
}
