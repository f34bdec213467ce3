//! Structural patterns matched against raw source text.
//!
//! Each pattern is an independent, immutable matcher. Callers iterate
//! `captures_iter` over the source, so every extraction pass is lazy and can
//! be restarted by iterating again. Capture groups are named so documented
//! and bare variants of a pattern share one constructor:
//!
//! - `doc`: doc comment body (documented variants only)
//! - `name`: declared identifier
//! - `kind`: declaration keyword
//! - `ty`: property type text
//! - `ret`: operation return type (tail pattern only)
//!
//! Operations are matched only up to their name here; the generic clause and
//! the parenthesized parameter list can nest arbitrarily, so
//! `signature::scan_operation_tail` finds their balancing brackets in code.

use std::sync::LazyLock;

use regex::Regex;

/// `/** ... */` where the body never crosses a `*/`. Trailing stars before the
/// closing slash are excluded from `doc`.
const DOC_COMMENT: &str = r"/\*\*(?P<doc>(?:[^*]|\*+[^*/])*)\*+/\s*";

/// Zero or more declaration modifiers, e.g. `public final` or `private(set)`.
const MODIFIERS: &str = r"(?:\b(?:public|private|internal|fileprivate|open|final|static|override|lazy|weak|mutating|nonmutating|dynamic|required|convenience)(?:\(set\))?\s+)*";

/// `class Name` and friends.
const DECLARATION_FORM: &str = r"\b(?P<kind>class|struct|enum|protocol|actor)\s+(?P<name>\w+)";

/// `let name: Type` / `var name: Type`; the type stops at `{`, `=`, or end of line.
const PROPERTY_FORM: &str = r"\b(?:let|var)\s+(?P<name>\w+)\s*:\s*(?P<ty>[^{=\n]+)";

/// `func name`; everything after the name is scanned by the signature parser.
const OPERATION_FORM: &str = r"\bfunc\s+(?P<name>\w+)";

/// Compile one of the constant patterns above.
///
/// # Panics
///
/// Panics if a hardcoded pattern is invalid (compile-time invariant).
#[allow(clippy::expect_used, reason = "patterns are string constants covered by tests")]
fn compile(pattern: &str) -> Regex {
    return Regex::new(pattern).expect("valid regex");
}

/// Declaration, optionally preceded by its doc comment. The leftmost match
/// wins, so a doc comment directly in front of the first declaration is
/// always part of the match.
pub static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    return compile(&format!("(?:{DOC_COMMENT})?{MODIFIERS}{DECLARATION_FORM}"));
});

/// Operation with a doc comment directly in front of it.
pub static DOCUMENTED_OPERATION: LazyLock<Regex> =
    LazyLock::new(|| return compile(&format!("{DOC_COMMENT}{MODIFIERS}{OPERATION_FORM}")));

/// Property with a doc comment directly in front of it.
pub static DOCUMENTED_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| return compile(&format!("{DOC_COMMENT}{MODIFIERS}{PROPERTY_FORM}")));

/// Operation form alone.
pub static OPERATION: LazyLock<Regex> = LazyLock::new(|| return compile(OPERATION_FORM));

/// `[external ]internal: type`, anchored to a whole trimmed segment.
pub static PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    return compile(r"(?s)^(?:(?P<external>\w+)\s+)?(?P<internal>\w+)\s*:\s*(?P<ty>.+)$");
});

/// Effects and return type right after an operation's closing parenthesis.
/// The return type stops at `{` or end of line.
pub static OPERATION_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    return compile(r"^(?:\s*(?:async|rethrows|throws)\b)*(?:\s*->\s*(?P<ret>[^{\n]+))?");
});

/// Property form alone.
pub static PROPERTY: LazyLock<Regex> = LazyLock::new(|| return compile(PROPERTY_FORM));
