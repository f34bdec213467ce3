//! Operation signature parsing: balanced parameter list scanning and
//! parameter splitting.

use crate::patterns::{OPERATION_TAIL, PARAMETER};
use crate::types::Parameter;

/// What follows an operation's name: raw parameter text and return type.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationTail<'a> {
    /// Text between the parentheses, unparsed.
    pub params: &'a str,
    /// Trimmed return type, if an `->` clause is present.
    pub return_type: Option<&'a str>,
}

/// Scan the text right after `func name` for an optional generic clause, the
/// parameter list, effects, and the return type.
///
/// Brackets are matched by depth, so `((Int) -> Void)?` parameters and
/// `<T: Collection<Int>>` clauses nest to any level. An unbalanced parameter
/// list falls back to the text up to the first `)`. Returns `None` when no
/// parameter list follows the name.
pub fn scan_operation_tail(rest: &str) -> Option<OperationTail<'_>> {
    let mut rest = rest.trim_start();
    if let Some(generics) = rest.strip_prefix('<') {
        let close = closing_index(generics, '<', '>')?;
        rest = generics.get(close.saturating_add(1)..)?.trim_start();
    }

    let inner = rest.strip_prefix('(')?;
    let close = closing_index(inner, '(', ')').or_else(|| return inner.find(')'))?;
    let params = inner.get(..close)?;
    let after = inner.get(close.saturating_add(1)..)?;

    let return_type = OPERATION_TAIL
        .captures(after)
        .and_then(|caps| return caps.name("ret"))
        .map(|ret| return ret.as_str().trim())
        .filter(|ret| return !ret.is_empty());

    return Some(OperationTail { params, return_type });
}

/// Parse the text between an operation's parentheses into parameters.
///
/// Best effort: segments that don't have the `[external ]internal: type`
/// shape (variadics without labels, stray tokens) are dropped, not reported.
/// Empty text yields an empty list.
pub fn parse_parameters(text: &str) -> Vec<Parameter> {
    return split_top_level(text)
        .into_iter()
        .filter_map(|segment| {
            let parameter = parse_segment(segment);
            if parameter.is_none() {
                tracing::debug!(segment, "dropping unrecognized parameter");
            }
            return parameter;
        })
        .collect();
}

/// Match one trimmed segment against the parameter shape.
fn parse_segment(segment: &str) -> Option<Parameter> {
    let caps = PARAMETER.captures(segment)?;
    let internal = caps.name("internal")?.as_str();
    let type_name = caps
        .name("ty")?
        .as_str()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let name = match caps.name("external") {
        Some(external) => format!("{} {internal}", external.as_str()),
        None => internal.to_string(),
    };

    return Some(Parameter {
        name,
        type_name,
    });
}

/// Byte index of the `close` that balances an `open` the caller already
/// consumed. The `>` of an `->` arrow is never a closer.
fn closing_index(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0_usize;
    let mut previous = None;

    for (index, ch) in text.char_indices() {
        if ch == open {
            depth = depth.saturating_add(1);
        } else if ch == close && !(ch == '>' && previous == Some('-')) {
            if depth == 0 {
                return Some(index);
            }
            depth = depth.saturating_sub(1);
        }
        previous = Some(ch);
    }

    return None;
}

/// Split on commas that sit outside every `<>`, `[]`, and `()` pair.
///
/// The `>` of an `->` arrow is not a closing bracket. Depth saturates at zero
/// so an unbalanced closer can't hide later commas. Segments are trimmed and
/// empty ones skipped.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0_usize;
    let mut previous = None;

    for (index, ch) in text.char_indices() {
        match ch {
            '<' | '[' | '(' => depth = depth.saturating_add(1),
            '>' if previous == Some('-') => {},
            '>' | ']' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.extend(text.get(start..index));
                start = index.saturating_add(ch.len_utf8());
            },
            _ => {},
        }
        previous = Some(ch);
    }
    segments.extend(text.get(start..));

    return segments
        .into_iter()
        .map(str::trim)
        .filter(|segment| return !segment.is_empty())
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, type_name: &str) -> Parameter {
        return Parameter {
            name: name.to_string(),
            type_name: type_name.to_string(),
        };
    }

    #[test]
    fn empty_list() {
        assert!(parse_parameters("").is_empty());
        assert!(parse_parameters("   \n ").is_empty());
    }

    #[test]
    fn internal_and_external_labels() {
        assert_eq!(
            parse_parameters("n: Int, to target: String, _ raw: Data"),
            vec![
                param("n", "Int"),
                param("to target", "String"),
                param("_ raw", "Data"),
            ]
        );
    }

    #[test]
    fn generic_argument_commas_do_not_split() {
        assert_eq!(
            parse_parameters("items: Map<String, Int>"),
            vec![param("items", "Map<String, Int>")]
        );
    }

    #[test]
    fn nested_generics_dictionaries_and_tuples() {
        assert_eq!(
            parse_parameters("a: Result<Array<Int>, Error>, b: [String: Int], c: (Int, Int)"),
            vec![
                param("a", "Result<Array<Int>, Error>"),
                param("b", "[String: Int]"),
                param("c", "(Int, Int)"),
            ]
        );
    }

    #[test]
    fn closure_arrow_is_not_a_closer() {
        assert_eq!(
            parse_parameters("f: (Int) -> Void, count: Int"),
            vec![param("f", "(Int) -> Void"), param("count", "Int")]
        );
    }

    #[test]
    fn multiline_parameter_list() {
        assert_eq!(
            parse_parameters("\n    first: Int,\n    second: Int\n"),
            vec![param("first", "Int"), param("second", "Int")]
        );
    }

    #[test]
    fn default_values_stay_in_the_type_text() {
        assert_eq!(parse_parameters("n: Int = 0"), vec![param("n", "Int = 0")]);
    }

    #[test]
    fn multiline_types_collapse_to_single_spaces() {
        assert_eq!(
            parse_parameters("f: (Int,\n      Int),\n  g: Map<String,\n\tInt>"),
            vec![param("f", "(Int, Int)"), param("g", "Map<String, Int>")]
        );
    }

    #[test]
    fn tail_with_nested_closure_parameter() {
        let tail = scan_operation_tail("(handler: ((Int) -> Void)? = nil) {}").unwrap();
        assert_eq!(tail.params, "handler: ((Int) -> Void)? = nil");
        assert_eq!(tail.return_type, None);
    }

    #[test]
    fn tail_with_nested_generic_clause() {
        let tail = scan_operation_tail("<T: Collection<Int>>(x: T) -> [T] {").unwrap();
        assert_eq!(tail.params, "x: T");
        assert_eq!(tail.return_type, Some("[T]"));
    }

    #[test]
    fn tail_with_effects_and_closure_return() {
        let tail = scan_operation_tail(" (_ f: (Int) -> T) async throws -> (Int) -> T\n").unwrap();
        assert_eq!(tail.params, "_ f: (Int) -> T");
        assert_eq!(tail.return_type, Some("(Int) -> T"));
    }

    #[test]
    fn unbalanced_list_falls_back_to_first_closer() {
        let tail = scan_operation_tail("(a: (Int) -> Void").unwrap();
        assert_eq!(tail.params, "a: (Int");
    }

    #[test]
    fn missing_parameter_list() {
        assert_eq!(scan_operation_tail(" = nil"), None);
        assert_eq!(scan_operation_tail("<T"), None);
    }

    #[test]
    fn malformed_segments_are_dropped() {
        assert_eq!(
            parse_parameters("Int, value: Double, ,"),
            vec![param("value", "Double")]
        );
    }
}
