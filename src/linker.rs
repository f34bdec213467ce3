//! Cross-linking of member names inside documentation text.
//!
//! Link spans are collected against the original text and materialized in a
//! single pass, so inserted `[name](#id)` text is never scanned again.

use std::cmp::Reverse;
use std::fmt::Write as _;
use std::ops::Range;

use regex::Regex;

use crate::types::{Member, Operation, Property};

/// Rewrites whole-word, case-insensitive member mentions into anchor links.
pub struct CrossLinker {
    /// Candidates in priority order: longest name first, then properties
    /// before operations, then list order.
    targets: Vec<LinkTarget>,
}

/// One member a mention can resolve to.
struct LinkTarget {
    /// Anchor the link points at.
    link_id: String,
    /// Declared name, used as the visible label.
    name: String,
    /// Whole-word, case-insensitive matcher for `name`.
    pattern: Regex,
}

/// An accepted replacement: byte range in the original text and its target.
struct Span {
    /// Byte range of the mention.
    range: Range<usize>,
    /// Index into `CrossLinker::targets`.
    target: usize,
}

impl CrossLinker {
    /// Build a linker over the complete property and operation lists.
    pub fn new(properties: &[Property], operations: &[Operation]) -> Self {
        let mut targets: Vec<LinkTarget> = properties
            .iter()
            .map(|p| return &p.member)
            .chain(operations.iter().map(|o| return &o.member))
            .filter_map(LinkTarget::for_member)
            .collect();

        // Stable: equal lengths keep properties-then-operations list order.
        targets.sort_by_key(|t| return Reverse(t.name.chars().count()));

        return Self { targets };
    }

    /// Rewrite every mention of a known member into `[name](#link-id)`.
    ///
    /// A mention is claimed by the first target in priority order whose match
    /// covers it; later matches overlapping a claimed span are skipped.
    pub fn link(&self, text: &str) -> String {
        let spans = self.collect_spans(text);
        if spans.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0_usize;
        for span in spans {
            let Some(target) = self.targets.get(span.target) else {
                continue;
            };
            out.push_str(text.get(cursor..span.range.start).unwrap_or_default());
            let _ = write!(out, "[{}](#{})", target.name, target.link_id);
            cursor = span.range.end;
        }
        out.push_str(text.get(cursor..).unwrap_or_default());

        return out;
    }

    /// Non-overlapping mention spans, sorted by position.
    fn collect_spans(&self, text: &str) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();

        for (index, target) in self.targets.iter().enumerate() {
            for found in target.pattern.find_iter(text) {
                let range = found.range();
                let overlaps = spans
                    .iter()
                    .any(|s| return s.range.start < range.end && range.start < s.range.end);
                if !overlaps {
                    spans.push(Span { range, target: index });
                }
            }
        }

        spans.sort_by_key(|s| return s.range.start);
        return spans;
    }
}

impl LinkTarget {
    /// Compile the matcher for a member; skipped if the name is empty.
    fn for_member(member: &Member) -> Option<Self> {
        if member.name.is_empty() {
            return None;
        }
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&member.name))).ok()?;
        return Some(Self {
            link_id: member.link_id.clone(),
            name: member.name.clone(),
            pattern,
        });
    }
}
