//! Member extraction: a documented pass followed by a bare pass.

use regex::{Captures, Regex};

use crate::comment;
use crate::patterns;
use crate::signature;
use crate::types::{Member, MemberKind, Operation, Property, VOID_RETURN};

/// A member shape that can be extracted from source text.
pub trait MemberForm: Sized {
    /// Which member list this form populates.
    const KIND: MemberKind;

    /// Pattern for the member form alone.
    fn bare_pattern() -> &'static Regex;

    /// Pattern for the member form preceded by a doc comment.
    fn documented_pattern() -> &'static Regex;

    /// Build an entry from a match of either pattern and the source text that
    /// follows it. `None` when the text after the match doesn't complete the
    /// form.
    fn from_captures(caps: &Captures<'_>, rest: &str, member: Member) -> Option<Self>;

    /// Shared member fields.
    fn member(&self) -> &Member;
}

impl MemberForm for Operation {
    const KIND: MemberKind = MemberKind::Operation;

    fn bare_pattern() -> &'static Regex {
        return &patterns::OPERATION;
    }

    fn documented_pattern() -> &'static Regex {
        return &patterns::DOCUMENTED_OPERATION;
    }

    fn from_captures(_caps: &Captures<'_>, rest: &str, member: Member) -> Option<Self> {
        let tail = signature::scan_operation_tail(rest)?;
        return Some(Self {
            member,
            parameters: signature::parse_parameters(tail.params),
            return_type: tail.return_type.unwrap_or(VOID_RETURN).to_string(),
        });
    }

    fn member(&self) -> &Member {
        return &self.member;
    }
}

impl MemberForm for Property {
    const KIND: MemberKind = MemberKind::Property;

    fn bare_pattern() -> &'static Regex {
        return &patterns::PROPERTY;
    }

    fn documented_pattern() -> &'static Regex {
        return &patterns::DOCUMENTED_PROPERTY;
    }

    fn from_captures(caps: &Captures<'_>, _rest: &str, member: Member) -> Option<Self> {
        let type_name = caps.name("ty").map_or("", |m| return m.as_str().trim());
        return Some(Self {
            member,
            type_name: type_name.to_string(),
        });
    }

    fn member(&self) -> &Member {
        return &self.member;
    }
}

/// Append every member of kind `M` found in `source` to `members`.
///
/// Documented matches are appended first, in source order. Bare matches are
/// appended afterwards only when no entry with the exact same name exists,
/// so a documented declaration always beats its bare duplicate. Identity is
/// the name alone: overloads collapse into the first entry seen.
pub fn extract<M: MemberForm>(source: &str, members: &mut Vec<M>) {
    let before = members.len();

    for caps in M::documented_pattern().captures_iter(source) {
        let Some(name) = caps.name("name").map(|m| return m.as_str()) else {
            continue;
        };
        if contains(members, name) {
            tracing::debug!(kind = ?M::KIND, name, "discarding duplicate documented member");
            continue;
        }
        let description = caps.name("doc").and_then(|doc| return comment::normalize(doc.as_str()));
        let member = Member::new(M::KIND, name, description);
        push_entry(members, &caps, source, member);
    }
    let documented = members.len().saturating_sub(before);

    for caps in M::bare_pattern().captures_iter(source) {
        let Some(name) = caps.name("name").map(|m| return m.as_str()) else {
            continue;
        };
        if contains(members, name) {
            continue;
        }
        let member = Member::new(M::KIND, name, None);
        push_entry(members, &caps, source, member);
    }

    tracing::debug!(
        kind = ?M::KIND,
        documented,
        bare = members.len().saturating_sub(before).saturating_sub(documented),
        "extracted members"
    );
}

/// Complete a match with the text after it and append the entry, if any.
fn push_entry<M: MemberForm>(
    members: &mut Vec<M>,
    caps: &Captures<'_>,
    source: &str,
    member: Member,
) {
    let rest = caps.get(0).and_then(|whole| return source.get(whole.end()..)).unwrap_or("");
    match M::from_captures(caps, rest, member) {
        Some(entry) => members.push(entry),
        None => tracing::debug!(kind = ?M::KIND, "skipping incomplete member"),
    }
}

/// Whether `members` already holds an entry named exactly `name`.
fn contains<M: MemberForm>(members: &[M], name: &str) -> bool {
    return members.iter().any(|m| return m.member().name == name);
}
