/// Core domain types for the extracted document model.
use std::collections::HashMap;

/// Fallback description for declarations and members without a doc comment.
pub const PLACEHOLDER_DESCRIPTION: &str = "No description provided.";

/// Return type recorded for operations without an explicit `->` clause.
pub const VOID_RETURN: &str = "Void";

/// The single type declaration a source file documents.
#[derive(Debug, Clone)]
pub struct DeclarationInfo {
    /// Normalized doc comment text, or the placeholder.
    pub description: String,
    /// Whether `description` came from a doc comment (and may be cross-linked).
    pub documented: bool,
    /// Keyword that introduced the declaration.
    pub kind: DeclarationKind,
    /// Declared type name.
    pub name: String,
}

/// Keyword that introduces a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `actor Name`
    Actor,
    /// `class Name`
    Class,
    /// `enum Name`
    Enum,
    /// `protocol Name`
    Protocol,
    /// `struct Name`
    Struct,
}

impl DeclarationKind {
    /// Map a matched keyword back to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        return match keyword {
            "actor" => Some(Self::Actor),
            "class" => Some(Self::Class),
            "enum" => Some(Self::Enum),
            "protocol" => Some(Self::Protocol),
            "struct" => Some(Self::Struct),
            _ => None,
        };
    }

    /// The source keyword for this kind.
    pub const fn keyword(self) -> &'static str {
        return match self {
            Self::Actor => "actor",
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Struct => "struct",
        };
    }
}

/// Fields shared by properties and operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Normalized doc comment text, or the placeholder.
    pub description: String,
    /// Whether `description` came from a doc comment (and may be cross-linked).
    pub documented: bool,
    /// In-document anchor, e.g. `property-count`.
    pub link_id: String,
    /// Declared member name, case preserved.
    pub name: String,
}

impl Member {
    /// Build a member, deriving its link id from the kind and name.
    /// `description` is `None` when the member has no usable doc comment.
    pub fn new(kind: MemberKind, name: &str, description: Option<String>) -> Self {
        let documented = description.is_some();
        return Self {
            description: description.unwrap_or_else(|| return PLACEHOLDER_DESCRIPTION.to_string()),
            documented,
            link_id: kind.link_id(name),
            name: name.to_string(),
        };
    }
}

/// Which member list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// `func` declarations.
    Operation,
    /// `let` / `var` declarations.
    Property,
}

impl MemberKind {
    /// Deterministic anchor id: `<prefix>-<lowercased name>`.
    pub fn link_id(self, name: &str) -> String {
        return format!("{}-{}", self.link_prefix(), name.to_lowercase());
    }

    /// Anchor prefix for this kind of member.
    pub const fn link_prefix(self) -> &'static str {
        return match self {
            Self::Operation => "method",
            Self::Property => "property",
        };
    }
}

/// A documented or bare `func` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Shared member fields.
    pub member: Member,
    /// Parsed parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Raw return type text, or [`VOID_RETURN`].
    pub return_type: String,
}

impl Operation {
    /// Whether the operation declares a non-placeholder return type.
    pub fn has_return(&self) -> bool {
        return self.return_type != VOID_RETURN;
    }
}

/// One entry of an operation's parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Internal label, prefixed by the external label and a space when present.
    pub name: String,
    /// Raw type text, generic arguments included.
    pub type_name: String,
}

/// A documented or bare `let` / `var` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Shared member fields.
    pub member: Member,
    /// Raw, trimmed type text.
    pub type_name: String,
}

/// Everything extracted from one source file, ready for rendering.
#[derive(Debug, Clone)]
pub struct DocumentModel {
    /// The located type declaration.
    pub declaration: DeclarationInfo,
    /// Operations in insertion order.
    pub operations: Vec<Operation>,
    /// Properties in insertion order.
    pub properties: Vec<Property>,
}

impl DocumentModel {
    /// Link ids claimed by more than one member, in first-seen order.
    ///
    /// Names that differ only by case (`Count` / `count`) lowercase to the
    /// same anchor. Both members stay in the model; callers decide whether
    /// to report it.
    pub fn link_id_collisions(&self) -> Vec<String> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        let members = self
            .properties
            .iter()
            .map(|p| return &p.member)
            .chain(self.operations.iter().map(|o| return &o.member));

        for member in members {
            let count = seen.entry(member.link_id.as_str()).or_insert(0);
            if *count == 1 {
                order.push(member.link_id.as_str());
            }
            *count = count.saturating_add(1);
        }

        return order.into_iter().map(str::to_string).collect();
    }
}
