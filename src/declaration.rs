//! Locating the documented type declaration.

use crate::comment;
use crate::patterns::DECLARATION;
use crate::types::{DeclarationInfo, DeclarationKind, PLACEHOLDER_DESCRIPTION};

/// Find the first type declaration in `source` and its doc comment, if any.
///
/// Returns `None` when no declaration keyword is present; callers turn that
/// into `Error::NoDeclarationFound`.
pub fn locate(source: &str) -> Option<DeclarationInfo> {
    let caps = DECLARATION.captures(source)?;
    let name = caps.name("name")?.as_str();
    let kind = DeclarationKind::from_keyword(caps.name("kind")?.as_str())?;
    let description = caps.name("doc").and_then(|doc| return comment::normalize(doc.as_str()));

    tracing::debug!(keyword = kind.keyword(), name, documented = description.is_some(), "located declaration");

    return Some(DeclarationInfo {
        documented: description.is_some(),
        description: description.unwrap_or_else(|| return PLACEHOLDER_DESCRIPTION.to_string()),
        kind,
        name: name.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_class() {
        let info = locate("/** Holds a total. */\nclass Counter {\n}").unwrap();
        assert_eq!(info.name, "Counter");
        assert_eq!(info.kind, DeclarationKind::Class);
        assert_eq!(info.description, "Holds a total.");
        assert!(info.documented);
    }

    #[test]
    fn undocumented_class_uses_placeholder() {
        let info = locate("import Foundation\n\nfinal class Plain: NSObject {}").unwrap();
        assert_eq!(info.name, "Plain");
        assert_eq!(info.description, PLACEHOLDER_DESCRIPTION);
        assert!(!info.documented);
    }

    #[test]
    fn modifiers_between_comment_and_keyword() {
        let info = locate("/**\n * A shape.\n */\npublic final class Shape {}").unwrap();
        assert_eq!(info.name, "Shape");
        assert_eq!(info.description, "A shape.");
    }

    #[test]
    fn detached_comment_is_not_attached() {
        let info = locate("/** License text. */\nimport UIKit\n\nstruct Point {}").unwrap();
        assert_eq!(info.name, "Point");
        assert_eq!(info.kind, DeclarationKind::Struct);
        assert_eq!(info.description, PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn first_declaration_wins() {
        let info = locate("protocol Drawable {}\nclass Canvas {}").unwrap();
        assert_eq!(info.name, "Drawable");
        assert_eq!(info.kind, DeclarationKind::Protocol);
    }

    #[test]
    fn missing_declaration() {
        assert!(locate("let x = 1\nfunc free() {}").is_none());
        assert!(locate("").is_none());
    }
}
