//! Markdown rendering of a finished document model.
//!
//! Pure serialization: sections appear in model order, empty sections are
//! omitted, and nothing here inspects or rewrites documentation text.

use std::fmt::Write as _;

use crate::types::{DocumentModel, Operation, Property};

/// Values that come from the run rather than from the source text.
pub struct RenderContext<'a> {
    /// Info string of the signature code fence, e.g. `swift`.
    pub fence_language: &'a str,
    /// Input file name shown under "File Information".
    pub file_name: &'a str,
    /// Preformatted generation timestamp.
    pub generated_at: &'a str,
}

/// Render the full markdown document.
pub fn render_markdown(doc: &DocumentModel, ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();

    let _ = write!(out, "# {}\n\n", doc.declaration.name);
    let _ = write!(out, "{}\n\n", doc.declaration.description);

    out.push_str("## File Information\n\n");
    let _ = writeln!(out, "- **File:** {}", ctx.file_name);
    let _ = write!(out, "- **Documentation Generated:** {}\n\n", ctx.generated_at);

    if !doc.properties.is_empty() {
        out.push_str("## Properties\n\n");
        for property in &doc.properties {
            render_property(&mut out, property);
        }
    }

    if !doc.operations.is_empty() {
        out.push_str("## Methods\n\n");
        for operation in &doc.operations {
            render_operation(&mut out, operation, ctx.fence_language);
        }
    }

    return out;
}

/// `name(label: type, ...)`, plus ` -> ret` unless the return type is `Void`.
pub fn signature(operation: &Operation) -> String {
    let params = operation
        .parameters
        .iter()
        .map(|p| return format!("{}: {}", p.name, p.type_name))
        .collect::<Vec<_>>()
        .join(", ");

    let mut signature = format!("{}({params})", operation.member.name);
    if operation.has_return() {
        let _ = write!(signature, " -> {}", operation.return_type);
    }
    return signature;
}

/// Anchored heading shared by properties and methods.
fn render_heading(out: &mut String, link_id: &str, name: &str) {
    let _ = write!(out, "### <a id='{link_id}'>{name}</a>\n\n");
}

/// One method block: heading, fenced signature, description, parameters, returns.
fn render_operation(out: &mut String, operation: &Operation, fence_language: &str) {
    render_heading(out, &operation.member.link_id, &operation.member.name);
    let _ = write!(out, "```{fence_language}\n{}\n```\n\n", signature(operation));
    let _ = write!(out, "**Description:** {}\n\n", operation.member.description);

    if !operation.parameters.is_empty() {
        out.push_str("**Parameters:**\n\n");
        for param in &operation.parameters {
            let _ = writeln!(out, "- `{}` ({})", param.name, param.type_name);
        }
        out.push('\n');
    }

    if operation.has_return() {
        let _ = write!(out, "**Returns:** `{}`\n\n", operation.return_type);
    }
}

/// One property block: heading, type, description.
fn render_property(out: &mut String, property: &Property) {
    render_heading(out, &property.member.link_id, &property.member.name);
    let _ = writeln!(out, "- **Type:** `{}`", property.type_name);
    let _ = write!(out, "- **Description:** {}\n\n", property.member.description);
}
