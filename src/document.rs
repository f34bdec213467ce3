//! Document assembly: locate, extract, then cross-link.

use std::path::Path;

use crate::declaration;
use crate::error::Error;
use crate::extractor;
use crate::linker::CrossLinker;
use crate::types::{DeclarationInfo, DocumentModel, Operation, Property};

/// Accumulates one document's members across the extraction passes.
///
/// Owned by a single pipeline run and passed by `&mut` between stages; there
/// is no shared or global state.
pub struct DocumentBuilder {
    /// Declaration found by the locator.
    declaration: DeclarationInfo,
    /// Operations extracted so far.
    operations: Vec<Operation>,
    /// Properties extracted so far.
    properties: Vec<Property>,
}

impl DocumentBuilder {
    /// Start a document for an already located declaration.
    pub const fn new(declaration: DeclarationInfo) -> Self {
        return Self {
            declaration,
            operations: Vec::new(),
            properties: Vec::new(),
        };
    }

    /// Run both operation passes over `source`.
    pub fn extract_operations(&mut self, source: &str) {
        extractor::extract(source, &mut self.operations);
    }

    /// Run both property passes over `source`.
    pub fn extract_properties(&mut self, source: &str) {
        extractor::extract(source, &mut self.properties);
    }

    /// Cross-link every documented description against the complete member
    /// set and seal the model.
    ///
    /// Linking runs after all extraction, so a description may link to a
    /// member declared later in the file. Placeholder descriptions are left
    /// untouched.
    pub fn finish(mut self) -> DocumentModel {
        let linker = CrossLinker::new(&self.properties, &self.operations);

        if self.declaration.documented {
            self.declaration.description = linker.link(&self.declaration.description);
        }
        let members = self
            .properties
            .iter_mut()
            .map(|p| return &mut p.member)
            .chain(self.operations.iter_mut().map(|o| return &mut o.member));
        for member in members.filter(|m| return m.documented) {
            member.description = linker.link(&member.description);
        }

        return DocumentModel {
            declaration: self.declaration,
            operations: self.operations,
            properties: self.properties,
        };
    }
}

/// Build the document model for one source file.
///
/// Stage order is fixed: locate the declaration, extract properties, extract
/// operations (parameters are parsed inline), then cross-link.
///
/// # Errors
///
/// Returns `Error::NoDeclarationFound` if `source` has no type declaration.
pub fn build(path: &Path, source: &str) -> Result<DocumentModel, Error> {
    let declaration = declaration::locate(source).ok_or_else(|| return Error::NoDeclarationFound {
        path: path.to_path_buf(),
    })?;

    let mut builder = DocumentBuilder::new(declaration);
    builder.extract_properties(source);
    builder.extract_operations(source);

    return Ok(builder.finish());
}
