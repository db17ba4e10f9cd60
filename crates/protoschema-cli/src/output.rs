//! Writing documents to an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use protoschema_codegen::SchemaDocument;
use protoschema_core::GeneratorResult;

/// Write each document as `<dir>/<name>.json`, creating `dir` if needed.
///
/// Returns the written paths in document order. A document whose name was
/// already written in this call overwrites the earlier file.
pub fn write_documents(dir: &Path, documents: &[SchemaDocument]) -> GeneratorResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(documents.len());
    for document in documents {
        let path = dir.join(document.file_name());
        if written.contains(&path) {
            tracing::warn!(path = %path.display(), "overwriting document generated earlier in this run");
        }
        fs::write(&path, document.to_json_string()?)?;
        tracing::debug!(path = %path.display(), "wrote schema");
        written.push(path);
    }

    Ok(written)
}
