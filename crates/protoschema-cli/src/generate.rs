//! Document generation over a decoded descriptor pool.

use std::collections::HashSet;

use prost_reflect::{DescriptorPool, FileDescriptor};
use protoschema_codegen::{SchemaDocument, build_documents};
use protoschema_core::{GeneratorConfig, GeneratorError};

use crate::convert::DescriptorConverter;
use crate::error::PluginError;

/// Decode a serialized `FileDescriptorSet`.
pub fn decode_descriptor_set(bytes: &[u8]) -> Result<DescriptorPool, PluginError> {
    Ok(DescriptorPool::decode(bytes)?)
}

/// Generate the documents for the named files.
///
/// When `files` is empty the targets are the files no other file in the pool
/// imports, which for a set written with `--include_imports` are the files
/// named on the protoc command line.
///
/// Files are processed in the order given. Each file's messages are built
/// independently.
pub fn generate(
    pool: &DescriptorPool,
    files: &[String],
    config: &GeneratorConfig,
) -> Result<Vec<SchemaDocument>, PluginError> {
    let converter = DescriptorConverter::new(pool);

    let targets = if files.is_empty() {
        root_files(pool)
    } else {
        files
            .iter()
            .map(|name| {
                pool.get_file_by_name(name)
                    .ok_or_else(|| GeneratorError::FileNotFound(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut documents = Vec::new();
    for file in targets {
        let messages = converter.convert_file(&file);
        let generated = build_documents(&messages, config);
        tracing::info!(
            file = file.name(),
            documents = generated.len(),
            "generated schemas"
        );
        documents.extend(generated);
    }

    Ok(documents)
}

/// Files of the pool that no other file imports, in pool order.
fn root_files(pool: &DescriptorPool) -> Vec<FileDescriptor> {
    let imported: HashSet<String> = pool
        .files()
        .flat_map(|file| file.dependencies().collect::<Vec<_>>())
        .map(|dependency| dependency.name().to_string())
        .collect();

    pool.files()
        .filter(|file| {
            let root = !imported.contains(file.name());
            if !root {
                tracing::debug!(file = file.name(), "skipping imported file");
            }
            root
        })
        .collect()
}
