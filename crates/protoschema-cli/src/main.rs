//! protoc-gen-jsonschema - JSON Schema generator for protobuf messages
//!
//! Modes:
//! - no subcommand - protoc plugin: `CodeGeneratorRequest` on stdin,
//!   `CodeGeneratorResponse` on stdout
//! - `protoc-gen-jsonschema generate` - generate from a serialized
//!   `FileDescriptorSet` into a directory

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use prost::Message;
use protoschema_cli::{decode_descriptor_set, generate, handle_request, write_documents};
use protoschema_core::{EnumRepresentation, GeneratorConfig, LogLevel, Naming};
use protoschema_logging::{DiagnosticCollector, init_logging};

#[derive(Parser)]
#[command(name = "protoc-gen-jsonschema")]
#[command(author, version, about = "Generate JSON Schema documents from protobuf messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate schemas from a serialized FileDescriptorSet
    Generate {
        /// Descriptor set written by `protoc --include_source_info --descriptor_set_out`
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Output directory for the generated documents
        #[arg(short, long)]
        output: PathBuf,

        /// Proto file to generate (repeatable; default: every file no other file imports)
        #[arg(short, long = "file")]
        files: Vec<String>,

        /// JSON configuration file; flags below override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prefix for each document's $id
        #[arg(long)]
        base_url: Option<String>,

        /// JSON Schema dialect URL written as $schema
        #[arg(long)]
        schema_version: Option<String>,

        /// Naming convention (proto, json)
        #[arg(long)]
        naming: Option<Naming>,

        /// Enum representation (integer, string)
        #[arg(long)]
        enum_type: Option<EnumRepresentation>,

        /// Log level (trace, debug, info, warn, error, off)
        #[arg(long, default_value = "warn")]
        log_level: LogLevel,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            init_logging(LogLevel::Warn);
            run_plugin()?;
        }
        Some(Commands::Generate {
            descriptor_set,
            output,
            files,
            config,
            base_url,
            schema_version,
            naming,
            enum_type,
            log_level,
        }) => {
            init_logging(log_level);

            let mut generator_config = match config {
                Some(path) => {
                    let bytes = std::fs::read(&path)
                        .with_context(|| format!("reading config {}", path.display()))?;
                    GeneratorConfig::from_json(&bytes)
                        .with_context(|| format!("parsing config {}", path.display()))?
                }
                None => GeneratorConfig::default(),
            };
            if let Some(base_url) = base_url {
                generator_config.base_url = base_url;
            }
            if let Some(version) = schema_version {
                generator_config.version = version;
            }
            if let Some(naming) = naming {
                generator_config.naming = naming;
            }
            if let Some(enum_type) = enum_type {
                generator_config.enum_type = enum_type;
            }

            run_generate(&descriptor_set, &output, &files, &generator_config)?;
        }
    }

    let diagnostics = DiagnosticCollector::global().count();
    if diagnostics > 0 {
        eprintln!("protoc-gen-jsonschema: {diagnostics} warning(s) while generating");
    }

    Ok(())
}

fn run_plugin() -> anyhow::Result<()> {
    let mut request = Vec::new();
    std::io::stdin()
        .read_to_end(&mut request)
        .context("reading CodeGeneratorRequest from stdin")?;

    let response = handle_request(&request);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&response.encode_to_vec())
        .context("writing CodeGeneratorResponse to stdout")?;
    stdout.flush()?;
    Ok(())
}

fn run_generate(
    descriptor_set: &std::path::Path,
    output: &std::path::Path,
    files: &[String],
    config: &GeneratorConfig,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(descriptor_set)
        .with_context(|| format!("reading descriptor set {}", descriptor_set.display()))?;
    let pool = decode_descriptor_set(&bytes)
        .with_context(|| format!("decoding descriptor set {}", descriptor_set.display()))?;

    let documents = generate(&pool, files, config)?;
    let written = write_documents(output, &documents)
        .with_context(|| format!("writing schemas to {}", output.display()))?;

    println!("Generated {} schema(s) in {}", written.len(), output.display());
    Ok(())
}
