use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions};
use oxc::minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::{Backend, BackendError, BackendOutput};
use crate::options::JsOptions;

/// JavaScript back-end built on the oxc parser, minifier and code generator
#[derive(Debug, Default, Clone, Copy)]
pub struct OxcBackend;

impl OxcBackend {
    fn minifier_options(options: &JsOptions) -> MinifierOptions {
        let mangle = options.rename_identifiers.then(|| MangleOptions {
            top_level: options.rename_globals,
            ..MangleOptions::default()
        });

        let compress = options.simplify.then(|| CompressOptions {
            drop_console: options.disable_console_output,
            ..CompressOptions::default()
        });

        MinifierOptions { mangle, compress }
    }
}

impl Backend<JsOptions> for OxcBackend {
    fn name(&self) -> &'static str {
        "oxc"
    }

    fn transform(&self, code: &str, options: &JsOptions) -> Result<BackendOutput, BackendError> {
        let allocator = Allocator::default();
        let source_type = if options.module {
            SourceType::mjs()
        } else {
            SourceType::cjs()
        };

        let parsed = Parser::new(&allocator, code, source_type).parse();
        if parsed.panicked || !parsed.errors.is_empty() {
            let message = parsed
                .errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BackendError::new(if message.is_empty() {
                "parser aborted".to_string()
            } else {
                message
            }));
        }

        let mut program = parsed.program;
        let minified = Minifier::new(Self::minifier_options(options)).minify(&allocator, &mut program);

        let output = Codegen::new()
            .with_options(CodegenOptions {
                minify: options.compact,
                ..CodegenOptions::default()
            })
            .with_scoping(minified.scoping)
            .build(&program);

        Ok(output.code.into())
    }
}
