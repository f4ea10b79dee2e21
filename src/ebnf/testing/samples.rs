//! Verified sample grammars
//!
//! The samples live in `docs/samples/` at the crate root. Tests load them by file name instead
//! of inlining grammar text, so a change to the notation only needs the samples updated.

use crate::ebnf::ast::Ast;
use crate::ebnf::parsing::{parse_syntax, Error};
use std::fs;
use std::io;
use std::path::PathBuf;

pub struct EbnfSources;

impl EbnfSources {
    /// Directory holding the samples
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("docs")
            .join("samples")
    }

    /// Sorted file names of every `.ebnf` sample
    pub fn list() -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(Self::dir())? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ebnf") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn get_string(name: &str) -> io::Result<String> {
        fs::read_to_string(Self::dir().join(name))
    }

    /// Load and parse a sample
    ///
    /// Panics if the sample can not be read, since that is a broken test setup.
    pub fn parse(name: &str) -> Result<Ast, Error> {
        let source = Self::get_string(name)
            .unwrap_or_else(|err| panic!("Failed to read sample '{}': {}", name, err));
        parse_syntax(&source)
    }
}
