//! Main module for ebnf library functionality

pub mod ast;
pub mod config;
pub mod equivalence;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
