//! cbtoggle - checkbox and carousel annotations for source files
//!
//! A line such as `DEBUG = True # [CB]: True|False` declares the values its
//! assignment may take. cbtoggle finds these annotations, cycles or sets the
//! assigned value, and warns when the value is not one of the candidates.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Annotation parsing, rewriting and validation
//! - `issues`: Issue type definitions and reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
