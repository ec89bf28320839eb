//! # An SM83 (Game Boy) disassembly format-string generator written in Rust.
//!
//! Reads the community opcode-table JSON and generates a Rust function that
//! maps each opcode byte, plus the two instruction bytes that follow it, to a
//! human-readable disassembly line.
//!
//! ## Getting Started
//! To generate the formatting function from an opcode table:
//! ```
//! cargo run -- /path/to/opcodes.json
//! ```
//! ...or if you've already built the binary then just...
//! ```
//! fmtgen /path/to/opcodes.json
//! ```
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod config;
mod emit;
mod error;
mod format;
mod opcodes;
use opcodes::OpcodeSet;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::result::Result;
pub(crate) use crate::error::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init();
    // process_file does all the work
    if let Err(e) = process_file(config::ARGS.file.as_str()) {
        println!("{}", e);
        return Err(Box::new(e));
    }
    Ok(())
}
/// process_file drives the top level functionality (load, generate, write) of the app
fn process_file(filename: &str) -> Result<(), Error> {
    let path = Path::new(filename);
    if !path.exists() {
        // reported to the user but not treated as a failure; nothing is generated
        warn!("{} does not exist", filename);
        return Ok(());
    }
    let set = OpcodeSet::read_from_file(path)?;
    verbose_println!("Loaded and validated opcode tables from {}", filename);
    if let Some(op) = config::ARGS.probe {
        // inspect a single opcode instead of generating the whole function
        let table = if config::emit_cb() { &set.cbprefixed } else { &set.unprefixed };
        println!("{}", emit::probe(table, op)?);
        return Ok(());
    }
    let mut out = emit::emit_table(&set.unprefixed, "format_opcode")?;
    if config::emit_cb() {
        out.push('\n');
        out.push_str(emit::emit_table(&set.cbprefixed, "format_opcode_cb")?.as_str());
    }
    match config::ARGS.output.as_deref() {
        Some(outfile) => {
            fs::write(outfile, out.as_bytes())?;
            info!("Wrote generated code to {}", outfile);
        }
        None => print!("{}", out),
    }
    Ok(())
}
