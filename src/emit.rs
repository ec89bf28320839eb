//! Emits the generated Rust source text for one opcode table.
//!
//! The emitter walks opcode values 0 through 255 in ascending order and turns
//! each entry into one match arm. Ordering is part of the contract: the
//! generated table must be deterministic and readable, and its consumer
//! dispatches by exact numeric match.

use super::format::opcode_template;
use super::opcodes::{opcode_key, Opcode};
use super::*;

/// Generate the complete formatting function for one 256-entry opcode table.
/// The text is assembled in memory and only returned whole, so a missing key
/// aborts with no partial output.
pub fn emit_table(table: &HashMap<String, Opcode>, fn_name: &str) -> Result<String, Error> {
    let mut out = String::new();
    out.push_str(format!("fn {}(opcode: u8, arg1: u8, arg2: u8) -> String {{\n", fn_name).as_str());
    out.push_str("    match opcode {\n");
    for op in 0..=0xffu8 {
        // no wildcard arm is generated; 256 arms over a u8 are exhaustive
        out.push_str(format!("        {} => format!(\"{}\"),\n", op, lookup(table, op)?).as_str());
    }
    out.push_str("    }\n");
    out.push_str("}\n");
    Ok(out)
}

/// Render the format template of a single opcode without the surrounding
/// function scaffold.
pub fn probe(table: &HashMap<String, Opcode>, op: u8) -> Result<String, Error> { lookup(table, op) }

fn lookup(table: &HashMap<String, Opcode>, op: u8) -> Result<String, Error> {
    let key = opcode_key(op);
    let entry = table
        .get(&key)
        .ok_or_else(|| table_err!(key, "no entry for opcode {}", key))?;
    Ok(opcode_template(entry))
}
