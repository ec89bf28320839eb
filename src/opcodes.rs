//! In-memory model of the SM83 opcode tables and its loader.
//!
//! The input document is the community-maintained opcodes JSON: two maps
//! (`unprefixed` and `cbprefixed`) from a two-hex-digit key ("0x00".."0xFF")
//! to one opcode record each. Schema validation is done by serde during
//! deserialization; structural validation (every one of the 256 keys present
//! in both tables, keys well formed) is done here, at load time, so that the
//! emitter can rely on a complete table.

use super::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One operand of an instruction as listed in the opcode table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Operand {
    /// register, condition code or immediate-literal kind (e.g. "A", "NZ", "d8")
    pub name: String,
    /// true = the named register/condition is used by value;
    /// false = a register pair holding the address of the actual operand
    pub immediate: bool,
    /// number of instruction bytes consumed by this operand (immediates only)
    pub bytes: Option<u32>,
}

/// Full metadata record for one opcode. Formatting only consumes `mnemonic`
/// and `operands`; the remaining fields ride along so the model covers the
/// whole document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Opcode {
    pub mnemonic: String,
    pub bytes: u32,
    pub cycles: Vec<u32>,
    pub operands: Vec<Operand>,
    pub immediate: bool,
    pub flags: HashMap<String, String>,
}

/// The primary opcode table plus the table reached via the 0xCB prefix byte.
#[derive(Debug, Deserialize, Serialize)]
pub struct OpcodeSet {
    pub unprefixed: HashMap<String, Opcode>,
    pub cbprefixed: HashMap<String, Opcode>,
}

/// Format an opcode value the way the document keys its entries (e.g. 0x0A).
pub fn opcode_key(op: u8) -> String { format!("{:#04X}", op) }

impl OpcodeSet {
    pub fn from_str<S: AsRef<str>>(s: S) -> Result<Self, Error> {
        let set: OpcodeSet = serde_json::from_str(s.as_ref()).map_err(|e| schema_err!(e))?;
        set.validate()?;
        Ok(set)
    }
    pub fn read_from_file(path: &Path) -> Result<Self, Error> {
        OpcodeSet::from_str(fs::read_to_string(path)?)
    }
    /// Every key 0x00-0xFF must exist in both tables and no key may have any
    /// other shape. A gap means the document is structurally incomplete.
    pub fn validate(&self) -> Result<(), Error> {
        let re = Regex::new(r"^0x[0-9A-F]{2}$").map_err(|_| general_err!("failed to build key pattern"))?;
        for (name, table) in [("unprefixed", &self.unprefixed), ("cbprefixed", &self.cbprefixed)] {
            if let Some(key) = table.keys().find(|k| !re.is_match(k.as_str())) {
                return Err(table_err!(key, "malformed opcode key in {} table", name));
            }
            for op in 0..=0xff {
                let key = opcode_key(op);
                if !table.contains_key(&key) {
                    return Err(table_err!(key, "{} table has no entry for opcode {}", name, key));
                }
            }
        }
        Ok(())
    }
}
