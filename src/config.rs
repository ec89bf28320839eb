use clap::Parser;
use clap_num::maybe_hex;
use lazy_static::lazy_static;

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    /// Opcode table (.json) file to generate format strings from
    pub file: String,

    /// Also emit the CB-prefixed table (with --probe: probe the CB-prefixed table)
    #[arg(long)]
    pub cb: bool,

    /// Write the generated code to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the format template of a single opcode instead of generating code (hex ok with '0x')
    #[arg(long,value_parser=maybe_hex::<u8>)]
    pub probe: Option<u8>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test", "opcodes.json"])
    } else {
        Args::parse()
    };
}

pub fn init() {}
pub fn emit_cb() -> bool { ARGS.cb }
