//! Configuration derivation
//!
//! Turns the primary options (target, memory bounds, boot arguments) into the
//! full configuration record the templates are filled from: ISA strings,
//! interrupt wiring, and 32-bit cell splits of the memory bounds.

use tracing::debug;

use crate::error::{DtGenError, Result};
use crate::layout::{interrupts_extended, Layout};
use crate::{Config, Target, Value};

/// Default start of main memory.
pub const DEFAULT_MEMORY_START: u64 = 0x8000_0000;

/// Extensions of the monitor hart (no FPU, no vector unit).
pub const ISA_EXTENSIONS_CPU0: [&str; 7] = ["i", "m", "a", "c", "zicntr", "zicsr", "zifencei"];

/// Extensions of the worker harts.
pub const ISA_EXTENSIONS: [&str; 10] = [
    "i", "m", "a", "f", "d", "c", "v", "zicntr", "zicsr", "zifencei",
];

/// Primary options of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// VP variant to describe
    pub target: Target,
    /// Start address of main memory
    pub memory_start: u64,
    /// Size of main memory; `None` picks the ISA default
    pub memory_size: Option<u64>,
    /// Kernel command line for `/chosen`
    pub bootargs: Option<String>,
}

impl Options {
    /// Options for `target` with every other field defaulted.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            memory_start: DEFAULT_MEMORY_START,
            memory_size: None,
            bootargs: None,
        }
    }

    /// Set the memory start address.
    pub fn with_memory_start(mut self, start: u64) -> Self {
        self.memory_start = start;
        self
    }

    /// Set the memory size.
    pub fn with_memory_size(mut self, size: u64) -> Self {
        self.memory_size = Some(size);
        self
    }

    /// Set the boot arguments.
    pub fn with_bootargs(mut self, bootargs: impl Into<String>) -> Self {
        self.bootargs = Some(bootargs.into());
        self
    }
}

/// Parse an integer literal the way the VP tooling accepts them.
///
/// Decimal, `0x`, `0o` and `0b` forms are accepted (prefix case-insensitive),
/// with optional `_` separators between digits. Decimal literals may not have
/// leading zeros.
///
/// # Example
///
/// ```
/// use vp_dtgen::derive::parse_int;
///
/// assert_eq!(parse_int("0x80000000").unwrap(), 0x8000_0000);
/// assert_eq!(parse_int("1_073_741_824").unwrap(), 1 << 30);
/// assert!(parse_int("010").is_err());
/// ```
pub fn parse_int(s: &str) -> Result<u64> {
    let invalid = || DtGenError::InvalidNumber(s.to_string());
    let text = s.trim();
    let text = text.strip_prefix('+').unwrap_or(text);

    let lower = text.to_ascii_lowercase();
    let (radix, digits, prefixed) = match lower.get(..2) {
        Some("0x") => (16, &text[2..], true),
        Some("0o") => (8, &text[2..], true),
        Some("0b") => (2, &text[2..], true),
        _ => (10, text, false),
    };

    // One separator may follow a radix prefix (`0x_ff`)
    let digits = if prefixed {
        digits.strip_prefix('_').unwrap_or(digits)
    } else {
        digits
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(invalid());
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    let leading_zero = cleaned.len() > 1 && cleaned.starts_with('0');
    if !prefixed && leading_zero && cleaned.chars().any(|c| c != '0') {
        return Err(invalid());
    }

    u64::from_str_radix(&cleaned, radix).map_err(|_| invalid())
}

/// Build the `riscv,isa` string: the base followed by every extension but
/// `i`. Multi-letter extensions are separated by `_`.
///
/// ```
/// use vp_dtgen::derive::riscv_isa;
///
/// assert_eq!(riscv_isa("rv32i", &["i", "m", "zicsr"]), "rv32im_zicsr");
/// ```
pub fn riscv_isa(base: &str, extensions: &[&str]) -> String {
    let mut isa = base.to_string();
    for ext in extensions.iter().filter(|e| **e != "i") {
        if ext.len() > 1 {
            isa.push('_');
        }
        isa.push_str(ext);
    }
    isa
}

/// Build the `riscv,isa-extensions` string list: `"i", "m", ...`.
pub fn riscv_isa_extensions(extensions: &[&str]) -> String {
    extensions
        .iter()
        .map(|e| format!("\"{}\"", e))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split a 64-bit quantity into two 32-bit DTS cells, `0xHI 0xLLLLLLLL`.
///
/// ```
/// use vp_dtgen::derive::split_cells;
///
/// assert_eq!(split_cells(0x8000_0000), "0x0 0x80000000");
/// assert_eq!(split_cells(0x1_0000_0000), "0x1 0x00000000");
/// ```
pub fn split_cells(value: u64) -> String {
    let high = value >> 32;
    let low = value & 0xffff_ffff;
    format!("0x{:X} 0x{:08X}", high, low)
}

/// Derive the configuration record for `options` under `layout`.
///
/// Entries are inserted primary fields first, derived fields after, which is
/// also the order placeholders get substituted in.
pub fn derive(options: &Options, layout: &dyn Layout) -> Config {
    let target = options.target;
    let isa_base = target.isa_base();
    let num_cores = target.num_cores();
    debug!(target = %target, layout = layout.name(), "deriving configuration");

    let mut config = Config::new();
    config.set("TARGET", target.name());
    config.set("LAYOUT", layout.name());

    let bootargs = match &options.bootargs {
        Some(args) => format!("bootargs = \"{}\";", args),
        None => String::new(),
    };
    config.set("BOOTARGS", bootargs);

    let memory_size = options
        .memory_size
        .unwrap_or_else(|| isa_base.default_memory_size());
    config.set("MEM_SIZE", memory_size);
    config.set("MEM_START", options.memory_start);

    config.set("RISCV_ISA_EXTENSIONS_CPU0", Value::list(ISA_EXTENSIONS_CPU0));
    config.set("RISCV_ISA_EXTENSIONS", Value::list(ISA_EXTENSIONS));
    config.set("RISCV_ISA_BASE", isa_base.as_str());
    config.set("NUM_CORES", num_cores);
    config.set("MMU_TYPE", isa_base.mmu_type());
    config.set("MRAM_SIZE", isa_base.mram_size());

    config.set(
        "RISCV_ISA_CPU0_DT",
        riscv_isa(isa_base.as_str(), &ISA_EXTENSIONS_CPU0),
    );
    config.set("RISCV_ISA_DT", riscv_isa(isa_base.as_str(), &ISA_EXTENSIONS));
    config.set(
        "RISCV_ISA_EXTENSIONS_CPU0_DT",
        riscv_isa_extensions(&ISA_EXTENSIONS_CPU0),
    );
    config.set(
        "RISCV_ISA_EXTENSIONS_DT",
        riscv_isa_extensions(&ISA_EXTENSIONS),
    );

    config.set("MEM_START_HEX", format!("{:x}", options.memory_start));
    config.set("MEM_START_DT", split_cells(options.memory_start));
    config.set("MEM_SIZE_DT", split_cells(memory_size));

    let harts = layout.harts(num_cores);
    config.set(
        "PLIC_INT_EXT",
        interrupts_extended(&layout.plic_interrupts(&harts)),
    );
    config.set(
        "CLINT_INT_EXT",
        interrupts_extended(&layout.clint_interrupts(&harts)),
    );

    config
}
