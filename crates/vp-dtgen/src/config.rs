//! The run configuration record
//!
//! A flat, insertion-ordered mapping from placeholder names to values. It is
//! filled by the deriver, extended during generation, and thrown away once
//! the tree has been written.

use crate::Value;
use indexmap::IndexMap;

/// Width the key column is padded to in [`Config::dump_lines`].
const DUMP_KEY_WIDTH: usize = 40;

/// Configuration record for one generator run.
///
/// Insertion order matters: [`crate::template::apply`] substitutes keys in
/// the order they were first set. Re-setting an existing key replaces its
/// value in place and keeps its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    entries: IndexMap<String, Value>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Set a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Get a value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Get a `Str` value by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Get an `Int` value by name.
    pub fn get_int(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Human-readable dump, one `key : value` line per entry.
    ///
    /// Multi-line values (the `interrupts-extended` lists) are folded onto
    /// their entry's line.
    pub fn dump_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| {
                let text = value.to_string();
                let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
                format!("{:<width$}:     {}", key, text, width = DUMP_KEY_WIDTH)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut config = Config::new();
        config.set("NUM_CORES", 4u32);
        config.set("MMU_TYPE", "riscv,sv39");

        assert_eq!(config.get_int("NUM_CORES"), Some(4));
        assert_eq!(config.get_str("MMU_TYPE"), Some("riscv,sv39"));
        assert_eq!(config.get("MISSING"), None);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut config = Config::new();
        config.set("B", "1");
        config.set("A", "2");
        config.set("C", "3");
        let names: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_reset_keeps_position() {
        let mut config = Config::new();
        config.set("CPUS", "");
        config.set("CPU_NR", 1u32);
        config.set("CPUS", "cpu1");
        let names: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["CPUS", "CPU_NR"]);
        assert_eq!(config.get_str("CPUS"), Some("cpu1"));
    }

    #[test]
    fn test_dump_lines_pads_keys() {
        let mut config = Config::new();
        config.set("RISCV_ISA_BASE", "rv64i");
        let lines = config.dump_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            format!("{}{}:     rv64i", "RISCV_ISA_BASE", " ".repeat(40 - 14))
        );
    }

    #[test]
    fn test_dump_lines_fold_multiline_values() {
        let mut config = Config::new();
        config.set("CLINT_INT_EXT", "\n\t\t\t\t<&cpu0_intc 3>,\n\t\t\t\t<&cpu1_intc 3>");
        let lines = config.dump_lines();
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].contains('\n'));
        assert!(!lines[0].contains('\t'));
        assert!(lines[0].ends_with(":     <&cpu0_intc 3>, <&cpu1_intc 3>"));
    }
}
