//! Placeholder substitution for device-tree templates
//!
//! Templates are plain DTS text carrying `@NAME@` markers. Expansion walks the
//! configuration in insertion order and replaces every occurrence of each
//! marker with the stringified value:
//!
//! ```text
//! Template + Config → [apply] → DTS text
//!                        ↑
//!                        └─ optional per-line prefix (indent)
//! ```
//!
//! There is no escaping and no recursive expansion. Markers with no matching
//! key are left in the output untouched.

use crate::Config;

/// Build the marker text for a key (`CPU_NR` → `@CPU_NR@`).
pub fn marker(key: &str) -> String {
    format!("@{}@", key)
}

/// Substitute every configured key into `template`, then prefix each line of
/// the result with `line_prefix`.
///
/// Keys are replaced one full pass at a time, in the order they were inserted
/// into `config`. Line terminators are preserved, and empty lines receive the
/// prefix as well.
///
/// # Example
///
/// ```
/// use vp_dtgen::{template, Config};
///
/// let mut config = Config::new();
/// config.set("CPU_NR", 2u32);
///
/// let out = template::apply("cpu@CPU_NR@: cpu@@CPU_NR@ {\n};", &config, "\t");
/// assert_eq!(out, "\tcpu2: cpu@2 {\n\t};");
/// ```
pub fn apply(template: &str, config: &Config, line_prefix: &str) -> String {
    let mut out = template.to_string();
    for (key, value) in config.iter() {
        let marker = marker(key);
        if out.contains(&marker) {
            out = out.replace(&marker, &value.to_string());
        }
    }
    prefix_lines(&out, line_prefix)
}

/// Prefix every line of `text` with `prefix`, keeping line terminators.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return text.to_string();
    }
    if text.is_empty() {
        return prefix.to_string();
    }

    let mut out = String::with_capacity(text.len() + prefix.len() * (text.lines().count() + 1));
    for line in text.split_inclusive('\n') {
        out.push_str(prefix);
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marker() {
        assert_eq!(marker("MMU_TYPE"), "@MMU_TYPE@");
    }

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let mut config = Config::new();
        config.set("MRAM_SIZE", "0x4000000");
        let out = apply("<@MRAM_SIZE@> <@MRAM_SIZE@>", &config, "");
        assert_eq!(out, "<0x4000000> <0x4000000>");
    }

    #[test]
    fn test_apply_leaves_unknown_markers() {
        let config = Config::new();
        assert_eq!(apply("reg = <@NOPE@>;", &config, ""), "reg = <@NOPE@>;");
    }

    #[test]
    fn test_apply_does_not_confuse_key_prefixes() {
        let mut config = Config::new();
        config.set("MEM_START", 2147483648u64);
        config.set("MEM_START_HEX", "80000000");
        let out = apply("memory@@MEM_START_HEX@ /* @MEM_START@ */", &config, "");
        assert_eq!(out, "memory@80000000 /* 2147483648 */");
    }

    #[test]
    fn test_apply_is_not_recursive() {
        let mut config = Config::new();
        config.set("A", "@B@");
        config.set("B", "b");
        // A is applied first, its output is then subject to B's pass
        assert_eq!(apply("@A@", &config, ""), "b");

        let mut config = Config::new();
        config.set("B", "b");
        config.set("A", "@B@");
        assert_eq!(apply("@A@", &config, ""), "@B@");
    }

    #[test]
    fn test_apply_list_value() {
        let mut config = Config::new();
        config.set("EXT", Value::list(["i", "m"]));
        assert_eq!(apply("@EXT@", &config, ""), "['i', 'm']");
    }

    #[test]
    fn test_prefix_lines_keeps_terminators() {
        assert_eq!(prefix_lines("a\nb\n", "\t\t"), "\t\ta\n\t\tb\n");
        assert_eq!(prefix_lines("a\nb", "\t"), "\ta\n\tb");
    }

    #[test]
    fn test_prefix_lines_empty_lines_are_prefixed() {
        assert_eq!(prefix_lines("a\n\nb", ">"), ">a\n>\n>b");
    }

    #[test]
    fn test_prefix_lines_empty_text() {
        assert_eq!(prefix_lines("", "\t"), "\t");
        assert_eq!(prefix_lines("", ""), "");
    }
}
