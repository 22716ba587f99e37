//! Device-tree layout trait
//!
//! A layout is one flavor of device tree for the same virtual platform. It
//! owns the static templates and knows how harts are numbered and wired to
//! the interrupt controllers:
//!
//! ```text
//! Options → [derive] → Config → [generate + Layout] → DTS text
//! ```
//!
//! Layouts are responsible for:
//! - The base template and the per-hart CPU / cpu-map sub-templates
//! - Hart numbering
//! - CLINT and PLIC `interrupts-extended` entries
//!
//! The deriver and generator are responsible for everything else.

use clap::ValueEnum;
use std::fmt;

use crate::layouts::{LegacyLayout, QemuLayout};

/// Indentation of `interrupts-extended` entries inside the `soc` node.
pub const INT_EXT_INDENT: &str = "\t\t\t\t";

/// One device-tree flavor.
pub trait Layout {
    /// Short identifier, as accepted by `--flavor`.
    fn name(&self) -> &'static str;

    /// The full tree, with `@CPUS@` and `@CPU_MAP@` holes for the harts.
    fn base_template(&self) -> &'static str;

    /// Sub-template expanded once per hart into `@CPUS@`.
    fn cpu_template(&self) -> &'static str;

    /// Sub-template expanded once per hart into `@CPU_MAP@`.
    fn cpu_map_template(&self) -> &'static str;

    /// Hart numbers for the `num_cores` expanded CPU nodes.
    fn harts(&self, num_cores: u32) -> Vec<u32>;

    /// CLINT `interrupts-extended` entries, one line each.
    ///
    /// Every hart gets its machine software (3) and machine timer (7)
    /// interrupts.
    fn clint_interrupts(&self, harts: &[u32]) -> Vec<String> {
        harts
            .iter()
            .map(|n| format!("<&cpu{n}_intc 3>, <&cpu{n}_intc 7>"))
            .collect()
    }

    /// PLIC `interrupts-extended` entries, one line each.
    fn plic_interrupts(&self, harts: &[u32]) -> Vec<String>;

    /// Number of CPU nodes in the output for `num_cores` worker cores.
    fn cpu_node_count(&self, num_cores: u32) -> usize {
        self.harts(num_cores).len()
    }
}

/// Format `interrupts-extended` entries as a DTS property value.
///
/// Each entry starts on its own line at [`INT_EXT_INDENT`].
pub fn interrupts_extended(entries: &[String]) -> String {
    entries
        .iter()
        .map(|e| format!("\n{}{}", INT_EXT_INDENT, e))
        .collect::<Vec<_>>()
        .join(",")
}

/// Selectable device-tree flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Flavor {
    /// FU540-style tree with a monitor hart and SiFive peripherals
    #[default]
    Legacy,
    /// Tree derived from a QEMU `virt` machine export
    Qemu,
}

static LEGACY: LegacyLayout = LegacyLayout;
static QEMU: QemuLayout = QemuLayout;

impl Flavor {
    /// The layout implementing this flavor.
    pub fn layout(self) -> &'static dyn Layout {
        match self {
            Flavor::Legacy => &LEGACY,
            Flavor::Qemu => &QEMU,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layout().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupts_extended_format() {
        let entries = vec!["<&cpu0_intc 3>".to_string(), "<&cpu1_intc 3>".to_string()];
        assert_eq!(
            interrupts_extended(&entries),
            "\n\t\t\t\t<&cpu0_intc 3>,\n\t\t\t\t<&cpu1_intc 3>"
        );
    }

    #[test]
    fn test_interrupts_extended_empty() {
        assert_eq!(interrupts_extended(&[]), "");
    }

    #[test]
    fn test_flavor_names() {
        assert_eq!(Flavor::Legacy.to_string(), "legacy");
        assert_eq!(Flavor::Qemu.to_string(), "qemu");
        assert_eq!(Flavor::default(), Flavor::Legacy);
    }

    #[test]
    fn test_flavor_value_enum_matches_layout_name() {
        for flavor in Flavor::value_variants() {
            let pv = flavor.to_possible_value().unwrap();
            assert_eq!(pv.get_name(), flavor.layout().name());
        }
    }
}
