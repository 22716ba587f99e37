//! Layout derived from a QEMU `virt` machine export
//!
//! All harts are equal and numbered from 0; there is no monitor core.

use crate::layout::Layout;

const BASE: &str = include_str!("../../templates/qemu.dts.in");
const CPU: &str = include_str!("../../templates/qemu-cpu.dts.in");
const CPU_MAP: &str = include_str!("../../templates/cpu-map.dts.in");

/// QEMU `virt` layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct QemuLayout;

impl Layout for QemuLayout {
    fn name(&self) -> &'static str {
        "qemu"
    }

    fn base_template(&self) -> &'static str {
        BASE
    }

    fn cpu_template(&self) -> &'static str {
        CPU.trim_end_matches('\n')
    }

    fn cpu_map_template(&self) -> &'static str {
        CPU_MAP.trim_end_matches('\n')
    }

    fn harts(&self, num_cores: u32) -> Vec<u32> {
        (0..num_cores).collect()
    }

    fn plic_interrupts(&self, harts: &[u32]) -> Vec<String> {
        // M-mode (11) and S-mode (9) external interrupt contexts
        harts
            .iter()
            .map(|n| format!("<&cpu{n}_intc 11>, <&cpu{n}_intc 9>"))
            .collect()
    }
}
