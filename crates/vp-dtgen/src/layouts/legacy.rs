//! FU540-style layout
//!
//! Hart 0 is an E51 monitor core that is always present in the base template
//! (and disabled). The requested worker cores are U54 harts numbered from 1.

use crate::layout::Layout;

const BASE: &str = include_str!("../../templates/legacy.dts.in");
const CPU: &str = include_str!("../../templates/legacy-cpu.dts.in");
const CPU_MAP: &str = include_str!("../../templates/cpu-map.dts.in");

/// Legacy FU540-style layout.
///
/// # Example
///
/// ```
/// use vp_dtgen::layouts::LegacyLayout;
/// use vp_dtgen::Layout;
///
/// let layout = LegacyLayout;
/// assert_eq!(layout.harts(4), vec![1, 2, 3, 4]);
/// assert_eq!(layout.cpu_node_count(4), 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyLayout;

impl Layout for LegacyLayout {
    fn name(&self) -> &'static str {
        "legacy"
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
        (1..=num_cores).collect()
    }

    fn clint_interrupts(&self, harts: &[u32]) -> Vec<String> {
        std::iter::once(0)
            .chain(harts.iter().copied())
            .map(|n| format!("<&cpu{n}_intc 3>, <&cpu{n}_intc 7>"))
            .collect()
    }

    fn plic_interrupts(&self, harts: &[u32]) -> Vec<String> {
        // The monitor hart has no supervisor mode, so it only gets the
        // machine external context (masked).
        std::iter::once("<&cpu0_intc 0xffffffff>".to_string())
            .chain(
                harts
                    .iter()
                    .map(|n| format!("<&cpu{n}_intc 0xffffffff>, <&cpu{n}_intc 9>")),
            )
            .collect()
    }

    fn cpu_node_count(&self, num_cores: u32) -> usize {
        self.harts(num_cores).len() + 1
    }
}
