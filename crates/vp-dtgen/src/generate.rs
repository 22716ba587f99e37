//! Device-tree text generation
//!
//! Expands the per-hart sub-templates into the `CPUS` and `CPU_MAP` entries,
//! then fills the layout's base template from the finished configuration.

use tracing::debug;

use crate::derive::{derive, Options};
use crate::layout::Layout;
use crate::{template, Config};

/// Indent of CPU nodes inside `cpus { }`.
const CPU_INDENT: &str = "\t\t";

/// Indent of core nodes inside `cpus { cpu-map { cluster0 { } } }`.
const CPU_MAP_INDENT: &str = "\t\t\t\t";

/// Expand the per-hart blocks into `config` and render the full tree.
///
/// `config` must come from [`derive`] for the same layout. On return it also
/// holds the `CPUS`, `CPU_MAP` and `CPU_NR` entries.
pub fn generate(config: &mut Config, layout: &dyn Layout) -> String {
    let num_cores = config.get_int("NUM_CORES").unwrap_or(0) as u32;

    config.set("CPUS", "");
    config.set("CPU_MAP", "");

    let mut cpus = String::new();
    let mut cpu_map = String::new();
    for hart in layout.harts(num_cores) {
        debug!(hart, "expanding cpu node");
        config.set("CPU_NR", hart);

        cpus.push_str(&template::apply(layout.cpu_template(), config, CPU_INDENT));
        cpus.push('\n');
        cpu_map.push_str(&template::apply(
            layout.cpu_map_template(),
            config,
            CPU_MAP_INDENT,
        ));
        cpu_map.push('\n');
    }

    config.set("CPUS", cpus);
    config.set("CPU_MAP", cpu_map);

    template::apply(layout.base_template(), config, "")
}

/// Derive the configuration for `options` and render the tree in one step.
///
/// Returns the final configuration alongside the text, for dumping.
///
/// # Example
///
/// ```
/// use vp_dtgen::{render, Flavor, Options, Target};
///
/// let (dts, _config) = render(&Options::new(Target::QemuVirt64Sc), Flavor::Qemu.layout());
/// assert!(dts.contains("timebase-frequency = <1000000>;"));
/// assert!(dts.contains("cpu0: cpu@0"));
/// ```
pub fn render(options: &Options, layout: &dyn Layout) -> (String, Config) {
    let mut config = derive(options, layout);
    let dts = generate(&mut config, layout);
    (dts, config)
}
