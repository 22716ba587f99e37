//! # vp-dtgen
//!
//! Device-tree source generator for the RISC-V `qemu_virt` virtual
//! prototypes.
//!
//! The generator fills a static DTS template for the selected platform
//! layout. A handful of options parameterize the result: target variant,
//! memory bounds, and boot arguments.
//!
//! ## Architecture
//!
//! - **Derive**: options → flat, ordered configuration record
//! - **Generate**: per-hart sub-templates expanded into the record
//! - **Template**: `@KEY@` substitution over the base template
//! - **Layout**: one trait implementation per device-tree flavor
//!
//! ## Example
//!
//! ```
//! use vp_dtgen::{render, Flavor, Options, Target};
//!
//! let options = Options::new(Target::QemuVirt64).with_bootargs("console=ttySIF0");
//! let (dts, _config) = render(&options, Flavor::Legacy.layout());
//!
//! assert!(dts.contains("bootargs = \"console=ttySIF0\";"));
//! assert!(dts.contains("reg = <0x0 0x80000000 0x0 0x80000000>;"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod derive;
pub mod error;
pub mod generate;
pub mod layout;
pub mod layouts;
pub mod target;
pub mod template;
pub mod value;

// Re-export main types
pub use config::Config;
pub use derive::{derive, Options};
pub use error::{DtGenError, Result};
pub use generate::{generate, render};
pub use layout::{Flavor, Layout};
pub use target::{IsaBase, Target};
pub use value::Value;

/// vp-dtgen version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
