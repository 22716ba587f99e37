//! Device-tree layouts
//!
//! This module contains the implementations of the `Layout` trait, one per
//! supported flavor.

pub mod legacy;
pub mod qemu;

pub use legacy::LegacyLayout;
pub use qemu::QemuLayout;
