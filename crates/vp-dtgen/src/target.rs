//! VP target variants

use std::fmt;
use std::str::FromStr;

use crate::error::DtGenError;

/// RISC-V base integer ISA of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsaBase {
    /// 32-bit base (`rv32i`)
    Rv32,
    /// 64-bit base (`rv64i`)
    Rv64,
}

impl IsaBase {
    /// Devicetree spelling of the base (`riscv,isa-base`).
    pub fn as_str(self) -> &'static str {
        match self {
            IsaBase::Rv32 => "rv32i",
            IsaBase::Rv64 => "rv64i",
        }
    }

    /// Supervisor address translation scheme exposed as `mmu-type`.
    pub fn mmu_type(self) -> &'static str {
        match self {
            IsaBase::Rv32 => "riscv,sv32",
            IsaBase::Rv64 => "riscv,sv39",
        }
    }

    /// Size of each memory-mapped RAM block device. RV32 Linux has little
    /// vmalloc space, so the images stay small there.
    pub fn mram_size(self) -> &'static str {
        match self {
            IsaBase::Rv32 => "0x4000000",  // 64MiB
            IsaBase::Rv64 => "0x20000000", // 512MiB
        }
    }

    /// Main memory size used when none is given.
    pub fn default_memory_size(self) -> u64 {
        match self {
            IsaBase::Rv32 => 1 << 30, // 1GiB
            IsaBase::Rv64 => 2 << 30, // 2GiB
        }
    }
}

impl fmt::Display for IsaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported virtual prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 32-bit, single worker core
    QemuVirt32Sc,
    /// 32-bit, four worker cores
    QemuVirt32,
    /// 64-bit, single worker core
    QemuVirt64Sc,
    /// 64-bit, four worker cores
    QemuVirt64,
}

impl Target {
    /// Every accepted target name, in help order.
    pub const NAMES: [&'static str; 4] = [
        "qemu_virt32-sc-vp",
        "qemu_virt32-vp",
        "qemu_virt64-sc-vp",
        "qemu_virt64-vp",
    ];

    /// All targets.
    pub fn all() -> [Target; 4] {
        [
            Target::QemuVirt32Sc,
            Target::QemuVirt32,
            Target::QemuVirt64Sc,
            Target::QemuVirt64,
        ]
    }

    /// Command-line name of the target.
    pub fn name(self) -> &'static str {
        match self {
            Target::QemuVirt32Sc => Self::NAMES[0],
            Target::QemuVirt32 => Self::NAMES[1],
            Target::QemuVirt64Sc => Self::NAMES[2],
            Target::QemuVirt64 => Self::NAMES[3],
        }
    }

    /// Base ISA of the target.
    pub fn isa_base(self) -> IsaBase {
        match self {
            Target::QemuVirt32Sc | Target::QemuVirt32 => IsaBase::Rv32,
            Target::QemuVirt64Sc | Target::QemuVirt64 => IsaBase::Rv64,
        }
    }

    /// Number of worker cores the VP instantiates.
    pub fn num_cores(self) -> u32 {
        match self {
            Target::QemuVirt32Sc | Target::QemuVirt64Sc => 1,
            Target::QemuVirt32 | Target::QemuVirt64 => 4,
        }
    }
}

impl FromStr for Target {
    type Err = DtGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::all()
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| DtGenError::InvalidTarget(s.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for name in Target::NAMES {
            let target: Target = name.parse().unwrap();
            assert_eq!(target.name(), name);
        }
    }

    #[test]
    fn test_parse_invalid() {
        let err = "qemu_virt128-vp".parse::<Target>().unwrap_err();
        assert!(matches!(err, DtGenError::InvalidTarget(ref s) if s == "qemu_virt128-vp"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("QEMU_VIRT64-VP".parse::<Target>().is_err());
    }

    #[test]
    fn test_core_counts() {
        assert_eq!(Target::QemuVirt32Sc.num_cores(), 1);
        assert_eq!(Target::QemuVirt32.num_cores(), 4);
        assert_eq!(Target::QemuVirt64Sc.num_cores(), 1);
        assert_eq!(Target::QemuVirt64.num_cores(), 4);
    }

    #[test]
    fn test_isa_base_properties() {
        assert_eq!(Target::QemuVirt32.isa_base(), IsaBase::Rv32);
        assert_eq!(Target::QemuVirt64Sc.isa_base(), IsaBase::Rv64);
        assert_eq!(IsaBase::Rv32.mmu_type(), "riscv,sv32");
        assert_eq!(IsaBase::Rv64.mmu_type(), "riscv,sv39");
        assert_eq!(IsaBase::Rv32.default_memory_size(), 0x4000_0000);
        assert_eq!(IsaBase::Rv64.default_memory_size(), 0x8000_0000);
        assert_eq!(IsaBase::Rv64.to_string(), "rv64i");
    }
}
