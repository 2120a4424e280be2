use serde_derive::{Deserialize, Serialize};

/// Where the revision token is read from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Device tree on 64-bit ARM, cpuinfo everywhere else.
    #[default]
    Auto,
    DeviceTree,
    #[serde(rename = "cpuinfo")]
    CpuInfo,
}

impl SourceKind {
    /// Resolves `Auto` against the architecture this binary was built for.
    pub fn resolve(self) -> SourceKind {
        match self {
            SourceKind::Auto if cfg!(target_arch = "aarch64") => SourceKind::DeviceTree,
            SourceKind::Auto => SourceKind::CpuInfo,
            other => other,
        }
    }
}
