use std::fmt;

/// Operating system targeted by a machine or an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Os {
    Windows,
    Linux,
    #[value(skip)]
    Unknown,
}

impl Os {
    /// Map a runtime OS identifier (`std::env::consts::OS` or a Node-style
    /// `win32`) onto a known OS.
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "windows" | "win32" => Os::Windows,
            "linux" => Os::Linux,
            _ => Os::Unknown,
        }
    }

    /// Tag an asset by the OS token in its file name (case-insensitive).
    ///
    /// When both tokens are present, the one occurring first in the name wins.
    pub fn from_filename(name: &str) -> Self {
        let name = name.to_lowercase();
        [(Os::Windows, "windows"), (Os::Linux, "linux")]
            .into_iter()
            .filter_map(|(os, token)| name.find(token).map(|pos| (pos, os)))
            .min_by_key(|(pos, _)| *pos)
            .map_or(Os::Unknown, |(_, os)| os)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::Windows => write!(f, "windows"),
            Os::Linux => write!(f, "linux"),
            Os::Unknown => write!(f, "unknown"),
        }
    }
}

/// CPU architecture targeted by a machine or an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Arch {
    Amd64,
    Arm64,
    #[value(skip)]
    Unknown,
}

impl Arch {
    /// Map a runtime architecture identifier (`std::env::consts::ARCH` or a
    /// Node-style `x64`) onto a known architecture.
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "x86_64" | "x64" | "amd64" => Arch::Amd64,
            "aarch64" | "arm64" => Arch::Arm64,
            _ => Arch::Unknown,
        }
    }

    /// Tag an asset by the architecture token in its file name
    /// (case-insensitive). "amd64" takes precedence over "arm64".
    pub fn from_filename(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("amd64") {
            Arch::Amd64
        } else if name.contains("arm64") {
            Arch::Arm64
        } else {
            Arch::Unknown
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::Amd64 => write!(f, "amd64"),
            Arch::Arm64 => write!(f, "arm64"),
            Arch::Unknown => write!(f, "unknown"),
        }
    }
}

/// Platform information for asset selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Detect the current platform
    pub fn detect() -> Self {
        Self::from_identifiers(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn from_identifiers(os: &str, arch: &str) -> Self {
        Self {
            os: Os::from_identifier(os),
            arch: Arch::from_identifier(arch),
        }
    }

    /// Replace the detected OS and/or architecture with caller-requested ones.
    pub fn with_overrides(self, os: Option<Os>, arch: Option<Arch>) -> Self {
        Self {
            os: os.unwrap_or(self.os),
            arch: arch.unwrap_or(self.arch),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detect() {
        let platform = Platform::detect();

        #[cfg(target_os = "linux")]
        assert_eq!(platform.os, Os::Linux);

        #[cfg(target_os = "windows")]
        assert_eq!(platform.os, Os::Windows);

        #[cfg(target_os = "macos")]
        assert_eq!(platform.os, Os::Unknown);

        #[cfg(target_arch = "x86_64")]
        assert_eq!(platform.arch, Arch::Amd64);

        #[cfg(target_arch = "aarch64")]
        assert_eq!(platform.arch, Arch::Arm64);
    }

    #[test]
    fn test_from_identifiers_node_style() {
        let platform = Platform::from_identifiers("win32", "x64");
        assert_eq!(platform, Platform::new(Os::Windows, Arch::Amd64));

        let platform = Platform::from_identifiers("linux", "arm64");
        assert_eq!(platform, Platform::new(Os::Linux, Arch::Arm64));
    }

    #[test]
    fn test_from_identifiers_unknown() {
        let platform = Platform::from_identifiers("freebsd", "ia32");
        assert_eq!(platform, Platform::new(Os::Unknown, Arch::Unknown));
    }

    #[test]
    fn test_with_overrides() {
        let detected = Platform::new(Os::Linux, Arch::Amd64);

        assert_eq!(detected.with_overrides(None, None), detected);
        assert_eq!(
            detected.with_overrides(Some(Os::Windows), None),
            Platform::new(Os::Windows, Arch::Amd64)
        );
        assert_eq!(
            detected.with_overrides(None, Some(Arch::Arm64)),
            Platform::new(Os::Linux, Arch::Arm64)
        );
    }

    #[test]
    fn test_os_from_filename_case_insensitive() {
        assert_eq!(Os::from_filename("gate_0.40.0_Linux_amd64"), Os::Linux);
        assert_eq!(Os::from_filename("GATE-WINDOWS-ARM64.EXE"), Os::Windows);
        assert_eq!(Os::from_filename("gate_darwin_arm64"), Os::Unknown);
        assert_eq!(Os::from_filename("checksums.txt"), Os::Unknown);
    }

    #[test]
    fn test_os_from_filename_first_occurrence_wins() {
        assert_eq!(Os::from_filename("linux-to-windows-bridge"), Os::Linux);
        assert_eq!(Os::from_filename("windows-subsystem-for-linux"), Os::Windows);
    }

    #[test]
    fn test_arch_from_filename() {
        assert_eq!(Arch::from_filename("app-linux-amd64"), Arch::Amd64);
        assert_eq!(Arch::from_filename("app-linux-ARM64"), Arch::Arm64);
        assert_eq!(Arch::from_filename("app-linux-386"), Arch::Unknown);
        assert_eq!(Arch::from_filename("app-linux-x86_64"), Arch::Unknown);
    }

    #[test]
    fn test_arch_from_filename_amd64_precedence() {
        assert_eq!(Arch::from_filename("app-arm64-amd64-linux"), Arch::Amd64);
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(
            Platform::new(Os::Linux, Arch::Arm64).to_string(),
            "linux/arm64"
        );
        assert_eq!(
            Platform::new(Os::Unknown, Arch::Unknown).to_string(),
            "unknown/unknown"
        );
    }
}
