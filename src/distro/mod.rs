//! Linux distribution detection.
//!
//! - [`Distro`] - the supported distribution identifiers
//! - [`os_release`] - pure parsing of os-release file content
//! - [`detect`] - filesystem detection ladder

pub mod detect;
pub mod os_release;

pub use detect::{detect_distro, detect_distro_at};
pub use os_release::OsRelease;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::pm::PackageManager;

/// Supported Linux distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    Ubuntu,
    Debian,
    Raspbian,
    Fedora,
    CentOs,
    Rhel,
    Arch,
    Manjaro,
    OpenSuse,
}

impl Distro {
    /// All supported distros, in the order shown to users.
    pub const ALL: [Distro; 9] = [
        Distro::Ubuntu,
        Distro::Debian,
        Distro::Raspbian,
        Distro::Fedora,
        Distro::CentOs,
        Distro::Rhel,
        Distro::Arch,
        Distro::Manjaro,
        Distro::OpenSuse,
    ];

    /// Map an os-release `ID` (or `ID_LIKE` token) to a distro.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "ubuntu" => Some(Self::Ubuntu),
            "debian" => Some(Self::Debian),
            "raspbian" => Some(Self::Raspbian),
            "fedora" => Some(Self::Fedora),
            "centos" => Some(Self::CentOs),
            "rhel" | "redhat" => Some(Self::Rhel),
            "arch" | "archlinux" => Some(Self::Arch),
            "manjaro" => Some(Self::Manjaro),
            "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" | "suse" | "sles" => {
                Some(Self::OpenSuse)
            }
            _ => None,
        }
    }

    /// The canonical identifier, matching os-release `ID` values.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Ubuntu => "ubuntu",
            Self::Debian => "debian",
            Self::Raspbian => "raspbian",
            Self::Fedora => "fedora",
            Self::CentOs => "centos",
            Self::Rhel => "rhel",
            Self::Arch => "arch",
            Self::Manjaro => "manjaro",
            Self::OpenSuse => "opensuse",
        }
    }

    /// The package manager this distro uses.
    ///
    /// CentOS and RHEL report dnf here; the installer falls back to yum
    /// when only yum is on PATH.
    pub fn package_manager(&self) -> PackageManager {
        match self {
            Self::Ubuntu | Self::Debian | Self::Raspbian => PackageManager::AptGet,
            Self::Fedora | Self::CentOs | Self::Rhel => PackageManager::Dnf,
            Self::Arch | Self::Manjaro => PackageManager::Pacman,
            Self::OpenSuse => PackageManager::Zypper,
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Distro {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|d| d.id()).collect();
            format!("unknown distro '{}' (supported: {})", s, known.join(", "))
        })
    }
}
