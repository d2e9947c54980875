//! Package-manager command tables.
//!
//! Each supported package manager knows how to build its cache-refresh and
//! install command lines. Command building is pure; availability probing is
//! the only part that touches the system, and it is injectable where it
//! matters (see [`crate::installer`]).

use std::fmt;

use serde::Serialize;

use crate::shell::execute_check;

/// Supported system package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageManager {
    AptGet,
    Dnf,
    Yum,
    Pacman,
    Zypper,
}

impl PackageManager {
    /// The executable name on PATH.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::AptGet => "apt-get",
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::Pacman => "pacman",
            Self::Zypper => "zypper",
        }
    }

    /// Command line that refreshes the package cache.
    pub fn refresh_command(&self) -> String {
        match self {
            Self::AptGet => "apt-get update".to_string(),
            Self::Dnf => "dnf makecache".to_string(),
            Self::Yum => "yum makecache".to_string(),
            Self::Pacman => "pacman -Sy".to_string(),
            Self::Zypper => "zypper refresh".to_string(),
        }
    }

    /// Command line that installs `packages`.
    ///
    /// With `assume_yes` the manager's own confirmation prompts are
    /// suppressed; apt-get additionally gets a non-interactive frontend so
    /// maintainer scripts cannot block on a TTY.
    pub fn install_command(&self, packages: &[&str], assume_yes: bool) -> String {
        let pkgs = packages.join(" ");
        match (self, assume_yes) {
            (Self::AptGet, true) => {
                format!("DEBIAN_FRONTEND=noninteractive apt-get install -y {}", pkgs)
            }
            (Self::AptGet, false) => format!("apt-get install {}", pkgs),
            (Self::Dnf, true) => format!("dnf install -y {}", pkgs),
            (Self::Dnf, false) => format!("dnf install {}", pkgs),
            (Self::Yum, true) => format!("yum install -y {}", pkgs),
            (Self::Yum, false) => format!("yum install {}", pkgs),
            (Self::Pacman, true) => format!("pacman -S --needed --noconfirm {}", pkgs),
            (Self::Pacman, false) => format!("pacman -S --needed {}", pkgs),
            (Self::Zypper, true) => format!("zypper --non-interactive install {}", pkgs),
            (Self::Zypper, false) => format!("zypper install {}", pkgs),
        }
    }

    /// Check whether this manager is installed.
    pub fn is_available(&self) -> bool {
        execute_check(&format!("{} --version", self.binary()), None)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}
