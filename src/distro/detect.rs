//! Distribution detection ladder.
//!
//! Reads os-release files relative to a root directory so tests can point
//! detection at a temp tree instead of the live system.

use std::fs;
use std::path::Path;

use crate::error::{MoosupError, Result};

use super::os_release::OsRelease;
use super::Distro;

/// os-release locations, in precedence order per os-release(5).
const OS_RELEASE_PATHS: [&str; 2] = ["etc/os-release", "usr/lib/os-release"];

/// Legacy release files checked when no os-release file exists.
const LEGACY_RELEASE_FILES: [(&str, Distro); 3] = [
    ("etc/redhat-release", Distro::Rhel),
    ("etc/arch-release", Distro::Arch),
    ("etc/debian_version", Distro::Debian),
];

/// Detect the distro of the live system.
pub fn detect_distro() -> Result<Distro> {
    detect_distro_at(Path::new("/"))
}

/// Detect the distro rooted at `root`.
///
/// Tries `etc/os-release`, then `usr/lib/os-release`, then the legacy
/// release files. An os-release file whose `ID` is unknown falls back to
/// its `ID_LIKE` tokens before failing.
pub fn detect_distro_at(root: &Path) -> Result<Distro> {
    for rel in OS_RELEASE_PATHS {
        let path = root.join(rel);
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        tracing::debug!("Reading {}", path.display());

        let release = OsRelease::parse(&content);
        for candidate in release.id_candidates() {
            if let Some(distro) = Distro::from_id(candidate) {
                tracing::debug!("Matched '{}' as {}", candidate, distro);
                return Ok(distro);
            }
        }

        // An os-release file exists but names nothing we support.
        return Err(MoosupError::UnsupportedDistro {
            id: release.id.unwrap_or_else(|| "unknown".to_string()),
        });
    }

    for (rel, distro) in LEGACY_RELEASE_FILES {
        if root.join(rel).exists() {
            tracing::debug!("Matched legacy release file {}", rel);
            return Ok(distro);
        }
    }

    Err(MoosupError::DistroNotDetected)
}
