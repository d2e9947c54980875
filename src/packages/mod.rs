//! Package catalog.
//!
//! Static tables mapping each distro family to the MOOS-IvP build
//! dependencies, split into three categories. Lookups are pure functions so
//! the catalog is directly unit-testable.

use serde::Serialize;

use crate::distro::Distro;

/// A category of packages installed as one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Compiler toolchain and build system.
    Core,
    /// Libraries and tools the MOOS middleware itself needs.
    Moos,
    /// FLTK/OpenGL libraries for the IvP GUI applications.
    Gui,
}

impl Category {
    /// All categories in install order.
    pub const ALL: [Category; 3] = [Category::Core, Category::Moos, Category::Gui];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Core => "core build tools",
            Self::Moos => "MOOS dependencies",
            Self::Gui => "GUI libraries",
        }
    }
}

/// Package-name family shared by distros with a common lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Deb,
    Rpm,
    Arch,
    Suse,
}

impl Family {
    fn of(distro: Distro) -> Self {
        match distro {
            Distro::Ubuntu | Distro::Debian | Distro::Raspbian => Self::Deb,
            Distro::Fedora | Distro::CentOs | Distro::Rhel => Self::Rpm,
            Distro::Arch | Distro::Manjaro => Self::Arch,
            Distro::OpenSuse => Self::Suse,
        }
    }
}

const DEB_CORE: &[&str] = &["build-essential", "cmake", "git"];
const DEB_MOOS: &[&str] = &["subversion", "xterm", "libtiff5-dev"];
const DEB_GUI: &[&str] = &[
    "libfltk1.3-dev",
    "freeglut3-dev",
    "libpng-dev",
    "libjpeg-dev",
    "libxft-dev",
    "libxinerama-dev",
];

const RPM_CORE: &[&str] = &["gcc", "gcc-c++", "make", "cmake", "git"];
const RPM_MOOS: &[&str] = &["subversion", "xterm", "libtiff-devel"];
const RPM_GUI: &[&str] = &[
    "fltk-devel",
    "freeglut-devel",
    "libpng-devel",
    "libjpeg-turbo-devel",
    "libXft-devel",
    "libXinerama-devel",
];

const ARCH_CORE: &[&str] = &["base-devel", "cmake", "git"];
const ARCH_MOOS: &[&str] = &["subversion", "xterm", "libtiff"];
const ARCH_GUI: &[&str] = &[
    "fltk",
    "freeglut",
    "libpng",
    "libjpeg-turbo",
    "libxft",
    "libxinerama",
];

const SUSE_CORE: &[&str] = &["gcc", "gcc-c++", "make", "cmake", "git"];
const SUSE_MOOS: &[&str] = &["subversion", "xterm", "libtiff-devel"];
const SUSE_GUI: &[&str] = &[
    "fltk-devel",
    "freeglut-devel",
    "libpng16-devel",
    "libjpeg8-devel",
    "libXft-devel",
    "libXinerama-devel",
];

/// Packages for a distro and category.
pub fn packages_for(distro: Distro, category: Category) -> &'static [&'static str] {
    match (Family::of(distro), category) {
        (Family::Deb, Category::Core) => DEB_CORE,
        (Family::Deb, Category::Moos) => DEB_MOOS,
        (Family::Deb, Category::Gui) => DEB_GUI,
        (Family::Rpm, Category::Core) => RPM_CORE,
        (Family::Rpm, Category::Moos) => RPM_MOOS,
        (Family::Rpm, Category::Gui) => RPM_GUI,
        (Family::Arch, Category::Core) => ARCH_CORE,
        (Family::Arch, Category::Moos) => ARCH_MOOS,
        (Family::Arch, Category::Gui) => ARCH_GUI,
        (Family::Suse, Category::Core) => SUSE_CORE,
        (Family::Suse, Category::Moos) => SUSE_MOOS,
        (Family::Suse, Category::Gui) => SUSE_GUI,
    }
}

/// One phase of an install plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedPhase {
    pub category: Category,
    pub packages: Vec<&'static str>,
}

/// Build the ordered install plan for a distro.
///
/// With `minimal` the GUI category is present but empty, so a minimal run
/// still reports all three phases.
pub fn install_plan(distro: Distro, minimal: bool) -> Vec<PlannedPhase> {
    Category::ALL
        .iter()
        .map(|&category| {
            let packages = if minimal && category == Category::Gui {
                Vec::new()
            } else {
                packages_for(distro, category).to_vec()
            };
            PlannedPhase { category, packages }
        })
        .collect()
}
