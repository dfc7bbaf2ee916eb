use anyhow::{anyhow, Error};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const YARN_LOCK: &str = "yarn.lock";
pub const PNPM_LOCK: &str = "pnpm-lock.yaml";
pub const NPM_LOCK: &str = "package-lock.json";
pub const MANIFEST: &str = "package.json";

/// One row of the package manager registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PackageManagerEntry {
    pub name: &'static str,
    pub add: &'static str,
}

/// Indices into this table are stable; callers select command templates by them.
pub static PACKAGE_MANAGERS: [PackageManagerEntry; 3] = [
    PackageManagerEntry {
        name: "npm",
        add: "install",
    },
    PackageManagerEntry {
        name: "pnpm",
        add: "add",
    },
    PackageManagerEntry {
        name: "yarn",
        add: "add",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Pnpm, PackageManager::Yarn];

    pub fn index(self) -> usize {
        match self {
            PackageManager::Npm => 0,
            PackageManager::Pnpm => 1,
            PackageManager::Yarn => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<PackageManager> {
        Self::ALL.get(i).copied()
    }

    pub fn entry(self) -> &'static PackageManagerEntry {
        &PACKAGE_MANAGERS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Full invocation, e.g. `npm install` or `pnpm add`.
    pub fn add_command(self) -> String {
        let e = self.entry();
        format!("{} {}", e.name, e.add)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("unknown package manager: \"{s}\" (expected npm|pnpm|yarn)"))
    }
}

/// File-existence check used by [`detect`]. Lookup failures must read as "absent".
pub trait Probe {
    fn exists(&self, name: &str) -> bool;
}

#[derive(Clone, Debug)]
pub struct DirProbe {
    root: PathBuf,
}

impl DirProbe {
    pub fn new(root: &Path) -> Self {
        DirProbe {
            root: root.to_path_buf(),
        }
    }
}

impl Probe for DirProbe {
    fn exists(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }
}

// Priority order; first hit wins.
const LOCKFILES: [(&str, PackageManager); 3] = [
    (YARN_LOCK, PackageManager::Yarn),
    (PNPM_LOCK, PackageManager::Pnpm),
    (NPM_LOCK, PackageManager::Npm),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detection {
    pub manager: PackageManager,
    /// Lockfile that decided the result; `None` when the fallback was used.
    pub lockfile: Option<&'static str>,
}

impl Detection {
    pub fn index(&self) -> usize {
        self.manager.index()
    }
}

/// First matching lockfile in priority order, if any.
pub fn detect_lockfile<P: Probe + ?Sized>(probe: &P) -> Option<Detection> {
    LOCKFILES
        .into_iter()
        .find(|(lockfile, _)| probe.exists(lockfile))
        .map(|(lockfile, manager)| Detection {
            manager,
            lockfile: Some(lockfile),
        })
}

pub fn detect<P: Probe + ?Sized>(probe: &P, fallback: PackageManager) -> Detection {
    detect_lockfile(probe).unwrap_or(Detection {
        manager: fallback,
        lockfile: None,
    })
}

pub fn has_manifest(root: &Path) -> bool {
    root.join(MANIFEST).exists()
}
