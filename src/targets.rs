use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ICON: &str = "nordvpn-tray-white";
pub const GLOBE_ICON: &str = "globe";
const ICON_EXTENSION: &str = "svg";

// A connectable endpoint (a country name as written in the list file)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub id: String,    // Exact identifier passed to the VPN tool
    pub icon: PathBuf, // icons/<id>.svg
}

impl Target {
    pub fn new(id: impl Into<String>, icons_dir: &Path) -> Self {
        let id = id.into();
        let icon = resolve_icon(icons_dir, &id);
        Self { id, icon }
    }

    /// Menu label: underscores in the identifier read as spaces.
    pub fn label(&self) -> String {
        self.id.replace('_', " ")
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How target names are treated before they reach the shell command line.
///
/// Names are interpolated by plain concatenation. `PassThrough` keeps them
/// uninspected, which trusts the bundled list; `RejectUnsafe` drops any
/// entry that could carry shell metacharacters.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TargetPolicy {
    #[default]
    PassThrough,
    RejectUnsafe,
}

impl std::fmt::Display for TargetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TargetPolicy::PassThrough => write!(f, "pass-through"),
            TargetPolicy::RejectUnsafe => write!(f, "reject-unsafe"),
        }
    }
}

impl TargetPolicy {
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            TargetPolicy::PassThrough => true,
            TargetPolicy::RejectUnsafe => is_plain_name(name),
        }
    }
}

/// True when `name` is non-empty and made only of ASCII alphanumerics,
/// `_` and `-`.
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub fn resolve_icon(icons_dir: &Path, name: &str) -> PathBuf {
    icons_dir.join(format!("{}.{}", name, ICON_EXTENSION))
}

/// Parses a JSON array of strings. Anything else (bad JSON, a different
/// document shape, non-string entries) yields an empty list.
pub fn parse_target_names(contents: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(contents) {
        Ok(names) => names,
        Err(e) => {
            warn!("Country list is malformed, using an empty list: {}", e);
            vec![]
        }
    }
}

/// Loads the static target list once. Never fails: a missing or corrupt
/// file degrades to an empty list.
pub fn load_targets(path: &Path, icons_dir: &Path, policy: TargetPolicy) -> Vec<Target> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(
                "Could not read country list {}: {}. Using an empty list.",
                path.display(),
                e
            );
            return vec![];
        }
    };

    let targets: Vec<Target> = parse_target_names(&contents)
        .into_iter()
        .filter(|name| {
            let accepted = policy.accepts(name);
            if !accepted {
                warn!("Dropping country entry {:?} under the {} policy", name, policy);
            }
            accepted
        })
        .map(|name| Target::new(name, icons_dir))
        .collect();

    for target in &targets {
        debug!("Loaded target '{}' (icon {})", target.id, target.icon.display());
    }
    info!("Loaded {} targets from {}", targets.len(), path.display());
    targets
}
