use log::info;
use std::path::{Path, PathBuf};

use crate::command::CommandRunner;
use crate::config::ConfigData;
use crate::controller::ConnectionToggleController;
use crate::indicator::{bind_indicator, Indicator, SharedIndicator};
use crate::targets::{load_targets, resolve_icon, Target, DEFAULT_ICON, GLOBE_ICON};

pub const MENU_TITLE: &str = "NordVPN";
pub const MENU_SUBTITLE: &str = "NordVPN Version 3.18.2";
pub const SUBMENU_TITLE: &str = "Select country";

// One entry of the "Select country" submenu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub target: Target,
}

/// Everything created while the applet is enabled. Built by `enable`,
/// dropped by `disable`; a new activation builds a fresh controller.
pub struct Session {
    pub controller: ConnectionToggleController,
    pub menu_items: Vec<MenuItem>,
    indicator: SharedIndicator,
    header_icon: PathBuf,
    submenu_icon: PathBuf,
}

impl Session {
    pub fn enable(config: &ConfigData, data_dir: &Path, runner: Box<dyn CommandRunner>) -> Self {
        let icons_dir = config.icons_path(data_dir);
        let targets = load_targets(
            &config.countries_path(data_dir),
            &icons_dir,
            config.target_policy,
        );

        let menu_items = targets
            .into_iter()
            .map(|target| MenuItem {
                label: target.label(),
                target,
            })
            .collect::<Vec<_>>();

        let mut controller = ConnectionToggleController::new(config.commands.clone(), runner);
        let indicator = bind_indicator(&mut controller, &icons_dir);

        info!(
            "Session enabled with {} countries (policy: {})",
            menu_items.len(),
            config.target_policy
        );

        Self {
            controller,
            menu_items,
            indicator,
            header_icon: resolve_icon(&icons_dir, DEFAULT_ICON),
            submenu_icon: resolve_icon(&icons_dir, GLOBE_ICON),
        }
    }

    pub fn disable(mut self) {
        self.controller.unbind_all();
        self.menu_items.clear();
        info!("Session disabled.");
    }

    // Called from the menu; index into `menu_items`
    pub fn activate_item(&mut self, index: usize) {
        if let Some(item) = self.menu_items.get(index) {
            let target = item.target.clone();
            self.controller.select_target(&target);
        }
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator.borrow().clone()
    }

    pub fn header_icon(&self) -> &Path {
        &self.header_icon
    }

    pub fn submenu_icon(&self) -> &Path {
        &self.submenu_icon
    }
}
