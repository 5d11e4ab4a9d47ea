use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::controller::ConnectionToggleController;
use crate::state::ConnectionState;
use crate::targets::{resolve_icon, DEFAULT_ICON};

// Panel indicator: shown while connected, showing the active country's icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub visible: bool,
    pub icon: PathBuf,
}

impl Indicator {
    pub fn new(default_icon: PathBuf) -> Self {
        Self {
            visible: false,
            icon: default_icon,
        }
    }

    pub fn apply(&mut self, state: &ConnectionState, default_icon: &Path) {
        self.visible = state.connected;
        self.icon = match &state.active_target {
            Some(target) => target.icon.clone(),
            None => default_icon.to_path_buf(),
        };
    }
}

pub type SharedIndicator = Rc<RefCell<Indicator>>;

/// Creates an indicator and keeps it in sync with the controller's state.
pub fn bind_indicator(
    controller: &mut ConnectionToggleController,
    icons_dir: &Path,
) -> SharedIndicator {
    let default_icon = resolve_icon(icons_dir, DEFAULT_ICON);
    let indicator = Rc::new(RefCell::new(Indicator::new(default_icon.clone())));

    let bound = Rc::clone(&indicator);
    controller.subscribe(move |state| {
        bound.borrow_mut().apply(state, &default_icon);
    });
    indicator
}
