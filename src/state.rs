use crate::targets::Target;

// Represents the current high-level state of the application UI
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Initialising, // App is starting, loading config and the country list
    Running,      // Main operational state, showing the toggle and menu
    About,        // Showing the about screen
}

/// Connection status as tracked by the controller.
///
/// Nothing here is read back from the VPN tool; it only reflects which
/// commands were issued.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub connected: bool,
    pub active_target: Option<Target>, // Only Some while connected
}

impl ConnectionState {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected_to(target: Option<Target>) -> Self {
        Self {
            connected: true,
            active_target: target,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (&self.connected, &self.active_target) {
            (false, _) => write!(f, "Disconnected"),
            (true, None) => write!(f, "Connected"),
            (true, Some(target)) => write!(f, "Connected ({})", target.label()),
        }
    }
}
