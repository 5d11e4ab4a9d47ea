use chrono::{DateTime, Local};
use log::{debug, info};
use std::collections::VecDeque;

use crate::command::{CommandRunner, VpnCommands};
use crate::observable::Observable;
use crate::state::ConnectionState;
use crate::targets::Target;

// Most recent commands kept for display
pub const HISTORY_LIMIT: usize = 32;

// A command line the controller handed to its runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCommand {
    pub command_line: String,
    pub issued_at: DateTime<Local>,
}

/// Maps the toggle and the country menu onto VPN tool invocations.
///
/// Every command is fire-and-forget: the controller updates its state as
/// soon as the command is issued and never looks at the outcome.
pub struct ConnectionToggleController {
    commands: VpnCommands,
    runner: Box<dyn CommandRunner>,
    state: Observable<ConnectionState>,
    history: VecDeque<IssuedCommand>, // Oldest first, at most HISTORY_LIMIT
}

impl ConnectionToggleController {
    pub fn new(commands: VpnCommands, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            commands,
            runner,
            state: Observable::new(ConnectionState::disconnected()),
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    /// Handles the toggle being switched on or off.
    ///
    /// On: issues the generic connect command unless a target is already
    /// active, in which case nothing is issued and the state is kept.
    /// Off: issues the generic disconnect command and returns to
    /// Disconnected.
    pub fn toggle(&mut self, requested_on: bool) {
        if requested_on {
            if let Some(target) = &self.state.get().active_target {
                debug!("Toggle on ignored, already connected to '{}'", target.id);
                return;
            }
            let line = self.commands.connect();
            self.issue(line);
            self.state.publish(ConnectionState::connected_to(None));
        } else {
            let line = self.commands.disconnect();
            self.issue(line);
            self.state.publish(ConnectionState::disconnected());
        }
    }

    /// Connects to `target`. Repeated selections issue repeated commands.
    pub fn select_target(&mut self, target: &Target) {
        let line = self.commands.connect_to(target);
        self.issue(line);
        self.state
            .publish(ConnectionState::connected_to(Some(target.clone())));
    }

    pub fn state(&self) -> &ConnectionState {
        self.state.get()
    }

    pub fn is_connected(&self) -> bool {
        self.state.get().connected
    }

    pub fn active_target(&self) -> Option<&Target> {
        self.state.get().active_target.as_ref()
    }

    /// Registers a callback for every published state; it is called once
    /// right away with the current state.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&ConnectionState) + 'static,
    {
        self.state.subscribe(callback);
    }

    pub fn history(&self) -> &VecDeque<IssuedCommand> {
        &self.history
    }

    pub fn last_command(&self) -> Option<&IssuedCommand> {
        self.history.back()
    }

    pub fn commands(&self) -> &VpnCommands {
        &self.commands
    }

    /// Drops all subscribers; used when the owning session is torn down.
    pub fn unbind_all(&mut self) {
        self.state.clear_subscribers();
    }

    fn issue(&mut self, command_line: String) {
        info!("Issuing '{}'", command_line);
        self.runner.run(&command_line);
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(IssuedCommand {
            command_line,
            issued_at: Local::now(),
        });
    }
}
