use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};

use crate::targets::Target;

// The VPN tool invocation, kept as three words so the command lines are
// plain concatenations: "<program> <verb>[ <target>]".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)] // Missing words fall back to the nordvpn defaults
pub struct VpnCommands {
    pub program: String,
    pub connect_verb: String,
    pub disconnect_verb: String,
}

impl Default for VpnCommands {
    fn default() -> Self {
        Self {
            program: "nordvpn".to_string(),
            connect_verb: "connect".to_string(),
            disconnect_verb: "disconnect".to_string(),
        }
    }
}

impl VpnCommands {
    pub fn connect(&self) -> String {
        format!("{} {}", self.program, self.connect_verb)
    }

    pub fn disconnect(&self) -> String {
        format!("{} {}", self.program, self.disconnect_verb)
    }

    /// No quoting or escaping is applied to the target identifier.
    pub fn connect_to(&self, target: &Target) -> String {
        format!("{} {}", self.connect(), target.id)
    }
}

/// Issues a full command line. Implementations must not block the caller
/// and must not report the outcome back.
pub trait CommandRunner {
    fn run(&self, command_line: &str);
}

// Hands the command line to the system shell and forgets about it
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    fn shell_command(command_line: &str) -> Command {
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command_line);
            cmd
        }
        #[cfg(not(target_os = "windows"))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command_line);
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) {
        info!("Spawning: {}", command_line);
        let spawned = Self::shell_command(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                // Reap the child so it doesn't linger as a zombie; the exit
                // status only goes to the debug log.
                let line = command_line.to_string();
                let reaper = std::thread::Builder::new()
                    .name("command-reaper".to_string())
                    .spawn(move || match child.wait() {
                        Ok(status) => debug!("'{}' exited with {}", line, status),
                        Err(e) => debug!("Failed waiting on '{}': {}", line, e),
                    });
                if let Err(e) = reaper {
                    error!("Could not start reaper thread for '{}': {}", command_line, e);
                }
            }
            Err(e) => {
                error!("Failed to spawn '{}': {}", command_line, e);
            }
        }
    }
}

// Logs the command line instead of running it (--dry-run)
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command_line: &str) {
        info!("[dry-run] Would spawn: {}", command_line);
    }
}
