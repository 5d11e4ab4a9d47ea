// Export modules for testing
pub mod about;
pub mod command;
pub mod config;
pub mod controller;
pub mod indicator;
pub mod observable;
pub mod session;
pub mod state;
pub mod targets;
pub mod ui;
pub mod util;

// Re-export main types for testing
pub use crate::command::{CommandRunner, DryRunRunner, ShellRunner, VpnCommands};
pub use crate::config::ConfigData;
pub use crate::controller::ConnectionToggleController;
pub use crate::session::Session;
pub use crate::state::{ConnectionState, State};
pub use crate::targets::{Target, TargetPolicy};

// Constants
pub const PROGRAM_TITLE: &str = "NordVPN Quick Toggle";
pub const CONFIG_NAME: &str = "nordvpn_toggle";
pub const INITIAL_WIDTH: f32 = 360.0;
pub const INITIAL_HEIGHT: f32 = 240.0;

use clap::Parser;
use fast_config::Config;
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding countries.json and icons/ (defaults to the executable's directory)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log commands instead of running them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

// The main application struct
pub struct ToggleApp {
    pub state: State,
    pub session: Option<Session>, // Present between enable and disable
    pub data_dir: PathBuf,
    pub dry_run: bool,

    // Configuration, None when the file could not be opened
    pub config: Option<Config<ConfigData>>,
}

impl ToggleApp {
    pub fn new(args: &Args) -> Self {
        let config = config::open_config(&config::config_file_path());
        Self::with_config(args, config)
    }

    pub fn with_config(args: &Args, config: Option<Config<ConfigData>>) -> Self {
        let mut app = Self {
            state: State::Initialising,
            session: None,
            data_dir: PathBuf::new(),
            dry_run: args.dry_run,
            config,
        };
        app.data_dir =
            config::resolve_data_dir(args.data_dir.as_deref(), &app.config_data().countries_file);
        info!("Using data directory {}", app.data_dir.display());
        app
    }

    pub fn config_data(&self) -> ConfigData {
        self.config
            .as_ref()
            .map(|cfg| cfg.data.clone())
            .unwrap_or_default()
    }

    fn runner(&self) -> Box<dyn CommandRunner> {
        if self.dry_run {
            Box::new(DryRunRunner)
        } else {
            Box::new(ShellRunner)
        }
    }

    // Initialization logic called once at the start
    pub fn enable(&mut self) {
        let runner = self.runner();
        self.session = Some(Session::enable(&self.config_data(), &self.data_dir, runner));
        self.state = State::Running;
        info!("Initialization complete. State set to Running.");
    }

    pub fn disable(&mut self) {
        if let Some(session) = self.session.take() {
            session.disable();
        }
    }

    pub fn shutdown_app(&mut self) {
        info!("Shutdown requested.");
        self.disable();

        // Save configuration
        match self.config.as_mut() {
            Some(cfg) => match cfg.save() {
                Ok(_) => info!("Configuration saved."),
                Err(e) => error!("Failed to save configuration on exit: {}", e),
            },
            None => info!("No config file in use, nothing to save."),
        }
    }
}
