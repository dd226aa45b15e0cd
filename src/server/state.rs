//! Server state and configuration.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::FileSettings;
use crate::error::Result;
use crate::printer::{NetworkPrinter, PrinterHandle};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Settings file read on every request
    pub config_path: PathBuf,
    /// Address to listen on (e.g., "0.0.0.0:5555")
    pub listen_addr: String,
}

/// Opens a printer handle for an address.
pub type Connector = Arc<dyn Fn(&str) -> Result<Box<dyn PrinterHandle + Send>> + Send + Sync>;

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub settings: FileSettings,
    pub connector: Connector,
    /// Held for the whole of a print job; one job reaches the printer at a time.
    pub job_lock: Mutex<()>,
    /// Held across load, apply and save of a settings update.
    pub settings_lock: Mutex<()>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_connector(config, Arc::new(connect_network))
    }

    pub fn with_connector(config: ServerConfig, connector: Connector) -> Self {
        let settings = FileSettings::new(&config.config_path);
        Self {
            config,
            settings,
            connector,
            job_lock: Mutex::new(()),
            settings_lock: Mutex::new(()),
        }
    }
}

fn connect_network(address: &str) -> Result<Box<dyn PrinterHandle + Send>> {
    Ok(Box::new(NetworkPrinter::open(address)?))
}
