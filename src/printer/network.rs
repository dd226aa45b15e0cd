//! # Network Printer Transport
//!
//! Raw ESC/POS over TCP, the way most networked receipt printers accept
//! jobs (port 9100).
//!
//! ## Session
//!
//! ```text
//! open ──► ESC @, ESC t 18 ──► (style, text)* ──► feed + cut ──► close
//! ```
//!
//! Writes are buffered and flushed on [`cut`](PrinterHandle::cut) and
//! [`close`](PrinterHandle::close), so a dead connection may surface on the
//! flush rather than on the call that queued the bytes. Every I/O failure is
//! reported as [`TpError::Transport`].

use std::io::{BufWriter, Write};
use std::net::{IpAddr, Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, info, instrument};

use super::PrinterHandle;
use crate::error::{Result, TpError};
use crate::ir::ResolvedStyle;
use crate::protocol::{codepage, commands, text};

/// Raw printing port used when the address has none.
pub const DEFAULT_PORT: u16 = 9100;

/// Connect and write timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// # Network Printer
///
/// ## Example
///
/// ```no_run
/// use tp::printer::{NetworkPrinter, PrinterHandle};
///
/// let mut printer = NetworkPrinter::open("192.168.1.100")?;
/// printer.emit_text("Hello\n")?;
/// printer.cut()?;
/// printer.close()?;
/// # Ok::<(), tp::TpError>(())
/// ```
#[derive(Debug)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    stream: BufWriter<TcpStream>,
    closed: bool,
}

impl NetworkPrinter {
    /// Connect to `address` (`host` or `host:port`) with the default timeout.
    pub fn open(address: &str) -> Result<Self> {
        Self::open_with_timeout(address, DEFAULT_TIMEOUT)
    }

    #[instrument(skip(timeout))]
    pub fn open_with_timeout(address: &str, timeout: Duration) -> Result<Self> {
        let addr = resolve(address)?;
        info!(%addr, "Connecting to printer");

        let stream = TcpStream::connect_timeout(&addr, timeout)
            .map_err(|e| TpError::Transport(format!("Failed to connect to {}: {}", addr, e)))?;
        stream
            .set_write_timeout(Some(timeout))
            .map_err(|e| TpError::Transport(format!("Failed to configure {}: {}", addr, e)))?;

        let mut printer = Self {
            addr,
            stream: BufWriter::new(stream),
            closed: false,
        };
        printer.write(&commands::init())?;
        printer.write(&text::code_table(text::CODE_TABLE_PC852))?;
        debug!(%addr, "Printer initialized");
        Ok(printer)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.stream
            .write_all(bytes)
            .map_err(|e| TpError::Transport(format!("Write to {} failed: {}", self.addr, e)))
    }

    fn flush(&mut self) -> Result<()> {
        self.stream
            .flush()
            .map_err(|e| TpError::Transport(format!("Flush to {} failed: {}", self.addr, e)))
    }
}

impl PrinterHandle for NetworkPrinter {
    fn apply_style(&mut self, style: &ResolvedStyle) -> Result<()> {
        self.write(&text::style(style))
    }

    fn emit_text(&mut self, text: &str) -> Result<()> {
        self.write(&codepage::encode(text))
    }

    fn cut(&mut self) -> Result<()> {
        self.write(&commands::cut_full_feed())?;
        self.flush()
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.flush()?;
        self.stream
            .get_ref()
            .shutdown(Shutdown::Both)
            .map_err(|e| TpError::Transport(format!("Failed to close {}: {}", self.addr, e)))?;
        self.closed = true;
        info!(addr = %self.addr, "Printer connection closed");
        Ok(())
    }
}

/// Resolve `host`, `host:port`, `ip` or `ip:port` to a socket address.
fn resolve(address: &str) -> Result<SocketAddr> {
    let address = address.trim();
    if address.is_empty() {
        return Err(TpError::Config("Printer IP address not set".to_string()));
    }
    if let Ok(addr) = address.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = address.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_PORT));
    }

    let target = if address.contains(':') {
        address.to_string()
    } else {
        format!("{}:{}", address, DEFAULT_PORT)
    };
    target
        .to_socket_addrs()
        .map_err(|e| TpError::Transport(format!("Cannot resolve {}: {}", address, e)))?
        .next()
        .ok_or_else(|| TpError::Transport(format!("No address found for {}", address)))
}
