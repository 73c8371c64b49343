//! # Serial TTY Transport
//!
//! This module provides communication with thermal printers attached to a
//! serial port: a USB-serial adapter (`/dev/ttyUSB0`), an on-board UART
//! (`/dev/serial0` on a Raspberry Pi), or a Bluetooth SPP binding
//! (`/dev/rfcomm0`).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode to ensure binary data is transmitted
//! without modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no LF → CR LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//! - **Baud rate**: set on both directions (9600 by default)
//!
//! The port is configured through termios, so this transport is Unix only.
//!
//! ## Chunked Writes
//!
//! Cheap printer modules have small receive buffers and often no working
//! flow control. Large writes are split into chunks with a short pause
//! between them.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use super::Transport;
use crate::error::PrinterError;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Default line speed, the factory setting of most serial thermal modules
pub const DEFAULT_BAUD: u32 = 9600;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 256;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 5;

/// # Serial Printer Transport
///
/// ## Example
///
/// ```no_run
/// use thermal_printer::transport::{SerialTransport, Transport};
/// use thermal_printer::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
/// transport.write(&commands::init())?;
///
/// # Ok::<(), thermal_printer::PrinterError>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open a serial device and configure it for raw binary output.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the dialout group)
    /// - The baud rate is not a standard termios speed
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, PrinterError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            PrinterError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd(), baud)?;
        log::info!("opened {} at {} baud", path.display(), baud);

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Open [`DEFAULT_DEVICE`] at [`DEFAULT_BAUD`].
    pub fn open_default() -> Result<Self, PrinterError> {
        Self::open(DEFAULT_DEVICE, DEFAULT_BAUD)
    }

    /// Set the chunk size for large writes. Zero disables chunking.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size;
    }

    /// Set the delay between chunks.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    fn write_chunked(&mut self, data: &[u8]) -> Result<(), PrinterError> {
        if self.chunk_size == 0 || data.len() <= self.chunk_size {
            return self
                .file
                .write_all(data)
                .map_err(|e| PrinterError::Transport(format!("Write failed: {}", e)));
        }

        for chunk in data.chunks(self.chunk_size) {
            self.file
                .write_all(chunk)
                .map_err(|e| PrinterError::Transport(format!("Write failed: {}", e)))?;

            if !self.chunk_delay.is_zero() {
                thread::sleep(self.chunk_delay);
            }
        }
        Ok(())
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<(), PrinterError> {
        if data.is_empty() {
            return Ok(());
        }

        log::debug!(
            "TX {} bytes: {:02x?}",
            data.len(),
            &data[..data.len().min(16)]
        );
        self.write_chunked(data)?;

        self.file
            .flush()
            .map_err(|e| PrinterError::Transport(format!("Flush failed: {}", e)))
    }
}

/// Map a numeric baud rate to its termios speed constant.
fn baud_constant(baud: u32) -> Option<libc::speed_t> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        _ => return None,
    };
    Some(speed)
}

/// Configure a file descriptor for raw 8N1 TTY mode at `baud`.
///
/// An unsupported baud rate is rejected before the descriptor is touched.
fn configure_tty_raw(fd: i32, baud: u32) -> Result<(), PrinterError> {
    use std::mem::MaybeUninit;

    let speed = baud_constant(baud).ok_or_else(|| {
        PrinterError::InvalidArgument(format!("unsupported baud rate {}", baud))
    })?;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(PrinterError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: no processing at all.
    // IXON/IXOFF/IXANY: no software flow control, 0x11/0x13 are payload bytes
    // (a 2x2 `GS !` magnification is 0x11)
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // No LF -> CR LF translation
    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // 8N1, ignore modem control lines
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CLOCAL;

    let result = unsafe {
        let rc_out = libc::cfsetospeed(&mut termios, speed);
        let rc_in = libc::cfsetispeed(&mut termios, speed);
        rc_out | rc_in
    };
    if result != 0 {
        return Err(PrinterError::Transport(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(PrinterError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
