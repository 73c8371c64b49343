//! # Thermal CLI
//!
//! Command-line interface for serial thermal receipt printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print two lines, bold and centered
//! thermal print --bold --align center "Hello" "World"
//!
//! # Double size on an 80mm printer at 19200 baud
//! thermal print --preset 80mm --size 2x2 --device /dev/ttyS0 "BIG"
//!
//! # Show the bytes instead of sending them
//! thermal print --hex --underline "dry run"
//!
//! # Magnification demo
//! thermal demo --device /dev/serial0
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use thermal_printer::{
    MemoryTransport, PrinterConfig, PrinterError, SerialTransport, ThermalPrinter, Transport,
    protocol::text::{Font, Justification, Magnification, Rotation},
};

/// Thermal - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "thermal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct Connection {
    /// Serial device path
    #[arg(long, default_value = "/dev/ttyUSB0")]
    device: PathBuf,

    /// Baud rate (defaults to the preset's rate)
    #[arg(long)]
    baud: Option<u32>,

    /// Printer preset: 58mm or 80mm
    #[arg(long, default_value = "58mm")]
    preset: String,

    /// JSON printer configuration file (overrides --preset)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Dump each transport write as hex instead of opening the device
    #[arg(long)]
    hex: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print lines of text
    Print {
        /// Lines to print
        #[arg(required = true)]
        lines: Vec<String>,

        #[command(flatten)]
        connection: Connection,

        /// Bold text
        #[arg(long)]
        bold: bool,

        /// Underlined text
        #[arg(long)]
        underline: bool,

        /// Font
        #[arg(long, value_enum)]
        font: Option<FontArg>,

        /// Justification
        #[arg(long, value_enum)]
        align: Option<AlignArg>,

        /// Magnification as HEIGHTxWIDTH, each 1-16 (e.g. 2x1)
        #[arg(long, value_name = "HxW")]
        size: Option<String>,

        /// Rotate characters 90° clockwise
        #[arg(long)]
        rotate: bool,

        /// Print upside down
        #[arg(long)]
        upside_down: bool,

        /// Line feeds after the text (defaults to the preset's value)
        #[arg(long)]
        feed: Option<usize>,
    },

    /// Print the magnification demo
    Demo {
        #[command(flatten)]
        connection: Connection,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FontArg {
    A,
    B,
}

impl From<FontArg> for Font {
    fn from(arg: FontArg) -> Self {
        match arg {
            FontArg::A => Font::A,
            FontArg::B => Font::B,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlignArg {
    Left,
    Center,
    Right,
}

impl From<AlignArg> for Justification {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Justification::Left,
            AlignArg::Center => Justification::Center,
            AlignArg::Right => Justification::Right,
        }
    }
}

/// Formatting requested on the command line.
#[derive(Debug, Default)]
struct Style {
    bold: bool,
    underline: bool,
    font: Option<Font>,
    align: Option<Justification>,
    size: Option<Magnification>,
    rotate: bool,
    upside_down: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrinterError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            lines,
            connection,
            bold,
            underline,
            font,
            align,
            size,
            rotate,
            upside_down,
            feed,
        } => {
            let style = Style {
                bold,
                underline,
                font: font.map(Font::from),
                align: align.map(Justification::from),
                size: size.as_deref().map(parse_size).transpose()?,
                rotate,
                upside_down,
            };
            with_printer(&connection, &Job::Lines { lines, style, feed })
        }
        Commands::Demo { connection } => with_printer(&connection, &Job::Demo),
    }
}

/// What to put on paper.
#[derive(Debug)]
enum Job {
    Lines {
        lines: Vec<String>,
        style: Style,
        feed: Option<usize>,
    },
    Demo,
}

/// Resolve the configuration, open the transport, and run `job` against it.
fn with_printer(connection: &Connection, job: &Job) -> Result<(), PrinterError> {
    let mut config = match &connection.config {
        Some(path) => PrinterConfig::load(path)?,
        None => PrinterConfig::by_name(&connection.preset).ok_or_else(|| {
            PrinterError::InvalidArgument(format!(
                "unknown preset '{}', expected 58mm or 80mm",
                connection.preset
            ))
        })?,
    };
    if let Some(baud) = connection.baud {
        config.baud_rate = baud;
    }

    if connection.hex {
        let mut printer = ThermalPrinter::with_config(MemoryTransport::new(), config)?;
        run_job(&mut printer, job)?;
        for write in printer.transport().writes() {
            println!("{}", hex_line(write));
        }
        return Ok(());
    }

    let transport = SerialTransport::open(&connection.device, config.baud_rate)?;
    let mut printer = ThermalPrinter::with_config(transport, config)?;
    run_job(&mut printer, job)?;
    log::info!("printed to {}", connection.device.display());
    Ok(())
}

fn run_job<T: Transport>(printer: &mut ThermalPrinter<T>, job: &Job) -> Result<(), PrinterError> {
    match job {
        Job::Lines { lines, style, feed } => {
            compose_lines(printer, lines, style);
            let feeds = feed.unwrap_or(printer.config().flush_feeds);
            printer.flush(feeds, true)
        }
        Job::Demo => {
            compose_demo(printer)?;
            printer.print()
        }
    }
}

/// Apply `style`, buffer `lines`, then undo the style so the printer is left
/// in its default state.
fn compose_lines<T: Transport>(printer: &mut ThermalPrinter<T>, lines: &[String], style: &Style) {
    if let Some(align) = style.align {
        printer.set_justification(align);
    }
    if let Some(font) = style.font {
        printer.set_font(font);
    }
    if style.bold {
        printer.set_bold(true);
    }
    if style.underline {
        printer.set_underline(true);
    }
    if let Some(size) = style.size {
        printer.set_size(size);
    }
    if style.rotate {
        printer.set_rotation(Rotation::Clockwise);
    }
    if style.upside_down {
        printer.set_upside_down(true);
    }

    for line in lines {
        printer.add_text(line, 1);
    }

    if style.upside_down {
        printer.set_upside_down(false);
    }
    if style.rotate {
        printer.set_rotation(Rotation::None);
    }
    if style.size.is_some() {
        printer.reset_magnification();
    }
    if style.bold || style.underline || style.font.is_some() {
        printer.reset_print_mode();
    }
    if style.align.is_some() {
        printer.set_justification(Justification::Left);
    }
}

/// Four lines at different magnifications.
fn compose_demo<T: Transport>(printer: &mut ThermalPrinter<T>) -> Result<(), PrinterError> {
    printer.add_text("Hello World", 1);
    printer.set_magnification(3, 1)?;
    printer.add_text("Hello World 2", 1);
    printer.set_magnification(1, 2)?;
    printer.add_text("Hello World 3", 1);
    printer.reset_magnification();
    printer.add_text("Hello World 4", 1);
    Ok(())
}

/// Parse `HxW` (e.g. `2x1`) into a magnification.
fn parse_size(spec: &str) -> Result<Magnification, PrinterError> {
    let invalid = || {
        PrinterError::InvalidArgument(format!("size must be HEIGHTxWIDTH, got '{}'", spec))
    };
    let (height, width) = spec.split_once(['x', 'X']).ok_or_else(invalid)?;
    let height = height.trim().parse::<u8>().map_err(|_| invalid())?;
    let width = width.trim().parse::<u8>().map_err(|_| invalid())?;
    Magnification::new(height, width)
}

fn hex_line(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("2x1").unwrap(), Magnification::new(2, 1).unwrap());
        assert_eq!(parse_size("3X3").unwrap().encode(), 0x22);
        assert!(parse_size("2").is_err());
        assert!(parse_size("0x1").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_hex_line() {
        assert_eq!(hex_line(&[0x1B, 0x40]), "1B 40");
        assert_eq!(hex_line(&[]), "");
    }

    #[test]
    fn test_compose_lines_restores_defaults() {
        let mut printer = ThermalPrinter::new(MemoryTransport::new()).unwrap();
        let style = Style {
            bold: true,
            align: Some(Justification::Center),
            ..Style::default()
        };
        compose_lines(&mut printer, &["hi".to_string()], &style);

        assert_eq!(
            printer.buffer(),
            &[
                0x1B, 0x61, 0x01, //
                0x1B, 0x21, 0x08, //
                b'h', b'i', 0x0A, //
                0x1B, 0x21, 0x00, //
                0x0A, 0x1B, 0x61, 0x00,
            ]
        );
        assert!(printer.state().mode().is_empty());
    }

    #[test]
    fn test_compose_demo_matches_magnification_sequence() {
        let mut printer = ThermalPrinter::new(MemoryTransport::new()).unwrap();
        compose_demo(&mut printer).unwrap();

        let mut expected = b"Hello World\n".to_vec();
        expected.extend([0x1D, 0x21, 0x02]);
        expected.extend(b"Hello World 2\n");
        expected.extend([0x1D, 0x21, 0x10]);
        expected.extend(b"Hello World 3\n");
        expected.extend([0x1D, 0x21, 0x00]);
        expected.extend(b"Hello World 4\n");
        assert_eq!(printer.buffer(), expected.as_slice());
    }

    #[test]
    fn test_cli_parses_print() {
        let cli = Cli::try_parse_from([
            "thermal", "print", "--bold", "--align", "center", "--size", "2x2", "--hex", "a", "b",
        ])
        .unwrap();
        match cli.command {
            Commands::Print {
                lines,
                bold,
                connection,
                ..
            } => {
                assert_eq!(lines, vec!["a", "b"]);
                assert!(bold);
                assert!(connection.hex);
                assert_eq!(connection.preset, "58mm");
            }
            Commands::Demo { .. } => panic!("expected print"),
        }
    }
}
