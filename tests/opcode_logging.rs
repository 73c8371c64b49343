//! # Opcode Logging
//!
//! Every opcode family appended to the buffer leaves a `debug` record, and an
//! unknown font name leaves a `warn`.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use thermal_printer::protocol::text::{Justification, Rotation};
use thermal_printer::{MemoryTransport, ThermalPrinter};

// ============================================================================
// HELPERS
// ============================================================================

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("thermal_printer")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn take() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.records.lock().unwrap())
}

fn has(records: &[(Level, String)], level: Level, prefix: &str) -> bool {
    records
        .iter()
        .any(|(l, msg)| *l == level && msg.starts_with(prefix))
}

// ============================================================================
// TESTS
// ============================================================================

// One test per binary: the logger is process-global.
#[test]
fn each_opcode_family_is_logged() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let mut printer = ThermalPrinter::new(MemoryTransport::new()).unwrap();
    assert!(has(&take(), Level::Debug, "direct reset"));

    printer.set_bold(true);
    assert!(has(&take(), Level::Debug, "print mode 0x08"));

    printer.set_rotation(Rotation::Clockwise);
    assert!(has(&take(), Level::Debug, "rotation 1"));

    printer.set_upside_down(true);
    assert!(has(&take(), Level::Debug, "upside down true"));

    printer.set_magnification(3, 1).unwrap();
    assert!(has(&take(), Level::Debug, "magnification 3x1"));

    printer.set_justification(Justification::Center);
    let records = take();
    assert!(has(&records, Level::Debug, "terminated open line"));
    assert!(has(&records, Level::Debug, "justification Center"));

    printer.set_font_name("Z");
    assert!(has(&take(), Level::Warn, "font must be A or B"));

    printer.print().unwrap();
    assert!(has(&take(), Level::Debug, "flushing"));
}
