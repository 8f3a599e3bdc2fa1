//! Tests for the log records emitted by the hasher.
//!
//! Installs its own logger, so it lives in a separate test binary.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use sipcore::{Hasher, Key};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool { true }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };

fn take_records() -> Vec<(Level, String)> {
    // tests in this binary run one at a time under the lock below
    std::mem::take(&mut *CAPTURE.records.lock().unwrap())
}

static SERIAL: Mutex<()> = Mutex::new(());

fn install() {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);
}

fn warnings(records: &[(Level, String)]) -> Vec<&str> {
    records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message.as_str())
        .collect()
}

#[test]
fn update_after_finalize_warns() {
    let _guard = SERIAL.lock().unwrap();
    install();

    let mut hasher = Hasher::new(Key::from_bytes([7; Key::LEN]));
    hasher.update(b"abc");
    hasher.finalize();
    assert!(warnings(&take_records()).is_empty());

    hasher.update(b"def");

    let records = take_records();
    let warned = warnings(&records);
    assert_eq!(warned.len(), 1);
    assert!(warned[0].contains("`update`"));
    assert!(warned[0].contains("SipHash-2-4"));
}

#[test]
fn finalize_twice_warns() {
    let _guard = SERIAL.lock().unwrap();
    install();

    let mut hasher = Hasher::new(Key::from_bytes([7; Key::LEN]));
    hasher.finalize();
    hasher.finalize();

    let records = take_records();
    let warned = warnings(&records);
    assert_eq!(warned.len(), 1);
    assert!(warned[0].contains("`finalize`"));
}

#[test]
fn reset_is_traced_and_clears_the_misuse() {
    let _guard = SERIAL.lock().unwrap();
    install();

    let mut hasher = Hasher::new(Key::from_bytes([7; Key::LEN]));
    hasher.finalize();
    take_records();

    hasher.reset();
    hasher.update(b"abc");
    hasher.finalize();

    let records = take_records();
    assert!(warnings(&records).is_empty());
    assert!(records.iter().any(|(level, message)| {
        *level == Level::Trace && message.contains("resetting")
    }));
}
