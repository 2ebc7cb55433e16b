//! Checks that clamping invalid input leaves a debug record behind.
//!
//! Runs in its own test binary so the capturing logger is the only one
//! installed.
use circle_tasks::{pool_cost, Circle};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .expect("records lock")
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn drain() -> Vec<(Level, String)> {
    std::mem::take(&mut *LOGGER.records.lock().expect("records lock"))
}

#[test]
fn clamps_emit_debug_records_naming_the_value() {
    log::set_logger(&LOGGER).expect("no other logger installed");
    log::set_max_level(LevelFilter::Debug);

    let mut circle = Circle::new(3.0);
    assert!(drain().is_empty(), "valid input logs nothing");

    circle.set_ference(-1.0);
    let records = drain();
    assert_eq!(records.len(), 1, "unexpected records: {records:?}");
    let (level, message) = &records[0];
    assert_eq!(*level, Level::Debug);
    assert!(message.contains("ference"), "got {message}");
    assert!(message.contains("-1"), "got {message}");

    assert_eq!(pool_cost(3.0, -1.0, 100.0, 50.0), 0.0);
    let records = drain();
    assert_eq!(records.len(), 1, "unexpected records: {records:?}");
    let (level, message) = &records[0];
    assert_eq!(*level, Level::Debug);
    assert!(message.contains("walkway width"), "got {message}");
    assert!(message.contains("-1"), "got {message}");
}
