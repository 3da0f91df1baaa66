// crates/infra/src/audit.rs
use std::borrow::Cow;
use std::io::Write;
use std::sync::Mutex;

use chrono::{DateTime, Local};
use serde::Serialize;
use shell_wc_ports::audit::{InputEvent, InputRecorder, InputSource};

/// One serialized audit line.
#[derive(Debug, Serialize)]
struct AuditRecord<'a> {
    timestamp: DateTime<Local>,
    realm: &'static str,
    source: InputSource,
    input: Cow<'a, str>,
}

/// Writes one JSON line per observed input event.
///
/// Audit failures never disturb the session; a record that cannot be
/// written is dropped.
pub struct JsonlRecorder<W: Write + Send> {
    sink: Mutex<W>,
}

impl<W: Write + Send> JsonlRecorder<W> {
    pub fn new(sink: W) -> Self {
        Self { sink: Mutex::new(sink) }
    }
}

impl<W: Write + Send> InputRecorder for JsonlRecorder<W> {
    fn record(&self, event: &InputEvent) {
        let record = AuditRecord {
            timestamp: Local::now(),
            realm: "wc",
            source: event.source,
            input: String::from_utf8_lossy(&event.content),
        };
        if let Ok(line) = serde_json::to_string(&record)
            && let Ok(mut sink) = self.sink.lock()
        {
            let _ = writeln!(sink, "{line}");
        }
    }
}

/// Recorder for hosts that do not audit input.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecorder;

impl InputRecorder for NullRecorder {
    fn record(&self, _event: &InputEvent) {}
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_one_json_line_per_event() {
        let buf = SharedBuf::default();
        let recorder = JsonlRecorder::new(buf.clone());

        recorder.record(&InputEvent::terminal("ls -la".as_bytes()));
        recorder.record(&InputEvent::pipe("chunk".as_bytes()));

        let written = buf.contents();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"source\":\"terminal\""));
        assert!(lines[0].contains("ls -la"));
        assert!(lines[1].contains("\"source\":\"pipe\""));
    }

    #[test]
    fn non_utf8_content_is_rendered_lossily() {
        let buf = SharedBuf::default();
        let recorder = JsonlRecorder::new(buf.clone());

        recorder.record(&InputEvent::pipe(vec![0xff, b'o', b'k']));

        assert!(buf.contents().contains("ok"));
    }
}
