//! Colorized console handler
//!
//! Each record is first encoded by a structured delegate (a [`JsonHandler`]
//! by default) into a scratch buffer shared by the handler lineage. The
//! encoded object is decoded back into a map, the buffer is emptied, and the
//! map is rendered as indented JSON after the time, level and message:
//!
//! ```text
//! [09:30:00] INFO: hello {
//!   "k": "v"
//! }
//! ```

use super::json::JsonHandler;
use crate::core::{
    suppress_defaults, Attr, Handler, HandlerError, HandlerOptions, Level, Record, Result,
    Scratch, ScratchBuffer, Segment,
};
use parking_lot::Mutex;
use serde_json::{Map, Value as JsonValue};
use std::io::{self, Write};
use std::sync::Arc;

/// Time format of the leading segment
pub const TIME_FORMAT: &str = "[%H:%M:%S]";

type SharedOutput = Arc<Mutex<Box<dyn Write + Send>>>;

/// Human-readable, colorized rendering of structured records.
///
/// Handlers derived through `with_attrs` and `with_group` share the scratch
/// buffer, its gate and the output with the handler they came from.
///
/// Only attributes are filtered for the `time`, `level` and `msg` keys; a
/// group with one of those names (from `with_group` or [`Attr::group`]) is
/// still rendered.
///
/// # Example
///
/// ```
/// use prettylog::{Handler, HandlerOptions, Level, PrettyHandler, Record};
///
/// let handler = PrettyHandler::new(HandlerOptions::default());
/// let handler = handler.with_attrs(vec![prettylog::Attr::new("service", "api")]);
/// handler.handle(&Record::new(Level::INFO, "started")).unwrap();
/// ```
#[derive(Clone)]
pub struct PrettyHandler {
    delegate: Arc<dyn Handler>,
    scratch: Scratch,
    output: SharedOutput,
}

impl PrettyHandler {
    /// Render to standard output
    pub fn new(options: HandlerOptions) -> Self {
        Self::with_output(options, io::stdout())
    }

    /// Render to `output` instead of standard output
    pub fn with_output<W: Write + Send + 'static>(options: HandlerOptions, output: W) -> Self {
        let buffer = ScratchBuffer::new();
        let options = HandlerOptions {
            replace_attr: Some(suppress_defaults(options.replace_attr)),
            ..options
        };
        let delegate = JsonHandler::new(buffer.clone(), options);
        Self::from_delegate(Arc::new(delegate), buffer, output)
    }

    /// Wrap a custom delegate that writes one JSON object per record into `buffer`.
    ///
    /// The delegate is used as is; reserved keys are only suppressed if it
    /// was built with [`suppress_defaults`].
    pub fn from_delegate<W: Write + Send + 'static>(
        delegate: Arc<dyn Handler>,
        buffer: ScratchBuffer,
        output: W,
    ) -> Self {
        let output: Box<dyn Write + Send> = Box::new(output);
        Self {
            delegate,
            scratch: Scratch::new(buffer),
            output: Arc::new(Mutex::new(output)),
        }
    }

    /// The buffer shared by this handler's lineage
    pub fn scratch_buffer(&self) -> &ScratchBuffer {
        self.scratch.buffer()
    }

    /// Encode through the delegate and decode the result, holding the buffer lease
    fn compute_attrs(&self, record: &Record) -> Result<Map<String, JsonValue>> {
        let lease = self.scratch.lease();

        self.delegate.handle(record).map_err(|e| match e {
            HandlerError::Encode { .. } => e,
            other => HandlerError::encode_with("inner handler failed", other),
        })?;

        lease
            .buffer()
            .with_bytes(|bytes| serde_json::from_slice::<Map<String, JsonValue>>(bytes))
            .map_err(HandlerError::decode)
    }

    fn render(&self, record: &Record, attrs: &Map<String, JsonValue>) -> Result<String> {
        let attrs = serde_json::to_string_pretty(attrs).map_err(HandlerError::reencode)?;

        let mut segments = Vec::with_capacity(4);
        if let Some(time) = record.time {
            segments.push(Segment::Time.paint(&time.format(TIME_FORMAT).to_string()));
        }
        segments.push(Segment::Level(record.level).paint(&format!("{}:", record.level)));
        segments.push(Segment::Message.paint(&record.message));
        segments.push(Segment::Attrs.paint(&attrs));

        let mut line = segments.join(" ");
        line.push('\n');
        Ok(line)
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut output = self.output.lock();
        output
            .write_all(line.as_bytes())
            .and_then(|()| output.flush())
            .map_err(|e| HandlerError::io("writing rendered record", e))
    }

    fn derive(&self, delegate: Arc<dyn Handler>) -> Arc<dyn Handler> {
        Arc::new(Self {
            delegate,
            scratch: self.scratch.clone(),
            output: Arc::clone(&self.output),
        })
    }
}

impl Handler for PrettyHandler {
    fn enabled(&self, level: Level) -> bool {
        self.delegate.enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let attrs = self.compute_attrs(record)?;
        let line = self.render(record, &attrs)?;
        self.write_line(&line)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        self.derive(self.delegate.with_attrs(attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        self.derive(self.delegate.with_group(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    /// Output sink tests can read back
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            strip_ansi(&String::from_utf8(self.0.lock().clone()).unwrap())
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Output whose every write fails
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Delegate that writes fixed bytes, or fails
    struct Scripted {
        buffer: ScratchBuffer,
        output: &'static [u8],
        fail: bool,
    }

    impl Handler for Scripted {
        fn enabled(&self, _level: Level) -> bool {
            true
        }

        fn handle(&self, _record: &Record) -> Result<()> {
            self.buffer.clone().write_all(self.output).unwrap();
            if self.fail {
                return Err(HandlerError::io(
                    "scripted failure",
                    io::Error::new(io::ErrorKind::Other, "boom"),
                ));
            }
            Ok(())
        }

        fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Handler> {
            unimplemented!()
        }

        fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
            unimplemented!()
        }
    }

    fn at_0930() -> chrono::DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 9, 30, 0)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_render_scenario() {
        let out = Captured::default();
        let handler = PrettyHandler::with_output(HandlerOptions::default(), out.clone());

        handler
            .handle(
                &Record::new(Level::INFO, "hello")
                    .with_time(at_0930())
                    .with_attr("k", "v"),
            )
            .unwrap();

        assert_eq!(out.text(), "[09:30:00] INFO: hello {\n  \"k\": \"v\"\n}\n");
    }

    #[test]
    fn test_empty_attrs_render_as_braces() {
        let out = Captured::default();
        let handler = PrettyHandler::with_output(HandlerOptions::default(), out.clone());

        handler
            .handle(&Record::new(Level::WARN, "bare").with_time(at_0930()))
            .unwrap();

        assert_eq!(out.text(), "[09:30:00] WARN: bare {}\n");
    }

    #[test]
    fn test_custom_level_label() {
        let out = Captured::default();
        let handler = PrettyHandler::with_output(
            HandlerOptions::default().with_level(Level::DEBUG),
            out.clone(),
        );

        handler
            .handle(&Record::new(Level(2), "between").with_time(at_0930()))
            .unwrap();

        assert_eq!(out.text(), "[09:30:00] INFO+2: between {}\n");
    }

    #[test]
    fn test_enabled_delegates() {
        let handler = PrettyHandler::with_output(
            HandlerOptions::default().with_level(Level::WARN),
            Captured::default(),
        );
        assert!(!handler.enabled(Level::INFO));
        assert!(handler.enabled(Level::ERROR));
    }

    #[test]
    fn test_decode_error_releases_buffer() {
        let buffer = ScratchBuffer::new();
        let delegate = Scripted {
            buffer: buffer.clone(),
            output: b"not json\n",
            fail: false,
        };
        let handler = PrettyHandler::from_delegate(Arc::new(delegate), buffer, Captured::default());

        for _ in 0..2 {
            let err = handler.handle(&Record::new(Level::INFO, "x")).unwrap_err();
            assert!(matches!(err, HandlerError::Decode { .. }));
            assert!(handler.scratch_buffer().is_empty());
        }
    }

    #[test]
    fn test_delegate_error_is_wrapped_as_encode() {
        let buffer = ScratchBuffer::new();
        let delegate = Scripted {
            buffer: buffer.clone(),
            output: b"{\"partial\":",
            fail: true,
        };
        let handler = PrettyHandler::from_delegate(Arc::new(delegate), buffer, Captured::default());

        let err = handler.handle(&Record::new(Level::INFO, "x")).unwrap_err();
        assert!(matches!(err, HandlerError::Encode { .. }));
        assert!(handler.scratch_buffer().is_empty());
    }

    #[test]
    fn test_segments_are_colored() {
        colored::control::set_override(true);
        let out = Captured::default();
        let handler = PrettyHandler::with_output(HandlerOptions::default(), out.clone());

        handler
            .handle(&Record::new(Level::ERROR, "boom").with_time(at_0930()))
            .unwrap();

        let raw = String::from_utf8(out.0.lock().clone()).unwrap();
        assert!(raw.contains(&Segment::Time.paint("[09:30:00]")));
        assert!(raw.contains(&Segment::Level(Level::ERROR).paint("ERROR:")));
        assert!(raw.contains(&Segment::Message.paint("boom")));
        assert!(raw.contains(&Segment::Attrs.paint("{}")));
    }

    #[test]
    fn test_output_failure_is_io_error() {
        let handler = PrettyHandler::with_output(HandlerOptions::default(), Broken);

        for _ in 0..2 {
            let err = handler
                .handle(&Record::new(Level::INFO, "lost").with_attr("k", "v"))
                .unwrap_err();
            assert!(matches!(err, HandlerError::Io { .. }));
            assert!(handler.scratch_buffer().is_empty());
        }
    }

    #[test]
    fn test_group_names_are_not_suppressed() {
        let out = Captured::default();
        let handler = PrettyHandler::with_output(HandlerOptions::default(), out.clone())
            .with_group("msg");

        handler
            .handle(
                &Record::new(Level::INFO, "grouped")
                    .with_time(at_0930())
                    .with_attr("k", 1),
            )
            .unwrap();

        assert_eq!(
            out.text(),
            "[09:30:00] INFO: grouped {\n  \"msg\": {\n    \"k\": 1\n  }\n}\n"
        );
    }
}
