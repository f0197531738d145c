//! JSON handler for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL format). This is
//! the structured encoder [`PrettyHandler`](super::PrettyHandler) delegates
//! to, and is usable on its own for machine-readable output.

use crate::core::{
    Attr, Handler, HandlerError, HandlerOptions, Level, Record, Result, Value, LEVEL_KEY,
    MESSAGE_KEY, SOURCE_KEY, TIME_KEY,
};
use chrono::SecondsFormat;
use parking_lot::Mutex;
use serde_json::{Map, Value as JsonValue};
use std::io::Write;
use std::sync::Arc;

type Object = Map<String, JsonValue>;

/// State bound through `with_attrs`/`with_group`, in call order
#[derive(Debug, Clone)]
enum Bound {
    Group(String),
    Attrs(Vec<Attr>),
}

/// Structured encoder producing one JSON object per record.
///
/// Output keys are emitted in sorted order. Attributes bound after a
/// `with_group` call, and the record's own attributes, nest under that
/// group; groups that end up empty are left out.
pub struct JsonHandler<W: Write + Send + 'static> {
    writer: Arc<Mutex<W>>,
    options: HandlerOptions,
    bound: Vec<Bound>,
}

impl<W: Write + Send + 'static> Clone for JsonHandler<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
            options: self.options.clone(),
            bound: self.bound.clone(),
        }
    }
}

impl<W: Write + Send + 'static> JsonHandler<W> {
    pub fn new(writer: W, options: HandlerOptions) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            options,
            bound: Vec::new(),
        }
    }

    /// Build the JSON object for `record` without writing it
    pub fn encode(&self, record: &Record) -> Result<Object> {
        let mut root = Object::new();
        let mut groups = Vec::new();

        if let Some(time) = record.time {
            let time = Attr::new(TIME_KEY, time.to_rfc3339_opts(SecondsFormat::AutoSi, false));
            self.encode_attr(&time, &mut groups, &mut root)?;
        }
        self.encode_attr(
            &Attr::new(LEVEL_KEY, record.level.to_string()),
            &mut groups,
            &mut root,
        )?;
        if self.options.add_source {
            if let Some(source) = &record.source {
                let mut location = Object::new();
                if let Some(function) = &source.function {
                    location.insert("function".to_string(), function.clone().into());
                }
                location.insert("file".to_string(), source.file.clone().into());
                location.insert("line".to_string(), source.line.into());
                let source = Attr::new(SOURCE_KEY, JsonValue::Object(location));
                self.encode_attr(&source, &mut groups, &mut root)?;
            }
        }
        self.encode_attr(
            &Attr::new(MESSAGE_KEY, record.message.clone()),
            &mut groups,
            &mut root,
        )?;

        for bound in &self.bound {
            match bound {
                Bound::Group(name) => groups.push(name.clone()),
                Bound::Attrs(attrs) => self.encode_into(&mut root, attrs, &mut groups)?,
            }
        }
        self.encode_into(&mut root, &record.attrs, &mut groups)?;

        Ok(root)
    }

    /// Encode `attrs` and place them under the current group path, if any survive
    fn encode_into(&self, root: &mut Object, attrs: &[Attr], groups: &mut Vec<String>) -> Result<()> {
        let mut encoded = Object::new();
        self.encode_attrs(attrs, groups, &mut encoded)?;
        if !encoded.is_empty() {
            descend(root, groups).extend(encoded);
        }
        Ok(())
    }

    fn encode_attrs(&self, attrs: &[Attr], groups: &mut Vec<String>, out: &mut Object) -> Result<()> {
        for attr in attrs {
            self.encode_attr(attr, groups, out)?;
        }
        Ok(())
    }

    fn encode_attr(&self, attr: &Attr, groups: &mut Vec<String>, out: &mut Object) -> Result<()> {
        if attr.is_empty_group() {
            return Ok(());
        }
        if let Value::Group(members) = &attr.value {
            return self.encode_group(&attr.key, members, groups, out);
        }

        let attr = match &self.options.replace_attr {
            Some(replace) => match replace(groups.as_slice(), attr.clone()) {
                Some(attr) => attr,
                None => return Ok(()),
            },
            None => attr.clone(),
        };

        match attr.value {
            Value::Group(members) => self.encode_group(&attr.key, &members, groups, out),
            value => {
                out.insert(attr.key, encode_value(&value)?);
                Ok(())
            }
        }
    }

    fn encode_group(
        &self,
        key: &str,
        members: &[Attr],
        groups: &mut Vec<String>,
        out: &mut Object,
    ) -> Result<()> {
        if key.is_empty() {
            return self.encode_attrs(members, groups, out);
        }

        groups.push(key.to_string());
        let mut inner = Object::new();
        let result = self.encode_attrs(members, groups, &mut inner);
        groups.pop();
        result?;

        if !inner.is_empty() {
            out.insert(key.to_string(), JsonValue::Object(inner));
        }
        Ok(())
    }
}

/// Walk (creating as needed) nested objects along `path`
fn descend<'a>(mut map: &'a mut Object, path: &[String]) -> &'a mut Object {
    for name in path {
        let entry = map
            .entry(name.clone())
            .or_insert_with(|| JsonValue::Object(Object::new()));
        if !entry.is_object() {
            *entry = JsonValue::Object(Object::new());
        }
        let JsonValue::Object(next) = entry else {
            unreachable!("entry was just made an object");
        };
        map = next;
    }
    map
}

fn encode_value(value: &Value) -> Result<JsonValue> {
    Ok(match value {
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Int(i) => JsonValue::from(*i),
        Value::Uint(u) => JsonValue::from(*u),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or_else(|| HandlerError::encode(format!("json: unsupported value: {}", f)))?,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Duration(d) => i64::try_from(d.as_nanos())
            .map(JsonValue::from)
            .map_err(|e| HandlerError::encode_with(format!("duration {:?} out of range", d), e))?,
        Value::Time(t) => JsonValue::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
        Value::Json(v) => v.clone(),
        Value::Group(attrs) => {
            let mut object = Object::new();
            for attr in attrs {
                object.insert(attr.key.clone(), encode_value(&attr.value)?);
            }
            JsonValue::Object(object)
        }
        Value::Null => JsonValue::Null,
    })
}

impl<W: Write + Send + 'static> Handler for JsonHandler<W> {
    fn enabled(&self, level: Level) -> bool {
        level >= self.options.min_level()
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let object = self.encode(record)?;
        let mut line = serde_json::to_vec(&object)
            .map_err(|e| HandlerError::encode_with("serializing record", e))?;
        line.push(b'\n');

        self.writer
            .lock()
            .write_all(&line)
            .map_err(|e| HandlerError::encode_with("writing encoded record", e))
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let mut handler = self.clone();
        if !attrs.is_empty() {
            handler.bound.push(Bound::Attrs(attrs));
        }
        Arc::new(handler)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut handler = self.clone();
        if !name.is_empty() {
            handler.bound.push(Bound::Group(name.to_string()));
        }
        Arc::new(handler)
    }
}
