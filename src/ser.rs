//! INI encoding.
//!
//! This module writes an [`IniMap`] as INI text and provides the serde
//! [`ValueSerializer`] that turns any `T: Serialize` into a [`Value`].
//!
//! ## Overview
//!
//! At every level the encoder writes, in key order:
//!
//! - **Scalars** as `key=value` lines ending in the configured line ending
//! - **Arrays** as one `key[]=item` line per element, each ending in `\n`
//!
//! and then each nested section under a `[parent.child]` header, separated
//! from preceding output by one blank line. A header is only written for a
//! section that has scalar or array lines of its own.
//!
//! ## Usage
//!
//! ```rust
//! use serde_ini::{encode, ini, EncodeOptions, LineEnding};
//!
//! let doc = ini!({
//!     "name": "demo",
//!     "server": { "host": "localhost", "tls": { "port": "8443" } }
//! });
//!
//! let text = encode(
//!     doc.as_section().unwrap(),
//!     EncodeOptions::new().with_line_ending(LineEnding::Lf),
//! )
//! .unwrap();
//! assert_eq!(
//!     text,
//!     "name=demo\n\n[server]\nhost=localhost\n\n[server.tls]\nport=8443\n"
//! );
//! ```

use crate::{escape, escape_str, path, EncodeOptions, Error, IniMap, Number, Result, Value};
use serde::{ser, Serialize};
use tracing::trace;

/// Encodes a document as INI text.
///
/// `options` may be an [`EncodeOptions`] or just a section name.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if an array holds an array or a section,
/// and [`Error::DepthLimitExceeded`] if sections nest deeper than
/// [`EncodeOptions::max_depth`].
///
/// # Examples
///
/// ```rust
/// use serde_ini::{encode, ini, EncodeOptions, LineEnding};
///
/// let doc = ini!({ "o": 1 });
/// let options = EncodeOptions::from("S").with_line_ending(LineEnding::Lf);
/// assert_eq!(encode(doc.as_section().unwrap(), options).unwrap(), "[S]\no=1\n");
/// ```
pub fn encode(doc: &IniMap, options: impl Into<EncodeOptions>) -> Result<String> {
    let options = options.into();
    encode_section(doc, options.section_name(), &options, 0)
}

fn encode_section(
    doc: &IniMap,
    section: Option<&str>,
    options: &EncodeOptions,
    depth: usize,
) -> Result<String> {
    if depth > options.max_depth {
        return Err(Error::depth_limit(options.max_depth));
    }

    let eol = options.line_ending.as_str();
    let separator = options.separator();
    let mut out = String::new();
    let mut children = Vec::new();

    for (key, value) in doc.iter() {
        match value {
            Value::Array(items) => {
                let array_key = escape_str(&format!("{}[]", key));
                for item in items {
                    out.push_str(&array_key);
                    out.push_str(separator);
                    out.push_str(&escape(item)?);
                    // array lines always end in LF, whatever `eol` is
                    out.push('\n');
                }
            }
            Value::Section(child) => children.push((key, child)),
            scalar => {
                out.push_str(&escape_str(key));
                out.push_str(separator);
                out.push_str(&escape(scalar)?);
                out.push_str(eol);
            }
        }
    }

    if let Some(name) = section {
        if !out.is_empty() {
            out.insert_str(0, &format!("[{}]{}", escape_str(name), eol));
        }
    }

    for (key, child) in children {
        let name = path::join(&path::split(key));
        let child_section = match section {
            Some(parent) => format!("{}.{}", parent, name),
            None => name,
        };
        trace!(section = %child_section, depth = depth + 1, "encoding child section");

        let child_name = Some(child_section.as_str()).filter(|s| !s.is_empty());
        let text = encode_section(child, child_name, options, depth + 1)?;
        if !out.is_empty() && !text.is_empty() {
            out.push_str(eol);
        }
        out.push_str(&text);
    }

    Ok(out)
}

/// Serializer producing a [`Value`] from any `T: Serialize`.
///
/// Structs and maps become sections, sequences become arrays, enums follow the
/// externally tagged convention (`Unit` as a string, others as a one-key
/// section). Map keys must be strings, numbers or booleans.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: IniMap,
    current_key: Option<String>,
}

pub struct SerializeVariantVec {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeVariantMap {
    variant: &'static str,
    map: IniMap,
}

fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Wraps `value` as `{variant: value}`.
fn tagged(variant: &'static str, value: Value) -> Value {
    let mut map = IniMap::with_capacity(1);
    map.insert(variant.to_string(), value);
    Value::Section(map)
}

fn wide_integer<T: ToString>(v: T, narrow: Option<i64>) -> Value {
    match narrow {
        Some(i) => Value::Number(Number::Integer(i)),
        None => Value::String(v.to_string()),
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVariantVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeVariantMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(wide_integer(v, i64::try_from(v).ok()))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    // Integers beyond i64 are kept exact as text rather than rounded to a float.
    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(wide_integer(v, i64::try_from(v).ok()))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(wide_integer(v, i64::try_from(v).ok()))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariantVec> {
        Ok(SerializeVariantVec {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariantMap> {
        Ok(SerializeVariantMap {
            variant,
            map: IniMap::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: IniMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeVariantVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::Array(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s,
            scalar @ (Value::Number(_) | Value::Bool(_)) => scalar.to_string(),
            other => {
                return Err(Error::unsupported_type(&format!(
                    "{} as a map key",
                    other.type_name()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Section(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Section(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeVariantMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::Section(self.map)))
    }
}
