//! INI decoding.
//!
//! This module turns INI text into an [`IniMap`] and provides the serde
//! [`ValueDeserializer`] that maps a decoded [`Value`] onto Rust types.
//!
//! ## Overview
//!
//! Decoding is a single pass over the input lines:
//!
//! - **Lenient**: comment lines and lines matching no grammar are dropped, never reported
//! - **Sections**: `[name]` switches the write target to a top-level section
//! - **Arrays**: `key[]=value` lines accumulate into an array under `key`
//! - **Literals**: bare `true`, `false` and `null` become typed values; a key without `=` is `true`
//! - **Dotted sections**: after the pass, `[a.b]` is folded into `a` as the nested section `b`
//!
//! ## Usage
//!
//! ```rust
//! use serde_ini::{decode, Value};
//!
//! let doc = decode("debug\n[server]\nhost=localhost\n[server.tls]\nport=8443");
//!
//! assert_eq!(doc.get("debug"), Some(&Value::Bool(true)));
//! let server = doc.get("server").unwrap();
//! assert_eq!(server.get("host"), Some(&Value::from("localhost")));
//! assert_eq!(
//!     server.get("tls").and_then(|tls| tls.get("port")),
//!     Some(&Value::from("8443"))
//! );
//! ```
//!
//! Typed decoding goes through serde:
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { host: String, port: u16 }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config { server: Server }
//!
//! let config: Config = serde_ini::from_str("[server]\nhost=localhost\nport=8080").unwrap();
//! assert_eq!(config.server.port, 8080);
//! ```

use crate::value::describe;
use crate::{path, unescape, Error, IniMap, Number, Result, Value};
use serde::de::IntoDeserializer;
use serde::de::{self, DeserializeOwned};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, trace};

/// How a single input line was understood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty line
    Blank,
    /// Optional whitespace followed by `;` or `#`
    Comment,
    /// `[name]`, holding the raw text between the brackets
    Section(&'a str),
    /// `key=value`, or a bare `key` when `value` is `None`
    Assignment { key: &'a str, value: Option<&'a str> },
    /// Anything else, e.g. a line starting with `=` or a value holding a
    /// U+2028/U+2029 separator
    Unmatched,
}

impl<'a> Line<'a> {
    /// Classifies one line. The line must not contain CR or LF.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::de::Line;
    ///
    /// assert_eq!(Line::classify("  # note"), Line::Comment);
    /// assert_eq!(Line::classify("[db]"), Line::Section("db"));
    /// assert_eq!(
    ///     Line::classify("a=b=c"),
    ///     Line::Assignment { key: "a", value: Some("b=c") }
    /// );
    /// assert_eq!(Line::classify("flag"), Line::Assignment { key: "flag", value: None });
    /// assert_eq!(Line::classify("=orphan"), Line::Unmatched);
    /// ```
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return Line::Blank;
        }
        if line.trim_start().starts_with([';', '#']) {
            return Line::Comment;
        }
        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            if !name.contains(']') {
                return Line::Section(name);
            }
        }
        match line.find('=') {
            Some(0) => Line::Unmatched,
            Some(eq) if line[eq + 1..].contains(['\u{2028}', '\u{2029}']) => Line::Unmatched,
            Some(eq) => Line::Assignment {
                key: &line[..eq],
                value: Some(&line[eq + 1..]),
            },
            None => Line::Assignment {
                key: line,
                value: None,
            },
        }
    }
}

/// Incremental INI decoder.
///
/// Feed it lines with [`Decoder::push_line`] and collect the document with
/// [`Decoder::finish`]. [`decode`] does both for a whole string.
///
/// # Examples
///
/// ```rust
/// use serde_ini::de::Decoder;
/// use serde_ini::Value;
///
/// let mut decoder = Decoder::new();
/// for line in ["[a]", "x[]=1", "x[]=2"] {
///     decoder.push_line(line);
/// }
/// let doc = decoder.finish();
///
/// let x = doc.get("a").and_then(|a| a.get("x"));
/// assert_eq!(x, Some(&Value::from(vec!["1", "2"])));
/// ```
#[derive(Debug, Default)]
pub struct Decoder {
    out: IniMap,
    section: Option<String>,
    lines: usize,
}

impl Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one line to the document under construction and reports how
    /// it was understood.
    pub fn push_line<'a>(&mut self, line: &'a str) -> Line<'a> {
        self.lines += 1;
        let parsed = Line::classify(line);
        match parsed {
            Line::Blank => {}
            Line::Comment | Line::Unmatched => {
                trace!(line = self.lines, kind = ?parsed, "skipping line");
            }
            Line::Section(raw) => {
                let name = key_text(unescape(raw));
                self.out
                    .entry(name.clone())
                    .or_insert_with(Value::default)
                    .make_section();
                self.section = Some(name);
            }
            Line::Assignment { key, value } => self.assign(key, value),
        }
        parsed
    }

    fn assign(&mut self, raw_key: &str, raw_value: Option<&str>) {
        let key = key_text(unescape(raw_key));
        let value = match raw_value.map(unescape) {
            Some(Value::String(s)) => literal(s),
            Some(other) => other,
            None => Value::Bool(true),
        };

        let is_array = key.len() > 2 && key.ends_with("[]");
        let key = if is_array {
            key[..key.len() - 2].to_string()
        } else {
            key
        };

        let target = match self.section.as_deref() {
            None => &mut self.out,
            Some(name) => self
                .out
                .entry(name.to_string())
                .or_insert_with(Value::default)
                .make_section(),
        };

        if is_array {
            let slot = target
                .entry(key.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if !slot.is_array() {
                let single = std::mem::take(slot);
                *slot = Value::Array(vec![single]);
            }
        }

        // a key that already holds an array keeps accumulating even without `[]`
        match target.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            _ => {
                target.insert(key, value);
            }
        }
    }

    /// Folds dotted top-level sections into their parents and returns the document.
    #[must_use]
    pub fn finish(mut self) -> IniMap {
        fold_dotted_sections(&mut self.out);
        debug!(
            lines = self.lines,
            keys = self.out.len(),
            "decoded INI document"
        );
        self.out
    }
}

/// Decodes INI text into a document.
///
/// Lines may end in any mix of CR and LF. Decoding never fails: lines that
/// match neither the section nor the assignment grammar are skipped.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{decode, ini};
///
/// let doc = decode("[a]\ny=1\n[a.b]\nx=2");
/// let expected = ini!({ "a": { "y": "1", "b": { "x": "2" } } });
/// assert_eq!(Some(&doc), expected.as_section());
/// ```
#[must_use]
pub fn decode(text: &str) -> IniMap {
    let mut decoder = Decoder::new();
    for line in text.split(['\r', '\n']).filter(|line| !line.is_empty()) {
        decoder.push_line(line);
    }
    decoder.finish()
}

/// Bare `true`, `false` and `null` become typed values.
fn literal(s: String) -> Value {
    match s.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::String(s),
    }
}

/// Keys and section names are text even when a quoted literal decodes to
/// something else, e.g. `'true'=x`.
fn key_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Moves every top-level section whose name contains a path (`a.b`) or an
/// escaped dot (`a\.b`) to the place that name describes.
///
/// `{a: {y}, "a.b": {x}}` becomes `{a: {y, b: {x}}}`. Intermediate sections are
/// created as needed and replace any non-section value in the way.
///
/// A folded key keeps answering to its old name for the rest of the pass, so
/// `[x\.y]` followed by `[x\.y.z]` nests `z` inside the section now stored at `x.y`.
fn fold_dotted_sections(out: &mut IniMap) {
    let keys: Vec<String> = out.keys().cloned().collect();
    let mut moved: HashMap<String, Vec<String>> = HashMap::new();

    for key in keys {
        if !out.get(&key).is_some_and(Value::is_section) {
            continue;
        }

        let mut parents = path::split(&key);
        let last = parents.pop().unwrap_or_default();
        let name = path::unescape_dots(&last);
        if parents.is_empty() && name == last {
            continue;
        }

        let Some(section) = out.remove(&key) else {
            continue;
        };
        let parents = resolve_moved(out, &moved, parents);
        let mut cur = &mut *out;
        for parent in &parents {
            cur = cur
                .entry(parent.clone())
                .or_insert_with(Value::default)
                .make_section();
        }
        trace!(from = %key, "folding dotted section");
        cur.insert(name.clone(), section);

        let mut destination = parents;
        destination.push(name);
        moved.insert(key, destination);
    }
}

/// Rewrites a path whose first segment names an already folded section so
/// that it starts from where that section went.
fn resolve_moved(
    out: &IniMap,
    moved: &HashMap<String, Vec<String>>,
    mut parents: Vec<String>,
) -> Vec<String> {
    while let Some(first) = parents.first() {
        if out.contains_key(first) {
            break;
        }
        let Some(target) = moved.get(first) else {
            break;
        };
        parents.splice(0..1, target.iter().cloned());
    }
    parents
}

/// Deserializes a `T` from a decoded value.
///
/// # Errors
///
/// Returns an error when the value does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Serde deserializer over an owned [`Value`].
///
/// INI values are text, so requests for numbers, booleans and chars parse the
/// string, and a lone scalar satisfies a request for a sequence.
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::type_mismatch(expected, &describe(&self.value))
    }

    fn parse_scalar<T: FromStr>(&self, expected: &str) -> Result<T> {
        let parsed = match &self.value {
            Value::String(s) => s.trim().parse::<T>().ok(),
            Value::Number(n) => n.to_string().parse::<T>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| self.mismatch(expected))
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let parsed: $ty = self.parse_scalar(stringify!($ty))?;
                visitor.$visit(parsed)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Section(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match &self.value {
            Value::Bool(b) => visitor.visit_bool(*b),
            Value::String(s) if s == "true" => visitor.visit_bool(true),
            Value::String(s) if s == "false" => visitor.visit_bool(false),
            _ => Err(self.mismatch("boolean")),
        }
    }

    deserialize_parsed! {
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if let Value::String(s) = &self.value {
            let mut chars = s.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                return visitor.visit_char(ch);
            }
        }
        Err(self.mismatch("single character"))
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_string(s),
            scalar @ (Value::Null | Value::Bool(_) | Value::Number(_)) => {
                visitor.visit_string(scalar.to_string())
            }
            other => Err(Error::type_mismatch("string", &describe(&other))),
        }
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_byte_buf(visitor)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_byte_buf(s.into_bytes()),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            other => Err(Error::type_mismatch("bytes", &describe(&other))),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            _ => Err(self.mismatch("null")),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Section(_) => Err(self.mismatch("array")),
            scalar => visitor.visit_seq(SeqDeserializer::new(vec![scalar])),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Section(map) => visitor.visit_map(MapDeserializer::new(map)),
            _ => Err(self.mismatch("section")),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Section(map) if map.len() == 1 => {
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    None => Err(Error::custom("expected a single-key section for enum")),
                }
            }
            other => Err(Error::type_mismatch("enum", &describe(&other))),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: IniMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            other => Err(Error::type_mismatch("unit variant", &describe(&other))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(ValueDeserializer::new(self.value), visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Section(map) => visitor.visit_map(MapDeserializer::new(map)),
            other => Err(Error::type_mismatch("struct variant", &describe(&other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn section(value: Option<&Value>) -> &IniMap {
        value.and_then(Value::as_section).expect("expected a section")
    }

    #[test]
    fn test_classify_section_needs_exact_brackets() {
        assert_eq!(Line::classify("[]"), Line::Section(""));
        assert_eq!(
            Line::classify("[a]b]"),
            Line::Assignment {
                key: "[a]b]",
                value: None
            }
        );
        assert_eq!(
            Line::classify(" [a]"),
            Line::Assignment {
                key: " [a]",
                value: None
            }
        );
        assert_eq!(Line::classify("[a=b]"), Line::Section("a=b"));
    }

    #[test]
    fn test_classify_empty_value() {
        assert_eq!(
            Line::classify("key="),
            Line::Assignment {
                key: "key",
                value: Some("")
            }
        );
    }

    #[test]
    fn test_classify_rejects_line_separators_in_value() {
        assert_eq!(Line::classify("k=a\u{2028}b"), Line::Unmatched);
        assert_eq!(Line::classify("k=a\u{2029}"), Line::Unmatched);
        assert_eq!(
            Line::classify("k\u{2028}"),
            Line::Assignment {
                key: "k\u{2028}",
                value: None
            }
        );
        assert!(decode("k=a\u{2028}b\nok=1").get("k").is_none());
    }

    #[test]
    fn test_decode_scalars_and_literals() {
        let doc = decode("a=1\nflag=true\nflag2=false\nflag3=null\nflag4\nempty=");
        assert_eq!(doc.get("a"), Some(&Value::from("1")));
        assert_eq!(doc.get("flag"), Some(&Value::Bool(true)));
        assert_eq!(doc.get("flag2"), Some(&Value::Bool(false)));
        assert_eq!(doc.get("flag3"), Some(&Value::Null));
        assert_eq!(doc.get("flag4"), Some(&Value::Bool(true)));
        assert_eq!(doc.get("empty"), Some(&Value::from("")));
    }

    #[test]
    fn test_decode_quoted_literal_words_are_still_converted() {
        let doc = decode("a=\"true\"\nb='null'\nc=\"True\"");
        assert_eq!(doc.get("a"), Some(&Value::Bool(true)));
        assert_eq!(doc.get("b"), Some(&Value::Null));
        assert_eq!(doc.get("c"), Some(&Value::from("True")));
    }

    #[test]
    fn test_decode_skips_comments_and_unmatched_lines() {
        let doc = decode("; comment\n   # another\n=nothing\nkey = value ; trailing");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("key"), Some(&Value::from("value ")));
    }

    #[test]
    fn test_decode_mixed_line_endings() {
        let doc = decode("a=1\r\nb=2\rc=3\n\n\r\nd=4");
        let keys: Vec<_> = doc.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_decode_last_scalar_wins() {
        let doc = decode("a=1\na=2");
        assert_eq!(doc.get("a"), Some(&Value::from("2")));
    }

    #[test]
    fn test_decode_arrays() {
        let doc = decode("a[]=1\na[]=2\na[]=3");
        assert_eq!(doc.get("a"), Some(&Value::from(vec!["1", "2", "3"])));
    }

    #[test]
    fn test_decode_array_promotes_existing_scalar() {
        let doc = decode("a=first\na[]=second");
        assert_eq!(doc.get("a"), Some(&Value::from(vec!["first", "second"])));
    }

    #[test]
    fn test_decode_bracketless_key_appends_to_array() {
        let doc = decode("a[]=1\na=2");
        assert_eq!(doc.get("a"), Some(&Value::from(vec!["1", "2"])));
    }

    #[test]
    fn test_decode_bare_brackets_key_is_not_an_array() {
        let doc = decode("[]=x");
        assert_eq!(doc.get("[]"), Some(&Value::from("x")));
    }

    #[test]
    fn test_decode_sections() {
        let doc = decode("top=1\n[s]\nk=v\n[t]\nk=w\n[s]\nj=u");
        assert_eq!(doc.get("top"), Some(&Value::from("1")));
        let s = section(doc.get("s"));
        assert_eq!(s.get("k"), Some(&Value::from("v")));
        assert_eq!(s.get("j"), Some(&Value::from("u")));
        assert_eq!(section(doc.get("t")).get("k"), Some(&Value::from("w")));
    }

    #[test]
    fn test_decode_empty_section_is_kept() {
        let doc = decode("[empty]");
        assert_eq!(doc.get("empty"), Some(&Value::Section(IniMap::new())));
    }

    #[test]
    fn test_header_replaces_scalar_of_same_name() {
        let doc = decode("a=1\n[a]\nb=2");
        assert_eq!(section(doc.get("a")).get("b"), Some(&Value::from("2")));
    }

    #[test]
    fn test_fold_dotted_sections() {
        let doc = decode("[a]\ny=1\n[a.b]\nx=2");
        assert_eq!(doc.len(), 1);
        let a = section(doc.get("a"));
        assert_eq!(a.get("y"), Some(&Value::from("1")));
        assert_eq!(section(a.get("b")).get("x"), Some(&Value::from("2")));
    }

    #[test]
    fn test_fold_creates_missing_parents() {
        let doc = decode("[x.y.z]\nk=v");
        let z = section(section(section(doc.get("x")).get("y")).get("z"));
        assert_eq!(z.get("k"), Some(&Value::from("v")));
        assert!(!doc.contains_key("x.y.z"));
    }

    #[test]
    fn test_fold_escaped_dot_at_top_level() {
        let doc = decode("[example\\.com]\nport=80");
        assert!(!doc.contains_key("example\\.com"));
        assert_eq!(
            section(doc.get("example.com")).get("port"),
            Some(&Value::from("80"))
        );
    }

    #[test]
    fn test_fold_escaped_dot_inside_path() {
        let doc = decode("[hosts.example\\.com]\nport=80");
        let hosts = section(doc.get("hosts"));
        assert_eq!(
            section(hosts.get("example.com")).get("port"),
            Some(&Value::from("80"))
        );
    }

    #[test]
    fn test_fold_follows_section_moved_earlier() {
        let doc = decode("[x\\.y]\nk=1\n[x\\.y.z]\nm=2");
        assert_eq!(doc.len(), 1);
        let xy = section(doc.get("x.y"));
        assert_eq!(xy.get("k"), Some(&Value::from("1")));
        assert_eq!(section(xy.get("z")).get("m"), Some(&Value::from("2")));
    }

    #[test]
    fn test_fold_replaces_scalar_parent() {
        let doc = decode("a=scalar\n[a.b]\nx=1");
        let a = section(doc.get("a"));
        assert_eq!(section(a.get("b")).get("x"), Some(&Value::from("1")));
    }

    #[test]
    fn test_dotted_scalar_keys_are_not_folded() {
        let doc = decode("a.b=1");
        assert_eq!(doc.get("a.b"), Some(&Value::from("1")));
    }

    #[test]
    fn test_quoted_key_literal_becomes_text() {
        let doc = decode("'true'=x\n\"a b\"=c");
        assert_eq!(doc.get("true"), Some(&Value::from("x")));
        assert_eq!(doc.get("a b"), Some(&Value::from("c")));
    }

    #[test]
    fn test_decoder_reports_line_kinds() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.push_line("# hi"), Line::Comment);
        assert_eq!(decoder.push_line("[s]"), Line::Section("s"));
        assert_eq!(decoder.push_line("=x"), Line::Unmatched);
        let doc = decoder.finish();
        assert_eq!(doc.get("s"), Some(&Value::Section(IniMap::new())));
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Limits {
        retries: u8,
        ratio: f64,
        verbose: bool,
        initial: char,
        tags: Vec<String>,
        nickname: Option<String>,
    }

    #[test]
    fn test_value_deserializer_coerces_text() {
        let doc = decode("retries=3\nratio=0.25\nverbose\ninitial=Z\ntags=solo\nnickname=null");
        let limits: Limits = from_value(Value::Section(doc)).unwrap();
        assert_eq!(
            limits,
            Limits {
                retries: 3,
                ratio: 0.25,
                verbose: true,
                initial: 'Z',
                tags: vec!["solo".to_string()],
                nickname: None,
            }
        );
    }

    #[test]
    fn test_value_deserializer_reads_literals_as_text() {
        let doc = decode("a=null\nb=true\nc=false");
        let words: HashMap<String, String> = from_value(Value::Section(doc)).unwrap();
        assert_eq!(words["a"], "null");
        assert_eq!(words["b"], "true");
        assert_eq!(words["c"], "false");
    }

    #[test]
    fn test_value_deserializer_reports_mismatch() {
        let err = from_value::<u8>(Value::from("300")).unwrap_err();
        assert_eq!(err, Error::type_mismatch("u8", "string \"300\""));

        let err = from_value::<Vec<String>>(Value::Section(IniMap::new())).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[derive(Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Mode {
        Fast,
        Safe,
    }

    #[test]
    fn test_enum_from_string() {
        let modes: HashMap<String, Mode> =
            from_value(Value::Section(decode("a=fast\nb=safe"))).unwrap();
        assert_eq!(modes["a"], Mode::Fast);
        assert_eq!(modes["b"], Mode::Safe);
    }

    #[test]
    fn test_numeric_map_keys() {
        let ports: HashMap<u16, String> =
            from_value(Value::Section(decode("80=http\n443=https"))).unwrap();
        assert_eq!(ports[&443], "https");
    }
}
