//! # serde_ini
//!
//! An INI codec with a dynamic value tree and Serde support.
//!
//! ## What this crate reads and writes
//!
//! The dialect is the loose INI found in application config files:
//!
//! - `key=value` pairs, optionally grouped under `[section]` headers
//! - `key[]=value` lines that accumulate into arrays
//! - `;` and `#` comments, both whole-line and trailing
//! - dotted headers such as `[server.tls]` that nest sections
//! - quoted keys and values (`"a=b"`, `'x;y'`) for text the grammar would misread
//!
//! Decoding never fails. Lines that fit no rule are skipped, so any text yields
//! some document.
//!
//! ## Key Features
//!
//! - **Ordered**: sections and keys keep the order they were read or inserted in
//! - **Round-trippable**: [`escape_str`] and [`unescape`] quote exactly what the line grammar needs
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]` types
//! - **Text-aware**: bare values are strings, and typed fields parse them on the way out
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_ini = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Decoding and Encoding Documents
//!
//! ```rust
//! use serde_ini::{decode, encode, EncodeOptions, LineEnding, Value};
//!
//! let doc = decode("; app config\nname=demo\n[server]\nhost=localhost\nports[]=80\nports[]=443");
//!
//! assert_eq!(doc.get("name"), Some(&Value::from("demo")));
//! let ports = doc.get("server").and_then(|s| s.get("ports"));
//! assert_eq!(ports, Some(&Value::from(vec!["80", "443"])));
//!
//! let text = encode(&doc, EncodeOptions::new().with_line_ending(LineEnding::Lf)).unwrap();
//! assert_eq!(text, "name=demo\n\n[server]\nhost=localhost\nports[]=80\nports[]=443\n");
//! ```
//!
//! ### Serializing Rust Types
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_ini::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Database {
//!     host: String,
//!     port: u16,
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Config {
//!     debug: bool,
//!     database: Database,
//! }
//!
//! let config = Config {
//!     debug: true,
//!     database: Database { host: "db.local".to_string(), port: 5432 },
//! };
//!
//! let text = to_string(&config).unwrap();
//! let back: Config = from_str(&text).unwrap();
//! assert_eq!(config, back);
//! ```
//!
//! ### Dynamic Values with ini! Macro
//!
//! ```rust
//! use serde_ini::{ini, Value};
//!
//! let data = ini!({
//!     "name": "Alice",
//!     "groups": ["wheel", "staff"],
//!     "shell": { "path": "/bin/sh" }
//! });
//!
//! if let Value::Section(section) = data {
//!     assert_eq!(section.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Lossy Corners
//!
//! INI has no types, so bare values decode as strings (apart from `true`,
//! `false` and `null`). A number written by [`encode`] comes back as text;
//! typed deserialization parses it again. Arrays hold scalars only.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Decoding and encoding a flat document
//! - **`sections.rs`** - Nested and dotted sections
//! - **`custom_options.rs`** - Section prefixes, padding and line endings
//!
//! Run any of them with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod escape;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod ser;
pub mod syntax;
pub mod value;

pub use de::{decode, from_value, Decoder, Line, ValueDeserializer};
pub use error::{Error, Result};
pub use escape::{escape, escape_str, is_quoted, unescape};
pub use map::IniMap;
pub use options::{EncodeOptions, LineEnding};
pub use ser::{encode, ValueSerializer};
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Alias of [`decode`].
#[must_use]
pub fn parse(text: &str) -> IniMap {
    decode(text)
}

/// Alias of [`encode`].
///
/// # Errors
///
/// Same as [`encode`].
pub fn stringify(doc: &IniMap, options: impl Into<EncodeOptions>) -> Result<String> {
    encode(doc, options)
}

/// Serialize any `T: Serialize` to INI text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_ini::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text.lines().collect::<Vec<_>>(), vec!["x=1", "y=2"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if `T` does not serialize to a map or
/// struct, or if it contains an array of arrays or sections.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to INI text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{to_string_with_options, EncodeOptions, LineEnding};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let options = EncodeOptions::new()
///     .with_section("origin")
///     .with_whitespace(true)
///     .with_line_ending(LineEnding::Lf);
/// let text = to_string_with_options(&Point { x: 0, y: 0 }, options).unwrap();
/// assert_eq!(text, "[origin]\nx = 0\ny = 0\n");
/// ```
///
/// # Errors
///
/// Same as [`to_string`], plus [`Error::DepthLimitExceeded`] for documents
/// nested deeper than the options allow.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: impl Into<EncodeOptions>) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        Value::Section(doc) => encode(&doc, options),
        other => Err(Error::invalid_value(&format!(
            "top-level value must be a map or struct, found {}",
            other.type_name()
        ))),
    }
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_ini::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_section());
/// ```
///
/// # Errors
///
/// Returns an error if a map key is not a string, number or boolean.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert!(buffer.starts_with(b"x=1"));
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a writer as INI text with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    options: impl Into<EncodeOptions>,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x=1\ny=2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Decoding itself cannot fail; errors come from values that do not fit `T`,
/// such as a missing field or text that does not parse as the field's number type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(Value::Section(decode(s)))
}

/// Deserialize an instance of type `T` from an I/O stream of INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x=1\r\ny=2\r\n")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the data cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of INI text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be deserialized
/// to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
        nickname: Option<String>,
    }

    fn lf() -> EncodeOptions {
        EncodeOptions::new().with_line_ending(LineEnding::Lf)
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: -2 };
        let text = to_string(&point).unwrap();
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice; admin".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
            nickname: None,
        };

        let text = to_string_with_options(&user, lf()).unwrap();
        assert_eq!(
            text,
            "id=123\nname=Alice\\; admin\nactive=true\ntags[]=admin\ntags[]=user\nnickname=null\n"
        );
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_top_level_must_be_a_section() {
        let err = to_string(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
        assert!(to_string(&"text").is_err());
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(value.get("x"), Some(&Value::Number(Number::Integer(1))));
        assert_eq!(value.get("y"), Some(&Value::Number(Number::Integer(2))));
    }

    #[test]
    fn test_map_with_section_option() {
        let mut settings = BTreeMap::new();
        settings.insert("color", "auto");
        settings.insert("pager", "less");

        let text = to_string_with_options(&settings, "core").unwrap();
        let parsed: BTreeMap<String, BTreeMap<String, String>> = from_str(&text).unwrap();
        assert_eq!(parsed["core"]["pager"], "less");
    }

    #[test]
    fn test_aliases_match() {
        let text = "a=1\n[s]\nb=2\n";
        assert_eq!(parse(text), decode(text));

        let doc = decode(text);
        assert_eq!(stringify(&doc, lf()), encode(&doc, lf()));
    }

    #[test]
    fn test_writer_and_slice() {
        let mut buffer = Vec::new();
        to_writer_with_options(&mut buffer, &Point { x: 3, y: 4 }, lf()).unwrap();
        assert_eq!(buffer, b"x=3\ny=4\n");

        let point: Point = from_slice(&buffer).unwrap();
        assert_eq!(point, Point { x: 3, y: 4 });
        assert!(from_slice::<Point>(&[0xff, 0xfe]).is_err());
    }
}
