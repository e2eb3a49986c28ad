//! The INI dialect read and written by this crate.
//!
//! # Overview
//!
//! A document is a sequence of lines. Line terminators may be LF, CRLF, or
//! any mixture of CR and LF; empty lines are ignored. Each remaining line is
//! one of:
//!
//! | Line | Shape | Effect |
//! |------|-------|--------|
//! | Comment | optional whitespace, then `;` or `#` | ignored |
//! | Section header | `[name]` | following assignments go into section `name` |
//! | Assignment | `key=value` | sets `key` in the current section |
//! | Flag | `key` | sets `key` to `true` |
//! | Array element | `key[]=value` | appends `value` to the array `key` |
//!
//! The header must fill the whole line. `  [a]` with leading spaces is read
//! as the flag `[a]`, and `[a] x` is read as the flag `[a] x`.
//!
//! # Values
//!
//! ## Bare values
//!
//! Surrounding whitespace is trimmed. The value ends at the first `;` or `#`
//! that is not escaped, which starts a trailing comment:
//!
//! ```text
//! greeting = hello ; ignored
//! ```
//!
//! Inside a bare value `\;`, `\#` and `\\` stand for `;`, `#` and `\`. Any other
//! backslash is kept as it is, so Windows paths need no escaping:
//!
//! ```text
//! path = C:\Program Files\app
//! note = number\# is\; 12345
//! ```
//!
//! The bare words `true`, `false` and `null` become a boolean or null. Every
//! other bare value is a string, including numbers.
//!
//! ## Quoted values
//!
//! A value wrapped in double quotes is a JSON literal. A value wrapped in
//! single quotes has the quotes removed and is then read as a JSON literal.
//! If the literal does not parse, the text is kept as a string:
//!
//! | Written | Decoded |
//! |---------|---------|
//! | `"a=b"` | string `a=b` |
//! | `" padded "` | string ` padded ` |
//! | `'42'` | number `42` |
//! | `'[1, 2]'` | array `1`, `2` |
//! | `'not json'` | string `not json` |
//!
//! The words `true`, `false` and `null` are recognized after unquoting, so
//! `"true"` and `'true'` both decode as a boolean.
//!
//! Keys and section names follow the same rules, except that a key is always
//! text: `'true'=x` sets the key `true`.
//!
//! # Arrays
//!
//! A key ending in `[]` appends to an array:
//!
//! ```text
//! ports[]=80
//! ports[]=443
//! ```
//!
//! If the key already holds a single value, that value becomes the first
//! element. Once a key holds an array, a later assignment without `[]`
//! appends to it instead of replacing it. The key `[]` on its own is an
//! ordinary key.
//!
//! # Sections
//!
//! Section headers always name a top-level section, and repeating a header
//! continues the same section. A dot in a header nests sections:
//!
//! ```text
//! [server]
//! host = localhost
//!
//! [server.tls]
//! port = 8443
//! ```
//!
//! decodes as `{server: {host, tls: {port}}}`. Nesting is resolved once the
//! whole input has been read, so `[a.b]` may appear before `[a]`. A dot that
//! belongs to a name is written `\.`: `[example\.com]` is the single section
//! `example.com`.
//!
//! # Encoding
//!
//! The encoder writes each level in two passes. Scalars and arrays come first,
//! in key order, then every nested section under its dotted header:
//!
//! - A header is only written for a section with scalar or array lines of its own
//! - One empty line separates a section from the output before it
//! - Keys and values are escaped so that decoding gives back the same text
//! - Array lines end in `\n`; all other lines use the configured
//!   [`LineEnding`](crate::LineEnding)
//!
//! Arrays may only hold scalars. Numbers are written as digits and therefore
//! decode as strings.
//!
//! # Limitations
//!
//! - **Comments**: dropped on decode, never written
//! - **Types**: bare values carry no type beyond boolean and null
//! - **Dotted keys**: a key `a.b` in a nested section is written as `a\.b` and
//!   stays one key; a dotted top-level section name is folded into nesting
//! - **Nesting**: encoding stops at [`EncodeOptions::max_depth`](crate::EncodeOptions::max_depth)

// This module contains only documentation; no implementation code
