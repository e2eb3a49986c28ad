//! Working with sections, dotted headers and dynamic values.
//!
//! Run with: cargo run --example sections

use serde_ini::{decode, encode, ini, EncodeOptions, Value};
use std::error::Error;

const CONFIG: &str = r#"
; service configuration
name = gateway
verbose

[server]
host = 0.0.0.0
port = 8080

[server.tls]
cert = /etc/gateway/cert.pem
protocols[] = TLSv1.2
protocols[] = TLSv1.3

[upstream\.internal]
timeout = 30   ; seconds
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = decode(CONFIG);

    // `[server.tls]` is nested inside `server`
    let tls = doc
        .get("server")
        .and_then(|server| server.get("tls"))
        .ok_or("missing [server.tls]")?;
    println!("TLS protocols: {}", tls.get("protocols").unwrap_or(&Value::Null));

    // `\.` keeps the dot in the section name
    let upstream = doc.get("upstream.internal").ok_or("missing upstream")?;
    println!("Upstream timeout: {:?}", upstream.get("timeout"));

    // bare `verbose` is a flag
    println!("Verbose: {:?}", doc.get("verbose").and_then(Value::as_bool));

    doc.insert(
        "metrics".to_string(),
        ini!({ "enabled": true, "labels": { "env": "prod" } }),
    );

    println!("\nRe-encoded:\n{}", encode(&doc, EncodeOptions::default())?);

    Ok(())
}
