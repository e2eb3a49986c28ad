//! Basic INI serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_ini::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Account {
    id: u32,
    name: String,
    email: String,
    admin: bool,
    groups: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let account = Account {
        id: 42,
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        admin: false,
        groups: vec!["staff".to_string(), "backup; nightly".to_string()],
    };

    // Serialize to INI
    let ini = to_string(&account)?;
    println!("INI output:\n{}", ini);

    // Deserialize back to struct
    let account_back: Account = from_str(&ini)?;
    assert_eq!(account, account_back);
    println!("✓ Round-trip successful");

    Ok(())
}
