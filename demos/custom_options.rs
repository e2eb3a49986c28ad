//! Customizing INI output with EncodeOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_ini::{to_string_with_options, EncodeOptions, LineEnding};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Remote {
    url: String,
    fetch: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    origin: Remote,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        origin: Remote {
            url: "git@example.com:my/app.git".to_string(),
            fetch: "+refs/heads/*:refs/remotes/origin/*".to_string(),
        },
    };

    // Default format
    println!("Default:");
    let default = serde_ini::to_string(&config)?;
    println!("{}", default);

    // Padded separator
    println!("Whitespace around '=':");
    let padded = EncodeOptions::new().with_whitespace(true);
    println!("{}", to_string_with_options(&config, padded)?);

    // Everything under a named section; a plain &str is shorthand for this
    println!("Under [app]:");
    println!("{}", to_string_with_options(&config, "app")?);

    // Windows line endings regardless of host
    let crlf = EncodeOptions::new().with_line_ending(LineEnding::CrLf);
    let text = to_string_with_options(&config, crlf)?;
    println!("CRLF output has {} CR characters", text.matches('\r').count());

    // Guard against deeply nested input
    let shallow = EncodeOptions::new().with_max_depth(0);
    match to_string_with_options(&config, shallow) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("max_depth 0: {}", e),
    }

    Ok(())
}
