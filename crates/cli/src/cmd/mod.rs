pub mod markup;
pub mod note;
pub mod query;
pub mod request;
pub mod vault;

use std::io::Read;

/// Positional content, or stdin when omitted.
pub fn content_or_stdin(content: Option<String>) -> color_eyre::Result<String> {
    match content {
        Some(c) => Ok(c),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Print a list of names, one per line or as a JSON array.
pub fn print_names(names: &[String], json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(names).unwrap_or_default());
        return;
    }
    for name in names {
        println!("{name}");
    }
}
