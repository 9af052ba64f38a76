//! Raw wire dispatch: one JSON request in, one JSON response out.
//!
//! This is the same surface a GUI shell would call; the subcommands are
//! conveniences layered over it.

use inkvault_core::{Request, Workspace, dispatch};

pub fn run(workspace: &Workspace, payload: &str) -> color_eyre::Result<()> {
    let request: Request = serde_json::from_str(payload)?;

    match dispatch(workspace, request) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(wire_error) => {
            eprintln!("{}", serde_json::to_string_pretty(&wire_error)?);
            std::process::exit(1);
        }
    }
}
