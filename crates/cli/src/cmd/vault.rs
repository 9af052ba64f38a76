//! Vault lifecycle commands.

use std::path::Path;

use inkvault_core::Workspace;

use super::print_names;

pub fn create(
    workspace: &Workspace,
    name: &str,
    at: Option<&Path>,
) -> color_eyre::Result<()> {
    workspace.create_vault(name, at)?;
    println!("Created vault '{name}'");
    Ok(())
}

pub fn list(workspace: &Workspace, json: bool) -> color_eyre::Result<()> {
    let names = workspace.list_vaults()?;
    print_names(&names, json);
    Ok(())
}

pub fn delete(workspace: &Workspace, name: &str) -> color_eyre::Result<()> {
    workspace.delete_vault(name)?;
    println!("Deleted vault '{name}'");
    Ok(())
}
