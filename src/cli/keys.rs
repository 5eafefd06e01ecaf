//! Key management CLI commands
//!
//! Generating key sets, and listing, showing, and deleting the sealed
//! `*.keys` files in the keys directory.

use clap::Subcommand;

use crate::config::{paths::EeaPaths, settings::Settings};
use crate::crypto::gen_keys;
use crate::error::EeaResult;
use crate::vault::{self, store::VAULT_EXT, VaultStore};

use super::prompt;

/// Key management commands
#[derive(Subcommand)]
pub enum KeysCommands {
    /// Generate a new key set and seal it under a password
    #[command(alias = "gen")]
    Generate {
        /// Key size in bits (nonzero multiple of 256)
        #[arg(long)]
        bits: Option<usize>,

        /// Number of keys in the set
        #[arg(long)]
        count: Option<usize>,

        /// Output filename in the keys directory
        #[arg(long, short)]
        output: Option<String>,

        /// Overwrite an existing keys file
        #[arg(long)]
        force: bool,
    },

    /// List the keys files in the keys directory
    #[command(alias = "ls")]
    List,

    /// Unseal a keys file and print its keys
    Show {
        /// Keys file to show; optional when only one exists
        name: Option<String>,
    },

    /// Delete a keys file
    #[command(alias = "rm")]
    Delete {
        /// Keys file to delete
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Handle key management commands
pub fn handle_keys_command(
    paths: &EeaPaths,
    settings: &Settings,
    cmd: KeysCommands,
) -> EeaResult<()> {
    let store = VaultStore::new(settings.keys_dir(paths));

    match cmd {
        KeysCommands::Generate {
            bits,
            count,
            output,
            force,
        } => generate(settings, &store, bits, count, output, force),
        KeysCommands::List => list(&store),
        KeysCommands::Show { name } => show(&store, name),
        KeysCommands::Delete { name, force } => delete(&store, &name, force),
    }
}

/// Unseal the selected keys file, prompting for its password.
///
/// Shared entry point for the encrypt and decrypt handlers.
pub(crate) fn unseal_selected(store: &VaultStore, name: Option<&str>) -> EeaResult<Vec<String>> {
    let path = store.select(name)?;
    println!("Using keys file {}", path.display());

    let sealed = store.load(&path)?;
    let password = prompt::prompt_password(false)?;
    vault::unseal(&sealed, &password)
}

fn generate(
    settings: &Settings,
    store: &VaultStore,
    bits: Option<usize>,
    count: Option<usize>,
    output: Option<String>,
    force: bool,
) -> EeaResult<()> {
    let bits = bits.unwrap_or(settings.default_key_bits);
    let count = count.unwrap_or(settings.default_key_count);

    let keys = gen_keys(bits, count)?;

    println!(
        "Generated {} key(s) of {} bits; choose a password to protect them.",
        keys.len(),
        bits
    );
    let password = prompt::prompt_password(true)?;

    let sealed = vault::seal(&keys, &password)?;
    let filename = vault_filename(output.as_deref());
    let path = store.save(&filename, &sealed, force)?;

    println!("Saved keys file to {}", path.display());
    Ok(())
}

fn list(store: &VaultStore) -> EeaResult<()> {
    let vaults = store.list()?;
    if vaults.is_empty() {
        println!("No keys files in {}", store.keys_dir().display());
        return Ok(());
    }

    println!("Keys files in {}:", store.keys_dir().display());
    for path in vaults {
        if let Some(name) = path.file_name() {
            println!("  {}", name.to_string_lossy());
        }
    }
    Ok(())
}

fn show(store: &VaultStore, name: Option<String>) -> EeaResult<()> {
    let keys = unseal_selected(store, name.as_deref())?;

    println!("{} key(s):", keys.len());
    for key in keys {
        println!("  {}", key);
    }
    Ok(())
}

fn delete(store: &VaultStore, name: &str, force: bool) -> EeaResult<()> {
    let path = store.resolve(name)?;

    if !force {
        let question = format!(
            "Delete {}? Anything encrypted with its keys becomes unrecoverable",
            path.display()
        );
        if !prompt::confirm(&question)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.delete(&path)?;
    println!("Deleted {}", path.display());
    Ok(())
}

/// Normalize a user-supplied output name to a `*.keys` filename.
fn vault_filename(output: Option<&str>) -> String {
    match output {
        Some(name) if name.ends_with(&format!(".{}", VAULT_EXT)) => name.to_string(),
        Some(name) => format!("{}.{}", name, VAULT_EXT),
        None => crate::vault::store::DEFAULT_VAULT.to_string(),
    }
}
