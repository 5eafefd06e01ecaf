use anyhow::Result;
use clap::{Parser, Subcommand};

use eea::cli::{handle_decrypt_command, handle_encrypt_command, handle_keys_command};
use eea::config::{paths::EeaPaths, settings::Settings};
use eea::vault::VaultStore;

#[derive(Parser)]
#[command(
    name = "eea",
    version,
    about = "Symmetric file and text encryption with password-sealed key sets",
    long_about = "EEA encrypts files, directories, and text under sets of \
                  SHA-derived keys. Key sets live in password-sealed *.keys \
                  files, or are generated once and never stored (ghost mode).",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Key management commands
    #[command(subcommand)]
    Keys(eea::cli::KeysCommands),

    /// Encrypt a file, directory, or text
    #[command(alias = "enc")]
    Encrypt(eea::cli::EncryptArgs),

    /// Decrypt a file, directory, or text artifact
    #[command(alias = "dec")]
    Decrypt(eea::cli::DecryptArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = EeaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Keys(cmd) => {
            handle_keys_command(&paths, &settings, cmd)?;
        }
        Commands::Encrypt(args) => {
            handle_encrypt_command(&paths, &settings, args)?;
        }
        Commands::Decrypt(args) => {
            handle_decrypt_command(&paths, &settings, args)?;
        }
        Commands::Config => {
            let store = VaultStore::new(settings.keys_dir(&paths));
            println!("EEA Configuration");
            println!("=================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Keys directory:  {}", store.keys_dir().display());
            println!("Keys files:      {}", store.list()?.len());
            println!();
            println!("Default key size:  {} bits", settings.default_key_bits);
            println!("Default key count: {}", settings.default_key_count);
        }
    }

    Ok(())
}
