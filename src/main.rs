//! UI hierarchy dump for Appium-driven mobile apps
//!
//! Opens a session for the bundled app against the configured Appium
//! server and prints the resulting UI hierarchy. Takes no arguments;
//! see `config.toml` for the overridable target values.

use uidump::common::logging;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = uidump::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
