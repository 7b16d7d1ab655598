//! Single-session runner
//!
//! Drives one automation session end-to-end: open the session, give the
//! app a fixed settling interval, print the UI hierarchy, and close the
//! session. Once the session exists, close runs on every exit path.

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;

use crate::common::config::Config;
use crate::common::{paths, Result};
use crate::webdriver::{Capabilities, WebDriverClient};

/// Remote automation driver
///
/// Implemented by [`WebDriverClient`] and by fakes in tests.
#[async_trait]
pub trait Driver {
    /// Open a remote session for the described target
    async fn open(&mut self, capabilities: &Capabilities) -> Result<()>;

    /// Fetch the current UI hierarchy as serialized markup
    async fn page_source(&mut self) -> Result<String>;

    /// Close the session, releasing server- and device-side resources
    async fn quit(&mut self) -> Result<()>;
}

/// Execute one automation session with the configured target
pub async fn run() -> Result<()> {
    let config = Config::load()?;
    let app = paths::bundled_app_path(&config.target.app_bundle)?;
    let capabilities = Capabilities::for_target(&config.target, &app);

    let mut driver = WebDriverClient::new(&config.server_url)?;
    run_session(&mut driver, &capabilities, config.settle(), &mut std::io::stdout()).await
}

/// Drive a single session against the given driver
///
/// An open failure propagates immediately with no teardown obligation.
/// After a successful open, `quit` runs exactly once on every exit path,
/// and its own failure never shadows an error from the inspection.
pub async fn run_session<D, W>(
    driver: &mut D,
    capabilities: &Capabilities,
    settle: Duration,
    out: &mut W,
) -> Result<()>
where
    D: Driver,
    W: Write,
{
    driver.open(capabilities).await?;

    let outcome = dump_hierarchy(driver, settle, out).await;

    if let Err(e) = driver.quit().await {
        tracing::warn!("session quit failed: {e}");
    }

    outcome
}

async fn dump_hierarchy<D, W>(driver: &mut D, settle: Duration, out: &mut W) -> Result<()>
where
    D: Driver,
    W: Write,
{
    // Fixed settling interval in lieu of a readiness signal from the
    // driver; the app is assumed launched and rendered once it elapses.
    tokio::time::sleep(settle).await;

    let source = driver.page_source().await?;
    writeln!(out, "{source}")?;
    Ok(())
}
