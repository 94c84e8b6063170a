//! Launch a headless browser, navigate, read the page title, close.
//!
//! Run with:
//!
//! ```text
//! RUST_LOG=debug cargo run --example navigate
//! ```

use browser_bridge::{BrowserConfigBuilder, BrowserManager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = BrowserConfigBuilder::new().headless(true).build()?;
    let mut manager = BrowserManager::new(config);

    // First obtain launches Chrome on a worker thread
    let driver = manager.driver().await?;

    // The driver surface is blocking; offload navigation the same way
    let browser = driver.browser()?;
    let title = tokio::task::spawn_blocking(move || {
        let tab = browser.new_tab()?;
        tab.navigate_to("https://www.google.com")?
            .wait_until_navigated()?;
        tab.get_title()
    })
    .await??;

    println!("Page title: {}", title);

    manager.close().await;
    Ok(())
}
