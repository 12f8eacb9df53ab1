//! Hybrid Console - Status dashboard for Hybrid Mount devices.
//!
//! Shows the storage backend, module mount counts, mode distribution,
//! system info and partition activity of a device, and can reboot it.

use clap::Parser;
use iced::application;

use hybrid_console::args::ConsoleArgs;
use hybrid_console::{ConsoleSettings, HybridConsole};
use hybrid_console_common::{Dictionary, init_tracing};

fn main() -> anyhow::Result<()> {
    let args = ConsoleArgs::parse();
    let config = args.load_config()?;

    init_tracing(&config.logging)?;

    tracing::info!(demo = args.demo, transport = ?config.device.transport, "Starting Hybrid Console");

    let dictionary = match &config.locale {
        Some(path) => Dictionary::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to built-in English texts");
            Dictionary::english()
        }),
        None => Dictionary::english(),
    };

    let settings = if args.demo {
        ConsoleSettings::demo(dictionary)
    } else {
        ConsoleSettings::from_config(&config, dictionary)
    };

    // Run the Iced application
    application(
        move || HybridConsole::boot(settings.clone()),
        HybridConsole::update,
        HybridConsole::view,
    )
    .title(HybridConsole::title)
    .theme(HybridConsole::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
