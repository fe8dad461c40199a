use anyhow::{Context, Result};
use clap::Parser;

use steamvr_input_poc::input::openvr::OpenVrRuntime;
use steamvr_input_poc::InputSession;

/// Looked up in the working directory at launch. SteamVR also pulls in
/// legacy_actions.json through the manifest's default_bindings entry.
const ACTION_MANIFEST_FILE: &str = "action_manifest.json";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Attach to a SteamVR runtime another application already initialized
    #[arg(long)]
    attach: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // SteamVR rejects relative manifest paths.
    let manifest = std::env::current_dir()
        .context("working directory is not accessible")?
        .join(ACTION_MANIFEST_FILE);

    println!("Creating SteamVR input session...");
    let mut session = InputSession::initialize(OpenVrRuntime::new(), &manifest, !args.attach);

    println!("Polling - press the menu button to stop");
    session.run_until_pressed();

    // SteamVR itself keeps running, this only ends our connection.
    session.shutdown();
    Ok(())
}
