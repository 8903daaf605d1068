use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

mod ui;

use ui::app::PortfolioApp;

#[derive(Parser, Debug)]
#[command(name = "folio-desk", about = "Single-page portfolio as a native desktop app")]
struct CliArgs {
    /// TOML file overriding the built-in profile content
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Print the effective profile as JSON and exit
    #[arg(long)]
    dump_profile: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = CliArgs::parse();
    let profile = match content::load_profile(args.profile.as_deref()) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::error!("failed to load profile: {err:#}");
            std::process::exit(2);
        }
    };

    if args.dump_profile {
        match serde_json::to_string_pretty(&profile) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!("failed to serialize profile: {err}");
                std::process::exit(2);
            }
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Folio Desk")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Folio Desk",
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, profile)))),
    )
}
