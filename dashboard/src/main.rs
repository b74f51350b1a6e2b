//! # CryptoHub Market Dashboard - Binary Entry Point

use dashboard::DashboardApp;

fn main() -> eframe::Result<()> {
    dashboard::utils::logging::init();

    tracing::info!("Starting CryptoHub dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CryptoHub")
            .with_inner_size([1366.0, 768.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CryptoHub",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
