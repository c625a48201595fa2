use clap::Parser;
use orphanage_map::core::view::MapConfig;
use orphanage_map::core::ScreenConfig;
use orphanage_map::utils::{logger, validation::Validate};
use orphanage_map::{
    CliConfig, ConsoleAlerts, FixedLocationProvider, HttpOrphanageApi, NavigationStack,
    OrphanagesMapScreen, TomlScreenConfig,
};

fn ensure_valid(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting orphanage-map");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let (endpoint, map_config) = match &cli.config {
        Some(path) => {
            let file_config = TomlScreenConfig::from_file(path)?;
            ensure_valid(&file_config);
            (
                file_config.api_endpoint().to_string(),
                MapConfig::from_config(&file_config),
            )
        }
        None => {
            ensure_valid(&cli);
            (cli.api_endpoint.clone(), MapConfig::from_config(&cli))
        }
    };

    let api = HttpOrphanageApi::new(endpoint);
    let location = FixedLocationProvider::from_cli(&cli);
    let mut screen = OrphanagesMapScreen::new(
        api,
        location,
        NavigationStack::new(),
        ConsoleAlerts,
        map_config,
    );

    screen.handle_mount().await;
    screen.handle_focus().await;

    let view = screen.view();
    println!(
        "🗺  Map centered at ({:.6}, {:.6})",
        view.region.center.latitude, view.region.center.longitude
    );
    for marker in &view.markers {
        println!(
            "📍 [{}] {} ({:.6}, {:.6})",
            marker.id, marker.callout.text, marker.coordinate.latitude, marker.coordinate.longitude
        );
    }
    println!("{}", view.footer_text);

    tracing::info!("✅ Screen rendered");
    Ok(())
}
