use clap::Parser;
use fiber_splice::app::session;
use fiber_splice::domain::ports::ConfigProvider;
use fiber_splice::utils::{logger, validation::Validate};
use fiber_splice::{Cable, CliConfig, ColorModelEngine, LocalStore, SpliceError, ViewConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fiber-splice");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let engine = match &config.config {
        Some(path) => {
            let view = ViewConfig::from_file(path)?;
            view.validate()?;
            tracing::info!("Using view configuration '{}'", view.view.name);
            // The file's range policy wins only when it sets one.
            let policy = view
                .splices
                .as_ref()
                .and_then(|s| s.range_policy)
                .unwrap_or_else(|| config.range_policy());
            ColorModelEngine::new(view.color_standard()).with_range_policy(policy)
        }
        None => ColorModelEngine::from_config(&config),
    };

    let store = LocalStore::new(config.data_dir());
    let workspace = store.load_workspace_checked().await?;
    tracing::info!(
        "Loaded {} cables, {} splices, {} circuits",
        workspace.cables.len(),
        workspace.splices.len(),
        workspace.circuits.len()
    );

    let selected: Vec<&Cable> = match config.cable_filter() {
        Some(key) => match workspace.find_cable(key) {
            Some(cable) => vec![cable],
            None => {
                let err = SpliceError::UnknownCable { id: key.to_string() };
                tracing::error!("{}", err);
                eprintln!("❌ {}", err);
                std::process::exit(1);
            }
        },
        None => workspace.cables.iter().collect(),
    };

    for cable in selected {
        let model = engine.build(cable, &workspace.splices)?;
        print!("{}", model);
        for splice in workspace.splices.iter().filter(|s| s.references(&cable.id)) {
            if let Some(pon) = splice.pon_label() {
                println!("  {}", pon);
            }
            if let Some(range) = splice.range_label(&cable.id) {
                println!("  {}", range);
            }
        }
        println!();
    }

    if let Some(name) = &config.export {
        let artifact = session::export_bundle(&store, &workspace, name).await?;
        println!("✅ Bundle saved to: {}", artifact);
    }

    Ok(())
}
