use clap::Parser;
use pubmed_etl::utils::{logger, validation::Validate};
use pubmed_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, PubMedPipeline};

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ PubMed ETL failed: {} (Category: {:?})",
        e,
        e.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.debug);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let storage = LocalStorage::default();
    let pipeline = match PubMedPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(&e),
    };

    let engine = EtlEngine::new(pipeline);
    match engine.run().await {
        Ok(output_path) => println!("Results saved to {}", output_path),
        Err(e) => exit_with(&e),
    }
}
