use clap::Parser;
use dognames::config::Command;
use dognames::core::ConfigProvider;
use dognames::utils::{logger, validation, validation::Validate};
use dognames::{
    app::render, build_client, CliConfig, DogEngine, DogError, DrawMode, HttpDataset, HttpMedia,
    LocalStorage, OutputFormat,
};

async fn run(cli: &CliConfig) -> dognames::Result<String> {
    let config = cli.load_app_config()?;
    config.validate()?;
    tracing::debug!("Effective config: {:?}", config);

    let client = build_client(&config)?;
    let dataset = HttpDataset::new(client.clone(), config.dataset_url());
    let media = HttpMedia::new(client, config.media_api_url());

    let storage = match &cli.command {
        Command::Create {
            output_dir: Some(dir),
            ..
        } => {
            validation::validate_path("output_dir", &dir.to_string_lossy())?;
            LocalStorage::new(dir)
        }
        _ => LocalStorage::current_dir(),
    };

    let engine = DogEngine::new(dataset, media, storage);
    let year = cli.command.year();

    match &cli.command {
        Command::Find { name, .. } => {
            let matches = engine.find(name, year).await?;
            render::render_matches(cli.format, name, year, &matches)
        }
        Command::Stats { .. } => {
            let stats = engine.stats(year).await?;
            render::render_stats(cli.format, &stats)
        }
        Command::Create { same_record, .. } => {
            let mode = if *same_record {
                DrawMode::SameRecord
            } else {
                DrawMode::Independent
            };
            let dog = engine.create(year, mode).await?;
            render::render_new_dog(cli.format, &dog)
        }
    }
}

fn report_failure(e: &DogError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.format == OutputFormat::Json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI arguments: {:?}", cli);

    match run(&cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        Err(e) => report_failure(&e),
    }
}
