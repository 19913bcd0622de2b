use beer_stock::config::{Command, LogFormat};
use beer_stock::utils::error::{BeerStockError, ErrorSeverity};
use beer_stock::utils::logger;
use beer_stock::{BeerDto, BeerService, CliConfig, JsonFileBeerRepository, LocalStorage, StockConfig};
use clap::Parser;

fn load_config(cli: &CliConfig) -> Result<StockConfig, BeerStockError> {
    let mut config = match &cli.config {
        Some(path) => StockConfig::from_file(path)?,
        None => StockConfig::default(),
    };
    if let Some(data_file) = &cli.data_file {
        config.store.data_file = data_file.clone();
    }
    config.validate_config()?;
    Ok(config)
}

async fn run(
    command: Command,
    service: &BeerService<JsonFileBeerRepository<LocalStorage>>,
) -> Result<serde_json::Value, BeerStockError> {
    let output = match command {
        Command::Create(args) => serde_json::to_value(service.create_beer(BeerDto::from(args)).await?)?,
        Command::Find { name } => serde_json::to_value(service.find_by_name(&name).await?)?,
        Command::List => serde_json::to_value(service.list_all().await?)?,
        Command::Delete { id } => {
            service.delete_by_id(id).await?;
            serde_json::json!({ "deleted": id })
        }
        Command::Increment { id, amount } => serde_json::to_value(service.increment(id, amount).await?)?,
        Command::Decrement { id, amount } => serde_json::to_value(service.decrement(id, amount).await?)?,
    };
    Ok(output)
}

fn exit_with(e: BeerStockError) -> ! {
    tracing::error!(
        "❌ beer-stock failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2, // 請求被拒絕
        ErrorSeverity::High => 1,   // 配置錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    };
    std::process::exit(exit_code)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, LogFormat::Compact);
            exit_with(e);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.logging.format);
    tracing::debug!("Effective config: {:?}", config);

    let (dir, key) = match config.store.location() {
        Ok(location) => location,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Using stock file {}/{}", dir.display(), key);

    let repository = match JsonFileBeerRepository::open(LocalStorage::new(dir), key).await {
        Ok(repository) => repository,
        Err(e) => exit_with(e),
    };
    let service = BeerService::with_limits(repository, config.limits);

    match run(cli.command, &service).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}
