use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;

use itemdesk::api::RestItemApi;
use itemdesk::cli::{execute, Cli};
use itemdesk::config::TokenStore;
use itemdesk::effects::EffectCoordinator;
use itemdesk::http::ApiClient;
use itemdesk::logging::{init_stderr_tracing, init_tracing};
use itemdesk::router::Route;
use itemdesk::store::ItemStore;
use itemdesk::ui::{self, App};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.command.is_some() {
        init_stderr_tracing();
    } else {
        init_tracing();
    }

    let config = cli.load_config().context("Failed to load configuration")?;
    tracing::info!(
        base_url = %config.api.base_url,
        timeout_ms = config.api.timeout_ms,
        retry_count = config.api.retry_count,
        auth = config.auth.enabled,
        "Configuration loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let tokens = Arc::new(TokenStore::new(config.auth.token.clone()));
    let client = ApiClient::new(&config, tokens)?;
    let api = Arc::new(RestItemApi::new(client));
    let (mut store, sender) = ItemStore::new();
    let effects = EffectCoordinator::new(api, sender, runtime.handle().clone());

    match cli.command {
        Some(command) => match runtime.block_on(execute(command, &effects, &mut store)) {
            Ok(output) => println!("{}", output),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },
        None => {
            let start =
                Route::parse(&cli.path).ok_or_else(|| anyhow!("Unknown path: {}", cli.path))?;
            let app = App::new(store, effects, start, config.api.base_url.clone());
            ui::run(app).context("Terminal UI failed")?;
        }
    }

    Ok(())
}
