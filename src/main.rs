use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use portfolio_chat::config::Config;
use portfolio_chat::state::AppState;
use portfolio_chat::web::routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting portfolio chat proxy");

    let config = Config::from_env().context("failed to read configuration")?;
    let app_state = Data::new(AppState::new(&config).context("failed to prepare persona prompt")?);

    if !app_state.gateway.has_credential() {
        info!("Get an API key at https://console.groq.com/keys and set GROQ_API_KEY");
    }

    info!("Chat proxy listening on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
