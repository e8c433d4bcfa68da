use waterbiz::config::configuration;
use waterbiz::db::establish_connection;
use waterbiz::startup::Application;
use waterbiz::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("waterbiz".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = configuration::Settings::new().expect("Failed to load configurations");
    let pool = establish_connection(&config.database.url).await;

    let application = Application::build(config.application.port, pool).await?;
    application.run_until_stopped().await?;
    Ok(())
}
