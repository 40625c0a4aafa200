use dotenvy::dotenv;

use tubemetrics::error::ApplicationError;
use tubemetrics::{api, config, logger, youtube};

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = config::load()?;

    let _guard = logger::init(&config)?;

    let youtube = youtube::connect(&config.youtube)?;

    api::serve(&config, youtube).await
}
