use std::error::Error;

use megacommerce_catalog::app::{App, AppArgs, logging::init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  init_logging()?;

  let args = AppArgs { config_path: "config.yaml".into() };

  let app = App::new(args).await?;
  app.run().await?;
  Ok(())
}
