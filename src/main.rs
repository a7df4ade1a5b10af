use anyhow::Result;

use todo_graphql::store::TodoStore;
use todo_graphql::{config, serving, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = telemetry::init("todo-graphql");

    let config = config::load()?;
    let store = TodoStore::seeded();
    serving::run_and_serve(config.serving, store).await?;
    Ok(())
}
