// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let written = news_aggregator::presentation::http::openapi::write_openapi_snapshot()?;
    println!("OpenAPI snapshot written to {}", written.display());
    Ok(())
}
