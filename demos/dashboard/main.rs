//! Invoice Dashboard Example
//!
//! Serves the invoice listing and its create/update/delete routes.
//!
//! ```text
//! cargo run --example dashboard [config.yaml]
//! cargo run --example dashboard --features postgres   # with DATABASE_URL set
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use invoices::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default(),
    }
    .with_env_overrides()?;

    invoices::logging::init(&config.logging)?;

    let store = open_store(&config).await?;

    let listing = config.routes.listing_path.clone();
    println!("🚀 Starting invoice dashboard on http://{}", config.server.bind);
    println!("\n📚 Routes:");
    println!("    GET    /health");
    println!("    GET    {}                      - Cached listing", listing);
    println!("    POST   {}                      - Create an invoice", listing);
    println!("    POST   {}/{{id}}/edit            - Update an invoice", listing);
    println!("    PUT    {}/{{id}}                 - Update an invoice", listing);
    println!("    POST   {}/{{id}}/delete          - Delete an invoice", listing);
    println!("    DELETE {}/{{id}}                 - Delete an invoice", listing);
    println!("\n💡 Try:");
    println!(
        "    curl -i -d 'customerId=c-1&amount=45.00&status=pending' http://{}{}",
        config.server.bind, listing
    );

    ServerBuilder::new()
        .with_shared_store(store)
        .with_config(config)
        .serve()
        .await
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn InvoiceStore>> {
    #[cfg(feature = "postgres")]
    {
        if let Some(url) = &config.database.url {
            let store =
                PostgresInvoiceStore::connect(url, config.database.max_connections).await?;
            invoices::storage::postgres::ensure_schema(store.pool()).await?;
            tracing::info!("Using PostgreSQL invoice store");
            return Ok(Arc::new(store));
        }
    }

    if config.database.url.is_some() {
        tracing::warn!("database.url is set but the postgres feature is disabled");
    }

    tracing::info!("Using in-memory invoice store with sample data");
    Ok(Arc::new(InMemoryInvoiceStore::with_invoices(sample_invoices())))
}

fn sample_invoices() -> Vec<Invoice> {
    let invoice = |id: &str, customer: &str, amount: i64, status, (y, m, d)| -> Option<Invoice> {
        Some(Invoice {
            id: id.to_string(),
            customer_id: customer.to_string(),
            amount,
            status,
            date: NaiveDate::from_ymd_opt(y, m, d)?,
        })
    };

    [
        invoice("inv-1", "c-evil-rabbit", 15795, InvoiceStatus::Pending, (2022, 12, 6)),
        invoice("inv-2", "c-delba", 20348, InvoiceStatus::Pending, (2022, 11, 14)),
        invoice("inv-3", "c-lee", 3040, InvoiceStatus::Paid, (2022, 10, 29)),
        invoice("inv-4", "c-michael", 44800, InvoiceStatus::Paid, (2023, 9, 10)),
        invoice("inv-5", "c-amy", 34577, InvoiceStatus::Pending, (2023, 8, 5)),
    ]
    .into_iter()
    .flatten()
    .collect()
}
