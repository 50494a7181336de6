// Order store boundary.
//
// Reporting only ever reads the full order list. Whatever the transport,
// orders are validated here so the aggregation core can treat them as
// well-formed values.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::core::Result;
use crate::modules::orders::models::{validate_unique_ids, Order};

/// Source of the orders a report is built from
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch every order, validated
    async fn list_orders(&self) -> Result<Vec<Order>>;
}

fn validate_orders(orders: &[Order]) -> Result<()> {
    for order in orders {
        order.validate()?;
    }
    validate_unique_ids(orders)
}

/// Orders held in memory, e.g. already fetched by the caller
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
}

impl InMemoryOrderRepository {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list_orders(&self) -> Result<Vec<Order>> {
        validate_orders(&self.orders)?;
        Ok(self.orders.clone())
    }
}

/// Orders exported as a JSON array in the storefront's wire format
#[derive(Debug, Clone)]
pub struct JsonFileOrderRepository {
    path: PathBuf,
}

impl JsonFileOrderRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OrderRepository for JsonFileOrderRepository {
    async fn list_orders(&self) -> Result<Vec<Order>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let orders: Vec<Order> = serde_json::from_str(&raw)?;

        validate_orders(&orders)?;

        debug!("Loaded {} orders from {}", orders.len(), self.path.display());
        Ok(orders)
    }
}
