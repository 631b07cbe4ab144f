//! # Catalog Commands
//!
//! Actions a front end sends to the catalog, one JSON object per line.
//!
//! ## Action Lines
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {"action":"get"}                                  read only            │
//! │  {"action":"adjustPrice","id":1,"delta":-2.5}      price ± units        │
//! │  {"action":"adjustQuantity","id":1,"delta":3}      quantity ± n         │
//! │  {"action":"sort","criteria":"name"}               name|price|quantity  │
//! │  {"action":"initialize","products":[...]}          replace everything   │
//! │                                                                         │
//! │  every action ──► {"ok":{"products":[...],"statistics":{...},...}}      │
//! │                or {"error":{"code":"...","message":"..."}}              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::{Money, Product, ProductId, Statistics};
use catalog_state::{convert_records, CatalogConfig, CatalogSnapshot, CatalogStore, ProductRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// One request line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
    /// Replace the catalog with new records (validated first).
    Initialize { products: Vec<ProductRecord> },

    /// `delta` is in currency units; it is rounded to whole cents.
    AdjustPrice { id: u64, delta: f64 },

    AdjustQuantity { id: u64, delta: i64 },

    /// Unrecognized criteria leave the order unchanged.
    Sort { criteria: String },

    Get,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Initialize { .. } => "initialize",
            Action::AdjustPrice { .. } => "adjustPrice",
            Action::AdjustQuantity { .. } => "adjustQuantity",
            Action::Sort { .. } => "sort",
            Action::Get => "get",
        }
    }
}

/// Catalog state as returned to the front end.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub statistics: Statistics,
    pub revision: u64,
}

impl From<&CatalogSnapshot> for CatalogResponse {
    fn from(snapshot: &CatalogSnapshot) -> Self {
        CatalogResponse {
            products: snapshot.products.clone(),
            statistics: snapshot.statistics,
            revision: snapshot.revision,
        }
    }
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Reply {
    Ok(CatalogResponse),
    Error(ApiError),
}

impl From<Result<CatalogResponse, ApiError>> for Reply {
    fn from(result: Result<CatalogResponse, ApiError>) -> Self {
        match result {
            Ok(response) => Reply::Ok(response),
            Err(err) => Reply::Error(err),
        }
    }
}

/// Runs one action against `store`.
pub fn execute<S: CatalogStore>(store: &S, action: Action) -> Result<CatalogResponse, ApiError> {
    debug!(action = action.name(), "execute command");

    let snapshot = match action {
        Action::Initialize { products } => {
            let products = convert_records(products)?;
            store.initialize(products)
        }
        Action::AdjustPrice { id, delta } => {
            store.adjust_price(ProductId(id), Money::from_decimal(delta))?
        }
        Action::AdjustQuantity { id, delta } => store.adjust_quantity(ProductId(id), delta)?,
        Action::Sort { criteria } => store.sort_by_name(&criteria)?,
        Action::Get => store.snapshot()?,
    };

    Ok(CatalogResponse::from(snapshot.as_ref()))
}

/// Parses a request line and runs it.
pub fn handle_line<S: CatalogStore>(store: &S, line: &str) -> Reply {
    let result = serde_json::from_str::<Action>(line)
        .map_err(ApiError::from)
        .and_then(|action| execute(store, action));
    Reply::from(result)
}

/// Human-readable statistics block.
///
/// ```text
/// Products:         3
/// Before discounts: $25.00
/// Discounts:        -$2.50
/// Final total:      $22.50
/// Average price:    $8.33
/// ```
pub fn summary(config: &CatalogConfig, stats: &Statistics) -> String {
    let money = |cents: i64| config.format_currency(cents);
    format!(
        "Products:         {}\n\
         Before discounts: {}\n\
         Discounts:        {}\n\
         Final total:      {}\n\
         Average price:    {}\n",
        stats.total_products,
        money(stats.total_before_discount_cents),
        money(-stats.total_discounts_cents),
        money(stats.final_total_cents),
        money(stats.average_price_cents),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use catalog_state::{ScopedCatalog, SharedCatalog};

    fn provider() -> ScopedCatalog {
        ScopedCatalog::provide(vec![
            Product::new(ProductId(1), "Widget", Money::from_units(10), 2, 1000),
            Product::new(ProductId(2), "gadget", Money::from_units(5), 1, 0),
        ])
    }

    fn ok(reply: Reply) -> CatalogResponse {
        match reply {
            Reply::Ok(response) => response,
            Reply::Error(err) => panic!("expected ok, got {}", err),
        }
    }

    fn err(reply: Reply) -> ApiError {
        match reply {
            Reply::Error(err) => err,
            Reply::Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn test_get() {
        let response = ok(handle_line(&provider(), r#"{"action":"get"}"#));
        assert_eq!(response.products.len(), 2);
        assert_eq!(response.statistics.final_total_cents, 2300);
    }

    #[test]
    fn test_adjust_price_in_units() {
        let response = ok(handle_line(
            &provider(),
            r#"{"action":"adjustPrice","id":1,"delta":-2.5}"#,
        ));
        assert_eq!(response.products[0].price_cents, 750);
        assert_eq!(response.statistics.total_before_discount_cents, 2000);
    }

    #[test]
    fn test_adjust_quantity_floor() {
        let response = ok(handle_line(
            &provider(),
            r#"{"action":"adjustQuantity","id":2,"delta":-10}"#,
        ));
        assert_eq!(response.products[1].quantity, 1);
    }

    #[test]
    fn test_extreme_deltas_are_clamped() {
        let store = provider();
        let response = ok(handle_line(&store, r#"{"action":"adjustPrice","id":1,"delta":1e300}"#));
        assert_eq!(response.products[0].price(), catalog_core::MAX_PRICE);

        let response = ok(handle_line(
            &store,
            r#"{"action":"adjustQuantity","id":2,"delta":9223372036854775807}"#,
        ));
        assert_eq!(response.products[1].quantity, catalog_core::MAX_QUANTITY);
        assert_eq!(
            response.statistics,
            Statistics::compute(&response.products)
        );
    }

    #[test]
    fn test_sort_by_name() {
        let response = ok(handle_line(&provider(), r#"{"action":"sort","criteria":"name"}"#));
        assert_eq!(response.products[0].name, "gadget");

        let unchanged = ok(handle_line(&provider(), r#"{"action":"sort","criteria":"rating"}"#));
        assert_eq!(unchanged.products[0].name, "Widget");
    }

    #[test]
    fn test_initialize_validates_records() {
        let store = SharedCatalog::new();
        let response = ok(handle_line(
            &store,
            r#"{"action":"initialize","products":[{"id":9,"name":"Mug","price":4.5,"quantity":2}]}"#,
        ));
        assert_eq!(response.statistics.total_before_discount_cents, 900);

        let error = err(handle_line(
            &store,
            r#"{"action":"initialize","products":[{"id":1,"name":"A","price":1},{"id":1,"name":"B","price":2}]}"#,
        ));
        assert_eq!(error.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_uninitialized_store() {
        let error = err(handle_line(&SharedCatalog::new(), r#"{"action":"get"}"#));
        assert_eq!(error.code, ErrorCode::NotInitialized);
    }

    #[test]
    fn test_malformed_line() {
        let error = err(handle_line(&provider(), r#"{"action":"explode"}"#));
        assert_eq!(error.code, ErrorCode::BadRequest);
    }

    #[test]
    fn test_reply_shape() {
        let reply = handle_line(&provider(), r#"{"action":"get"}"#);
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["ok"]["statistics"]["totalProducts"], 2);
        assert_eq!(json["ok"]["products"][0]["priceCents"], 1000);

        let reply = handle_line(&SharedCatalog::new(), r#"{"action":"get"}"#);
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["error"]["code"], "NOT_INITIALIZED");
    }

    #[test]
    fn test_summary() {
        let stats = Statistics {
            total_products: 3,
            total_before_discount_cents: 2500,
            total_discounts_cents: 250,
            final_total_cents: 2250,
            average_price_cents: 833,
        };
        let text = summary(&CatalogConfig::default(), &stats);
        assert!(text.contains("Products:         3"));
        assert!(text.contains("Discounts:        -$2.50"));
        assert!(text.contains("Final total:      $22.50"));
        assert!(text.contains("Average price:    $8.33"));
    }
}
