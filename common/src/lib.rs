//! Inventario Dashboard Common Library
//!
//! Web(WASM)フロントエンドから利用される型とドメインロジック。
//! ブラウザ依存のない純粋ロジックのみを置く（ホスト側でテスト可能）。

pub mod error;
pub mod filters;
pub mod format;
pub mod pagination;
pub mod query;
pub mod snapshot;
pub mod status;
pub mod types;
pub mod upload;

pub use error::{Error, Result};
pub use filters::{FilterState, SortDir, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use format::{format_currency, format_number};
pub use pagination::{PageItem, Pagination};
pub use query::{brands_query, search_query};
pub use snapshot::AggregateSnapshot;
pub use status::StockStatus;
pub use types::{
    AlertCounts, ApiErrorBody, BrandValue, CategoryValue, HealthStatus, Kpis, Metadata,
    ProductRow, SearchResponse, StockStatusSlice, SupplierValue, UploadResponse,
};
pub use upload::{UploadPhase, UploadSession};
