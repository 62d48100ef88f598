//! Pool domain - catalog, explore table and chart series

pub mod catalog;
pub mod chart;
pub mod table;

pub use catalog::{Pool, PoolProvider, StaticCatalog};
pub use chart::{chart_series, ChartPoint};
pub use table::{filter_and_sort, filter_pools, SortKey, SortOrder, TableState};
