//! Explore table - client-side filter and sort over the pool catalog

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::shared::errors::PoolError;
use crate::shared::utils::figure_value;

use super::catalog::Pool;

/// Sortable columns of the explore table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Tvl,
    Apy,
    Volume,
}

impl FromStr for SortKey {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tvl" => Ok(Self::Tvl),
            "apy" => Ok(Self::Apy),
            "volume" => Ok(Self::Volume),
            other => Err(PoolError::UnknownSortKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(PoolError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// Column-header click state of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort_by: SortKey::Tvl,
            order: SortOrder::Desc,
        }
    }
}

impl TableState {
    /// Clicking the active column flips the order; a new column resets to
    /// descending.
    pub fn sort_on(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.order = match self.order {
                SortOrder::Desc => SortOrder::Asc,
                SortOrder::Asc => SortOrder::Desc,
            };
        } else {
            self.sort_by = key;
            self.order = SortOrder::Desc;
        }
    }
}

/// Case-insensitive substring match on the pair name, keeping catalog order
pub fn filter_pools<'a>(pools: &'a [Pool], search_term: &str) -> Vec<&'a Pool> {
    let needle = search_term.to_lowercase();
    pools
        .iter()
        .filter(|pool| pool.pair.to_lowercase().contains(&needle))
        .collect()
}

/// Filter then sort by the numeric value parsed out of the formatted
/// column figure. The sort is stable, so ties keep catalog order.
pub fn filter_and_sort<'a>(
    pools: &'a [Pool],
    search_term: &str,
    sort_by: SortKey,
    order: SortOrder,
) -> Vec<&'a Pool> {
    let mut rows = filter_pools(pools, search_term);
    rows.sort_by(|a, b| {
        let (x, y) = (column_value(a, sort_by), column_value(b, sort_by));
        match order {
            SortOrder::Desc => y.cmp(&x),
            SortOrder::Asc => x.cmp(&y),
        }
    });
    rows
}

fn column_value(pool: &Pool, key: SortKey) -> Decimal {
    match key {
        SortKey::Tvl => figure_value(&pool.tvl),
        SortKey::Apy => figure_value(&pool.apy),
        SortKey::Volume => figure_value(&pool.volume_24h),
    }
}
