//! Catalog Filter
//!
//! One immutable snapshot of the three filter dimensions. Each change
//! produces a new value, so the list never sees a half-applied update.

use std::fmt;
use std::str::FromStr;

/// Page size options offered by the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Ten,
    Twenty,
    #[default]
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [PageSize::Ten, PageSize::Twenty, PageSize::Fifty, PageSize::Hundred];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s.trim().parse().map_err(|_| format!("Invalid page size: {:?}", s))?;
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == n)
            .ok_or_else(|| format!("Unsupported page size: {}", n))
    }
}

/// Filter snapshot driving the item list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogFilter {
    /// Free-text name filter (empty = no filter)
    pub query: String,
    /// Selected category (None = all)
    pub category: Option<u32>,
    pub page_size: PageSize,
}

impl CatalogFilter {
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Option<u32>) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        Self {
            page_size,
            ..self.clone()
        }
    }

    /// Query text to send, if any
    pub fn name_filter(&self) -> Option<&str> {
        if self.query.is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }
}
