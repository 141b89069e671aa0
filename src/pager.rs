//! Item List Pager
//!
//! State machine behind the infinite-scroll list. Two triggers drive it:
//! a filter change (`reset`) and the end-of-list sensor (`advance`).
//! Every fetch is issued as a `PageTicket` tagged with the filter epoch,
//! and `resolve` drops results whose ticket no longer matches.

use crate::api::{FetchError, ItemsQuery};
use crate::filter::CatalogFilter;
use crate::models::ItemSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A page fetch is in flight
    Loading,
    /// Last fetch settled (success or failure)
    Loaded,
}

/// One issued page request
#[derive(Debug, Clone, PartialEq)]
pub struct PageTicket {
    pub epoch: u64,
    pub page: u32,
    pub query: ItemsQuery,
}

/// What `resolve` did with a response
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Page appended, with its length
    Appended(usize),
    /// Fetch failed; nothing appended
    Failed(FetchError),
    /// Ticket belongs to a superseded epoch or page; ignored
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct Pager {
    filter: CatalogFilter,
    items: Vec<ItemSummary>,
    page: u32,
    phase: LoadPhase,
    epoch: u64,
    /// Set when a page came back empty
    exhausted: bool,
    /// Successful resolutions across all epochs
    settled_pages: u64,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[ItemSummary] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn settled_pages(&self) -> u64 {
        self.settled_pages
    }

    /// Loaded, nothing accumulated, and nothing pending
    pub fn is_empty_result(&self) -> bool {
        self.phase == LoadPhase::Loaded && self.items.is_empty()
    }

    /// Start a new filter epoch: clear results, rewind to page 1 and issue its ticket.
    pub fn reset(&mut self, filter: CatalogFilter) -> PageTicket {
        self.epoch += 1;
        self.filter = filter;
        self.items.clear();
        self.page = 1;
        self.exhausted = false;
        self.issue()
    }

    /// Request the next page. `None` while a fetch is in flight, before the
    /// first reset, or once the epoch is exhausted.
    ///
    /// Only `Loaded` may advance and every issue moves to `Loading`, so each
    /// (epoch, page) is requested at most once.
    pub fn advance(&mut self) -> Option<PageTicket> {
        if self.phase != LoadPhase::Loaded || self.exhausted {
            return None;
        }
        self.page = self.page.checked_add(1)?;
        Some(self.issue())
    }

    /// Apply the outcome of a ticket's fetch
    pub fn resolve(&mut self, ticket: &PageTicket, result: Result<Vec<ItemSummary>, FetchError>) -> Resolution {
        if !self.is_current(ticket) {
            return Resolution::Stale;
        }
        self.phase = LoadPhase::Loaded;
        match result {
            Ok(page) => {
                let count = page.len();
                if count == 0 {
                    self.exhausted = true;
                }
                self.items.extend(page);
                self.settled_pages += 1;
                Resolution::Appended(count)
            }
            Err(e) => Resolution::Failed(e),
        }
    }

    fn is_current(&self, ticket: &PageTicket) -> bool {
        self.phase == LoadPhase::Loading && ticket.epoch == self.epoch && ticket.page == self.page
    }

    fn issue(&mut self) -> PageTicket {
        self.phase = LoadPhase::Loading;
        PageTicket {
            epoch: self.epoch,
            page: self.page,
            query: ItemsQuery::for_page(&self.filter, self.page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::filter::PageSize;

    fn make_summary(id: u32) -> ItemSummary {
        ItemSummary {
            id,
            pokedex_id: id,
            name: format!("Item {}", id),
            image: format!("https://img.test/{}.png", id),
            sprite: None,
            categories: vec![],
        }
    }

    fn make_page(first_id: u32, len: u32) -> Vec<ItemSummary> {
        (first_id..first_id + len).map(make_summary).collect()
    }

    fn ten_per_page() -> CatalogFilter {
        CatalogFilter::default().with_page_size(PageSize::Ten)
    }

    fn test_config() -> ApiConfig {
        ApiConfig::new("https://api.test", "items")
    }

    #[test]
    fn test_starts_idle() {
        let mut pager = Pager::new();
        assert_eq!(pager.phase(), LoadPhase::Idle);
        assert_eq!(pager.page(), 1);
        assert!(pager.items().is_empty());
        // Sensor before the first load does nothing
        assert!(pager.advance().is_none());
    }

    #[test]
    fn test_first_page_loads() {
        let mut pager = Pager::new();
        let ticket = pager.reset(ten_per_page());
        assert_eq!(ticket.query.url(&test_config()), "https://api.test/items?limit=10&page=1");
        assert!(pager.is_loading());

        assert_eq!(pager.resolve(&ticket, Ok(make_page(1, 10))), Resolution::Appended(10));
        assert_eq!(pager.items().len(), 10);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn test_scroll_appends_next_page() {
        let mut pager = Pager::new();
        let first = pager.reset(ten_per_page());
        pager.resolve(&first, Ok(make_page(1, 10)));

        let second = pager.advance().expect("advance after load");
        assert_eq!(second.query.url(&test_config()), "https://api.test/items?limit=10&page=2");
        assert_eq!(pager.page(), 2);

        // Sensor fires again while page 2 is pending
        assert!(pager.advance().is_none());
        assert_eq!(pager.page(), 2);

        assert_eq!(pager.resolve(&second, Ok(make_page(11, 10))), Resolution::Appended(10));
        assert_eq!(pager.items().len(), 20);
        assert_eq!(pager.page(), 2);
        let ids: Vec<u32> = pager.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_change_resets() {
        let mut pager = Pager::new();
        let first = pager.reset(ten_per_page());
        pager.resolve(&first, Ok(make_page(1, 10)));
        let second = pager.advance().unwrap();
        pager.resolve(&second, Ok(make_page(11, 10)));

        let typed = pager.reset(ten_per_page().with_category(Some(7)));
        assert!(pager.items().is_empty());
        assert_eq!(pager.page(), 1);
        assert!(pager.is_loading());
        assert!(typed.query.to_query_string().contains("types[]=7"));
        assert_eq!(typed.page, 1);
    }

    #[test]
    fn test_reset_is_always_empty_with_cursor_one() {
        let mut pager = Pager::new();
        let filters = [
            ten_per_page(),
            ten_per_page().with_query("char"),
            ten_per_page().with_query("char").with_category(Some(2)),
            CatalogFilter::default(),
        ];
        for filter in filters {
            let ticket = pager.reset(filter);
            assert!(pager.items().is_empty());
            assert_eq!(pager.page(), 1);
            pager.resolve(&ticket, Ok(make_page(1, 3)));
            if let Some(next) = pager.advance() {
                pager.resolve(&next, Ok(make_page(4, 3)));
            }
        }
    }

    #[test]
    fn test_stale_epoch_is_discarded() {
        let mut pager = Pager::new();
        let old = pager.reset(ten_per_page());
        let current = pager.reset(ten_per_page().with_query("bulba"));

        // Old epoch's response lands after the reset
        assert_eq!(pager.resolve(&old, Ok(make_page(1, 10))), Resolution::Stale);
        assert!(pager.items().is_empty());
        assert!(pager.is_loading());

        assert_eq!(pager.resolve(&current, Ok(make_page(1, 1))), Resolution::Appended(1));
        assert_eq!(pager.items().len(), 1);
    }

    #[test]
    fn test_duplicate_resolution_is_discarded() {
        let mut pager = Pager::new();
        let ticket = pager.reset(ten_per_page());
        pager.resolve(&ticket, Ok(make_page(1, 10)));
        assert_eq!(pager.resolve(&ticket, Ok(make_page(1, 10))), Resolution::Stale);
        assert_eq!(pager.items().len(), 10);
    }

    #[test]
    fn test_failure_appends_nothing() {
        let mut pager = Pager::new();
        let first = pager.reset(ten_per_page());
        pager.resolve(&first, Ok(make_page(1, 10)));
        let second = pager.advance().unwrap();

        let outcome = pager.resolve(&second, Err(FetchError::Status(500)));
        assert_eq!(outcome, Resolution::Failed(FetchError::Status(500)));
        assert_eq!(pager.items().len(), 10);
        assert_eq!(pager.phase(), LoadPhase::Loaded);
        assert_eq!(pager.page(), 2);
        // Failures do not count as settled pages
        assert_eq!(pager.settled_pages(), 1);
    }

    #[test]
    fn test_failed_first_page_leaves_empty_result() {
        let mut pager = Pager::new();
        let ticket = pager.reset(CatalogFilter::default());
        pager.resolve(&ticket, Err(FetchError::Network("offline".into())));
        assert!(pager.is_empty_result());
    }

    #[test]
    fn test_empty_page_exhausts_epoch() {
        let mut pager = Pager::new();
        let first = pager.reset(ten_per_page());
        pager.resolve(&first, Ok(make_page(1, 4)));
        let second = pager.advance().unwrap();
        assert_eq!(pager.resolve(&second, Ok(vec![])), Resolution::Appended(0));
        assert!(pager.is_exhausted());
        assert!(pager.advance().is_none());
        assert_eq!(pager.page(), 2);

        // A new epoch starts fresh
        pager.reset(ten_per_page().with_query("x"));
        assert!(!pager.is_exhausted());
    }

    #[test]
    fn test_settled_pages_grow_across_epochs() {
        let mut pager = Pager::new();
        let first = pager.reset(ten_per_page());
        pager.resolve(&first, Ok(make_page(1, 2)));
        let other = pager.reset(ten_per_page().with_category(Some(1)));
        pager.resolve(&other, Ok(make_page(1, 2)));
        assert_eq!(pager.settled_pages(), 2);
        assert_eq!(pager.epoch(), 2);
    }

    #[test]
    fn test_each_page_issued_once() {
        let mut pager = Pager::new();
        let first = pager.reset(ten_per_page());
        pager.resolve(&first, Ok(make_page(1, 10)));

        let mut issued = vec![];
        for start in [11, 21, 31] {
            let ticket = pager.advance().unwrap();
            // Repeated sensor firings while the page is pending
            assert!(pager.advance().is_none());
            assert!(pager.advance().is_none());
            issued.push((ticket.epoch, ticket.page));
            pager.resolve(&ticket, Ok(make_page(start, 10)));
        }
        assert_eq!(issued, vec![(1, 2), (1, 3), (1, 4)]);
        assert_eq!(pager.items().len(), 40);
    }
}
