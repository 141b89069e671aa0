//! UI Components
//!
//! Reusable Leptos components.

mod category_badge;
mod page_size_selector;
mod filter_bar;
mod item_card;
mod item_list;
mod item_detail;

pub use category_badge::CategoryBadge;
pub use page_size_selector::PageSizeSelector;
pub use filter_bar::FilterBar;
pub use item_card::ItemCard;
pub use item_list::ItemList;
pub use item_detail::ItemDetail;
