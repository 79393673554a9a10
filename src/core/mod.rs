pub mod backup;
pub mod browser;
pub mod criteria;
pub mod entry;
pub mod filter;
pub mod log;
pub mod menu;
pub mod reconcile;
pub mod search;
