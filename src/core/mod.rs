pub mod calculator;
pub mod loader;
pub mod logic;
pub mod pager;
pub mod reports;
pub mod session;
