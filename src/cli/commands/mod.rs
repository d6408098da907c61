pub mod config;
pub mod explore;
pub mod init;
pub mod rows;
pub mod stats;
