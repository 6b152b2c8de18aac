pub mod audit;
pub mod config;
pub mod db;
pub mod hitlist;
pub mod init;
pub mod list;
pub mod log;
pub mod total;
