pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod status;
pub mod taxonomy;
pub mod view;
