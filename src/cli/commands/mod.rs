pub mod complaints;
pub mod config;
pub mod dashboard;
pub mod events;
pub mod feedback;
pub mod init;
pub mod log;
pub mod session;
