pub mod gateway;
pub mod log;
pub mod migrate;
pub mod pool;
