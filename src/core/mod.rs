pub mod controller;
pub mod dashboard;
pub mod table;
