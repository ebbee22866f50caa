pub mod complaint;
pub mod event;
pub mod feedback;
