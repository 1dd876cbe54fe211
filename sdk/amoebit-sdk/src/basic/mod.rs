pub mod actions;
pub mod session;
