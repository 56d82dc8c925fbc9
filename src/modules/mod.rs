//! Shell controllers, one per concern

pub mod attract;
pub mod backdrop;
pub mod launch;
pub mod navigation;
pub mod theme;
