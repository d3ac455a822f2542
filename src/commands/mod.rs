pub mod batch;
pub mod interactive;
pub mod menu;
