pub mod list;
pub mod markers;
pub mod show;
