pub mod app;
pub mod graph;
pub mod instance_loader;
pub mod path;
