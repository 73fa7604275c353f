// error module
mod error;
// loader module
mod loader;

pub use error::InstanceLoaderError;
pub use loader::{load_instance_from_file, parse_instance, Instance};
