pub mod dataset;
pub mod loader;
pub mod validate;

pub use dataset::Dataset;
pub use loader::load_dataset;
