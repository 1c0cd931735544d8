pub mod args;
pub mod dataset;
pub mod model;
pub mod utils;
