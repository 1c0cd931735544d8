pub mod constants;
pub mod decay;
pub mod elo_model;
pub mod rating_store;
pub mod recorder;
pub mod structures;
