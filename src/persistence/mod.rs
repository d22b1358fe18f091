mod aof;

pub use aof::{Aof, ReplayError};
