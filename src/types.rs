mod errors;

pub use errors::*;
