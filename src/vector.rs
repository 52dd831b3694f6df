mod guard;
mod raw;
mod sequence;
mod traits;


pub use raw::RawMemory;
pub use sequence::Vector;
