pub mod digest;
pub mod info;

pub use digest::*;
pub use info::*;
