pub mod cipher;
pub mod expand;
pub mod feistel;
pub mod mix;
pub mod modexp;

pub use cipher::*;
pub use expand::*;
pub use feistel::*;
pub use mix::*;
pub use modexp::*;
