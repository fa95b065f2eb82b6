// Utils compartidos

pub mod address;
pub mod constants;
pub mod storage;

pub use address::*;
pub use constants::*;
pub use storage::*;
