#![no_std]

pub mod optional;
pub use optional::*;

pub mod error;
pub use error::*;

pub mod ext;
pub use ext::*;
