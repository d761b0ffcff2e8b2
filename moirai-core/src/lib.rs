#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod filter;
pub mod ops;
pub mod seq;
