//! Wire types shared by the pharmacy API client and its front ends.

pub mod domain;
pub mod error;
pub mod protocol;
pub mod value;
