#![cfg_attr(not(test), no_std)]

mod error;

pub mod config;
pub mod convert;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::device::Lis3dh;
pub use crate::error::{Error, Result};
