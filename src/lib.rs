#![doc(html_root_url = "https://docs.rs/bno055-accel/0.1.0")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod i2c;
pub mod regs;
pub mod types;
