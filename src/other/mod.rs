#[cfg(feature = "rust_radsort")]
pub mod rust_radsort;
