#[cfg(feature = "csr")]
pub mod app;
pub mod contact;
pub mod content;
pub mod reveal;
pub mod scroll;
pub mod theme;
