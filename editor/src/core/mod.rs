//! Pure request classification. No I/O.

pub mod assets;
pub mod images;
