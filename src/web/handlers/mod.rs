//! Page handlers rendering Askama templates.

pub mod index;

pub use index::index_handler;
