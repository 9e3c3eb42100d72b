//! Loader Module
//!
//! Finds modules by file name under configured roots and memoizes them in
//! the cache.

mod context;
mod locator;
mod module;
mod roots;

pub use context::{ModuleLoader, SharedModule};
pub use locator::{find_file, list_files};
pub use module::LoadedModule;
pub use roots::load_roots;
