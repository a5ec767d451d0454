// Library surface for the binary and for headless integration tests.
pub mod app_dirs;
pub mod config;
pub mod runtime;
pub mod session;
pub mod summary;
pub mod trial;
pub mod ui;
pub mod util;
pub mod word_generator;
pub mod word_list;
