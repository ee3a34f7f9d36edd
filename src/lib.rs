pub mod app_state;
pub mod classify;
pub mod error;
pub mod io_struct;
pub mod server;
