mod cli_error;
mod operation;
mod transitnet_app;

pub use cli_error::CliError;
pub use operation::TransitnetOperation;
pub use transitnet_app::TransitnetApp;
