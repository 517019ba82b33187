pub mod toolkit_command;

pub use toolkit_command::CommandToolkit;
