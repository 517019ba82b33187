mod toolkit;

pub use toolkit::{GnssToolkit, SolveRequest, ToolExit};
