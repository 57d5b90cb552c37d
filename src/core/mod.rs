pub mod dive;
pub mod report;
pub mod solver;

pub use report::OutputFormat;
pub use solver::Model;
