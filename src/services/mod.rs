pub mod agent;
pub mod analysis;
pub mod report_file;

pub use agent::AgentSession;
pub use analysis::run_analysis;
