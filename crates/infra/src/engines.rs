pub mod parallel;
pub mod sequential;

pub use parallel::ParallelAnalytics;
pub use sequential::SequentialAnalytics;
