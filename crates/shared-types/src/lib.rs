pub mod mentor;
pub mod onboarding;
pub mod planner;
pub mod profile;
pub mod skills;

pub use mentor::*;
pub use onboarding::*;
pub use planner::*;
pub use profile::*;
pub use skills::*;
