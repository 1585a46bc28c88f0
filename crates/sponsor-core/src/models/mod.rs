pub mod category;
pub mod job_posting;
pub mod verdict;

pub use category::RestrictionCategory;
pub use job_posting::JobPosting;
pub use verdict::{Verdict, NO_SIGNAL_REASON, WORK_AUTH_ONLY_REASON};
