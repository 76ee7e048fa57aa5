pub mod storage;
pub mod types;

pub use storage::{get_profile_path, load_profile, save_profile};
pub use types::{since_cutoff, ProfileState, SavedAssessment, PROFILE_VERSION};
