pub mod models;

pub use models::flag_patch::FlagPatch;
pub use models::user_record::UserRecord;
