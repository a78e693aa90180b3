pub mod flag_patch;
pub mod user_record;
