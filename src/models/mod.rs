pub mod bs;
pub mod normal;
pub mod options;
pub mod targets;
