mod command_name;
mod result_set;
mod sample;

pub use command_name::CommandName;
pub use result_set::ResultSet;
pub use sample::Sample;
