mod add;
mod detect;
mod list;

pub use add::cmd_add;
pub use detect::cmd_detect;
pub use list::cmd_list;
