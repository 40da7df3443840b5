mod init;
mod list;
mod migrate;
mod serve;

pub use init::cmd_init;
pub use list::cmd_list_series;
pub use migrate::cmd_migrate;
pub use serve::cmd_serve;
