mod info;
mod init;
mod modules;
mod resolve;

pub use info::cmd_info;
pub use init::cmd_init;
pub use modules::cmd_modules;
pub use resolve::{ResolveArgs, cmd_resolve};
