mod info;
mod wheel;

pub use info::cmd_info;
pub use wheel::cmd_wheel;
