mod generate;
mod platforms;

pub use generate::{cmd_navigator, cmd_user_agent, GenerateOptions};
pub use platforms::cmd_platforms;
