mod maintainer;
mod process;
mod send_email;

pub use maintainer::{GET_MAINTAINER_SCRIPT, ScriptMaintainerLookup};
pub use send_email::GitSendEmail;
