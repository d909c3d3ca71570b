mod dispatch;
mod locate;
mod resolve;
mod submit;

pub use dispatch::{DispatchOperation, DispatchOutcome, build_send_email_command};
pub use locate::{LocateOperation, PATCH_GLOB};
pub use resolve::ResolveOperation;
pub use submit::{KERNEL_TREE_MARKER, SubmitInput, SubmitOperation, SubmitOutput, validate_kernel_tree};
