mod confirmation;
mod mail_sender;
mod maintainer_lookup;

pub use confirmation::{Confirmation, ConfirmationProvider};
pub use mail_sender::{MailSender, SendEmailCommand};
pub use maintainer_lookup::MaintainerLookup;
