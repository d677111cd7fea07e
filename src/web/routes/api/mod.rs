pub mod waitlist;

pub use waitlist::{method_not_allowed, waitlist_preflight, waitlist_signup};
