#![allow(unused_imports)]

mod builders;
mod dns_server_mock;

pub use builders::ReplyBuilder;
pub use dns_server_mock::{MockDnsServer, MockReply};
