pub mod fallback;
pub mod question;
pub mod server;
pub mod wire_response;

pub use fallback::{FallbackResolver, UpstreamForwarder};
pub use question::QuestionMapper;
pub use server::DnsServerHandler;
pub use wire_response::ResponseEncoder;
