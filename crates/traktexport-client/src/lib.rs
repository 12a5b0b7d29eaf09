pub mod auth;
pub mod backoff;
pub mod error;
pub mod export;
pub mod paginate;
pub mod request;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use backoff::RetryPolicy;
pub use error::ClientError;
pub use export::Exporter;
pub use paginate::{paginate, DEFAULT_PAGE_SIZE};
pub use request::Requester;
pub use session::Session;
pub use transport::{HttpTransport, Transport, BASE_URL};
