mod requests;
mod responses;

pub use requests::{PostPayload, UserPayload};
pub use responses::{PostEnvelope, UserEnvelope};
