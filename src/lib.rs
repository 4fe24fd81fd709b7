pub mod config;
pub mod form;
pub mod http;
pub mod model;
pub mod proxy;

pub use config::Config;
pub use form::{
    FormError, FormStatus, HttpMeetingApi, MeetingApi, MeetingFields, MeetingForm, ProxyReply,
};
pub use http::{create_router, AppState};
pub use model::{ErrorResponse, MeetingRequest, MeetingResponse};
pub use proxy::{Backend, HttpBackend, Relay};
