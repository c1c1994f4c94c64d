mod form_state;
mod subscription_request;
mod subscription_response;

pub use form_state::FormState;
pub use subscription_request::SubscriptionRequest;
pub use subscription_response::SubscriptionResponse;
