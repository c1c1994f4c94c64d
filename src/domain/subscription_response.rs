/// Reply of the subscribe endpoint.
///
/// A `success: false` reply is a normal outcome, not an error.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionResponse {
    pub success: bool,
    pub message: String,
}
