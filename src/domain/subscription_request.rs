use crate::domain::FormState;

/// Body of `POST /subscribe`.
///
/// The email is forwarded exactly as typed; the server owns validation.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub email: String,
    pub feature_updates: bool,
    pub seo_tips: bool,
}

impl From<FormState> for SubscriptionRequest {
    fn from(form: FormState) -> Self {
        Self {
            email: form.email,
            feature_updates: form.feature_updates,
            seo_tips: form.seo_tips,
        }
    }
}
