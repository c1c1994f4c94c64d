/// Snapshot of the subscribe form fields as the view reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub feature_updates: bool,
    pub seo_tips: bool,
}

/// The pristine form: empty email, both opt-ins checked.
impl Default for FormState {
    fn default() -> Self {
        Self {
            email: String::new(),
            feature_updates: true,
            seo_tips: true,
        }
    }
}
