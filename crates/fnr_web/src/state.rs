use fnr_model::CredibilityAnalyzer;

pub struct AppState {
    pub analyzer: CredibilityAnalyzer,
}
