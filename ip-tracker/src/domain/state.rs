use ipapi_rs::GeoResult;

/// Outcome of the current lookup interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(GeoResult),
    Error(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }
}
