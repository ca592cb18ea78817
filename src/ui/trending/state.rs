use crate::trends::TrendRecord;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendingState {
    pub records: Vec<TrendRecord>,
    pub is_loading: bool,
}

impl UiState for TrendingState {}
