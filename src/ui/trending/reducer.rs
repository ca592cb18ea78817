use crate::ui::mvi::Reducer;
use crate::ui::trending::intent::TrendingIntent;
use crate::ui::trending::state::TrendingState;

pub struct TrendingReducer;

impl Reducer for TrendingReducer {
    type State = TrendingState;
    type Intent = TrendingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Keep the old list visible while reloading.
            TrendingIntent::LoadStarted => TrendingState {
                is_loading: true,
                ..state
            },
            TrendingIntent::Loaded { records } => TrendingState {
                records,
                is_loading: false,
            },
        }
    }
}
