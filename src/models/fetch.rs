/// Uniform lifecycle for every async view: idle until triggered, then loading,
/// then either the data or a user-facing message. Re-entrant on every trigger;
/// a newer request simply overwrites whatever an older one left behind.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_the_variant() {
        let state: FetchState<Vec<u8>> = FetchState::Loaded(vec![1, 2]);
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());

        let failed: FetchState<Vec<u8>> = FetchState::Failed("boom".into());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.data(), None);

        assert!(FetchState::<()>::Loading.is_loading());
        assert_eq!(FetchState::<()>::default(), FetchState::Idle);
    }
}
