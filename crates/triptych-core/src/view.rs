/// Tri-state view model consumed by presentation.
///
/// Exactly one of the three states is ever held. A panel starts in
/// `Loading` because every domain issues an initial fetch on activation;
/// every terminal request outcome overwrites the state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Data(T),
}

impl<T> ViewState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_the_held_state() {
        let loading: ViewState<u32> = ViewState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.data(), None);

        let error: ViewState<u32> = ViewState::Error(String::from("boom"));
        assert_eq!(error.error_message(), Some("boom"));
        assert!(!error.is_loading());

        let data = ViewState::Data(7_u32);
        assert_eq!(data.data(), Some(&7));
        assert_eq!(data.error_message(), None);
    }
}
