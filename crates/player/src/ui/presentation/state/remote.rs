//! Remote value - the load status of one fetched resource

use crate::application::ServiceError;

/// A value fetched from the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    /// The backend reported that the resource does not exist
    Missing,
    Failed(String),
}

impl<T> Remote<T> {
    /// Not-found errors become `Missing`; every other error becomes `Failed`
    pub fn from_result(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(e) if e.is_not_found() => Remote::Missing,
            Err(e) => Remote::Failed(e.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Remote::Missing)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinct_from_failure() {
        let missing: Remote<()> = Remote::from_result(Err(ServiceError::not_found("movie", 3)));
        assert!(missing.is_missing());

        let failed: Remote<()> = Remote::from_result(Err(ServiceError::Transport("offline".into())));
        assert!(failed.error().is_some_and(|e| e.contains("offline")));
        assert!(!failed.is_missing());
    }

    #[test]
    fn starts_loading() {
        let remote: Remote<u8> = Remote::default();
        assert!(remote.is_loading());
        assert!(remote.ready().is_none());
    }
}
