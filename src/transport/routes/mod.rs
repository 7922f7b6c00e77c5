pub mod info;
pub mod manifests;
pub mod pages;

use crate::{common::ApiError, media::FetchError, navigation::NavigationError};

pub(crate) fn fetch_error(err: &FetchError, path: &str) -> ApiError {
    match err {
        FetchError::UnknownFormat(_) => ApiError::bad_request(err.to_string(), path),
        FetchError::Transport(_) => ApiError::bad_gateway(err.to_string(), path),
        FetchError::InvalidBaseUrl { .. } => ApiError::internal(err.to_string(), path),
    }
}

pub(crate) fn navigation_error(err: &NavigationError, path: &str) -> ApiError {
    match err {
        NavigationError::NoMatch { .. } => ApiError::not_found(err.to_string(), path),
        NavigationError::ViewLoad { .. } => ApiError::internal(err.to_string(), path),
    }
}
