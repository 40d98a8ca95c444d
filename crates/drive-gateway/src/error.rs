use drive_commerce::api::ApiError;
use drive_data::FetchError;

/// Map a transport-level failure onto the domain error.
pub(crate) fn api_error(err: FetchError) -> ApiError {
    match err {
        FetchError::RequestError(msg) | FetchError::InvalidUrl(msg) => ApiError::Network(msg),
        FetchError::Timeout(after) => ApiError::Timeout(after),
        FetchError::HttpError { status, message } => ApiError::Http { status, message },
        FetchError::Graphql(messages) => ApiError::Graphql(messages),
        FetchError::ParseError(msg) | FetchError::JsonError(msg) => ApiError::Decode(msg),
    }
}
