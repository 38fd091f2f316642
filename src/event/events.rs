use crate::recommend::RecommendError;

/// Results delivered from background tasks to the UI loop. Each carries
/// the id of the request it answers.
#[derive(Debug, Clone)]
pub enum Event {
    RecommendationsFetched(u64, Vec<String>),
    FetchError(u64, RecommendError),
}
