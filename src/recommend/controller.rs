use tracing::{debug, info, warn};

use crate::{catalog::Catalog, http::RecommendationSource};

use super::{
    error::RecommendError,
    history::{History, HistoryAction},
    selection::Selection,
    status::RequestStatus,
};

/// A request that has passed validation and is waiting on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub prompt: String,
}

/// Holds the form selections, the status of the one outstanding request
/// and the recommendation history.
///
/// Fetching is split in two so the network call can run outside of the UI
/// loop: [`Controller::begin_fetch`] validates and marks the request as
/// loading, [`Controller::settle`] applies its outcome. At most one request
/// is in flight; a second `begin_fetch` while loading is rejected.
#[derive(Debug, Clone)]
pub struct Controller {
    catalog: Catalog,
    selection: Selection,
    status: RequestStatus,
    history: History,
    in_flight: Option<u64>,
    next_request_id: u64,
}

impl Controller {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
            status: RequestStatus::Idle,
            history: History::default(),
            in_flight: None,
            next_request_id: 1,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.selection.set_genre(genre);
        self.log_if_complete();
    }

    pub fn set_mood(&mut self, mood: impl Into<String>) {
        self.selection.set_mood(mood);
        self.log_if_complete();
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        self.selection.set_level(level);
        self.log_if_complete();
    }

    pub fn mood_options(&self) -> &[String] {
        self.catalog.moods_for(self.selection.genre())
    }

    pub fn can_submit(&self) -> bool {
        self.selection.is_complete() && !self.is_loading()
    }

    pub fn clear_history(&mut self) {
        self.history.dispatch(HistoryAction::Clear);
    }

    pub fn begin_fetch(&mut self) -> Result<PendingRequest, RecommendError> {
        if self.is_loading() {
            warn!("Ignoring fetch while another request is in flight");
            return Err(RecommendError::Busy);
        }

        if !self.selection.is_complete() {
            let err = RecommendError::Validation {
                missing: self.selection.missing(),
            };
            self.status = RequestStatus::Error(err.to_string());
            return Err(err);
        }

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(id);
        self.status = RequestStatus::Loading;

        info!(
            id,
            genre = self.selection.genre(),
            mood = self.selection.mood(),
            level = self.selection.level(),
            "Requesting recommendations"
        );

        Ok(PendingRequest {
            id,
            prompt: self.selection.prompt(),
        })
    }

    /// Applies the outcome of request `id`. Returns `false` when `id` is not
    /// the request currently in flight, in which case nothing changes.
    pub fn settle(&mut self, id: u64, result: Result<Vec<String>, RecommendError>) -> bool {
        if self.in_flight != Some(id) {
            debug!(id, "Dropping result of abandoned request");
            return false;
        }
        self.in_flight = None;

        self.status = match result {
            Ok(items) if items.is_empty() => {
                RequestStatus::Error(RecommendError::EmptyResult.to_string())
            }
            Ok(items) => {
                info!(id, count = items.len(), "Recommendations added");
                self.history.dispatch(HistoryAction::AddMany(items));
                RequestStatus::Idle
            }
            Err(e) => {
                warn!(id, "Recommendation request failed: {}", e);
                RequestStatus::Error(e.to_string())
            }
        };
        true
    }

    /// Forgets the in-flight request so that a late result is ignored.
    pub fn abandon(&mut self) {
        if let Some(id) = self.in_flight.take() {
            debug!(id, "Abandoning in-flight request");
            self.status = RequestStatus::Idle;
        }
    }

    pub async fn fetch_recommendations<S>(&mut self, source: &S) -> Result<(), RecommendError>
    where
        S: RecommendationSource + ?Sized,
    {
        let request = self.begin_fetch()?;
        let result = source.recommend(&request.prompt).await;
        let outcome = match &result {
            Ok(items) if items.is_empty() => Err(RecommendError::EmptyResult),
            Ok(_) => Ok(()),
            Err(e) => Err(e.clone()),
        };
        self.settle(request.id, result);
        outcome
    }

    fn log_if_complete(&self) {
        if self.selection.is_complete() {
            debug!(
                genre = self.selection.genre(),
                mood = self.selection.mood(),
                level = self.selection.level(),
                "All selections complete"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;

    use super::*;
    use crate::recommend::error::TRANSPORT_FALLBACK_MESSAGE;

    struct StubSource {
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
        response: Result<Vec<String>, RecommendError>,
    }

    impl StubSource {
        fn new(response: Result<Vec<String>, RecommendError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                response,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecommendationSource for StubSource {
        async fn recommend(&self, prompt: &str) -> Result<Vec<String>, RecommendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.response.clone()
        }
    }

    fn ready_controller() -> Controller {
        let mut controller = Controller::new(Catalog::default());
        controller.set_genre("Fantasy");
        controller.set_mood("Curious");
        controller.set_level("Beginner");
        controller
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn genre_change_resets_mood_and_options() {
        let mut controller = ready_controller();
        assert!(controller.mood_options().contains(&"Curious".to_string()));

        controller.set_genre("Horror");
        assert_eq!(controller.selection().mood(), "");
        assert!(!controller.mood_options().contains(&"Curious".to_string()));
        assert!(!controller.can_submit());
    }

    #[test]
    fn mood_options_empty_without_genre() {
        let controller = Controller::new(Catalog::default());
        assert!(controller.mood_options().is_empty());
    }

    #[tokio::test]
    async fn incomplete_selection_makes_no_call() {
        for (genre, mood, level) in [
            ("", "Curious", "Beginner"),
            ("Fantasy", "", "Beginner"),
            ("Fantasy", "Curious", ""),
        ] {
            let mut controller = Controller::new(Catalog::default());
            controller.set_genre(genre);
            controller.set_mood(mood);
            controller.set_level(level);

            let source = StubSource::new(Ok(strings(&["A"])));
            let result = controller.fetch_recommendations(&source).await;

            assert!(matches!(result, Err(RecommendError::Validation { .. })));
            assert_eq!(source.calls(), 0);
            assert!(controller.status().error_message().is_some());
            assert!(controller.history().is_empty());
        }
    }

    #[tokio::test]
    async fn success_appends_after_existing_history() {
        let mut controller = ready_controller();
        let first = StubSource::new(Ok(strings(&["X"])));
        controller.fetch_recommendations(&first).await.unwrap();

        let second = StubSource::new(Ok(strings(&["A", "B"])));
        controller.fetch_recommendations(&second).await.unwrap();

        assert_eq!(controller.history().entries(), strings(&["X", "A", "B"]));
        assert_eq!(controller.status(), &RequestStatus::Idle);
        assert_eq!(second.calls(), 1);
    }

    #[tokio::test]
    async fn sends_prompt_built_from_selection() {
        let mut controller = ready_controller();
        let source = StubSource::new(Ok(strings(&["A"])));
        controller.fetch_recommendations(&source).await.unwrap();

        let prompts = source.prompts.lock().unwrap();
        assert_eq!(
            prompts.as_slice(),
            [
                "Recommend 6 books for a Beginner Fantasy reader feeling Curious. For each book, provide the title, author, and a brief explanation of why it's suitable. Format your response clearly."
            ]
        );
    }

    #[tokio::test]
    async fn server_error_keeps_history_and_clears_loading() {
        let mut controller = ready_controller();
        controller.settle_history_for_test(strings(&["X"]));

        let source = StubSource::new(Err(RecommendError::Protocol {
            status: 500,
            detail: None,
        }));
        let result = controller.fetch_recommendations(&source).await;

        assert!(result.is_err());
        assert!(!controller.is_loading());
        assert!(controller.status().error_message().unwrap().contains("500"));
        assert_eq!(controller.history().entries(), strings(&["X"]));
    }

    #[tokio::test]
    async fn empty_result_is_reported() {
        let mut controller = ready_controller();
        let source = StubSource::new(Err(RecommendError::EmptyResult));
        let _ = controller.fetch_recommendations(&source).await;

        assert_eq!(
            controller.status(),
            &RequestStatus::Error("No recommendations received".to_string())
        );
        assert!(controller.history().is_empty());
    }

    #[test]
    fn empty_success_list_is_reported_as_empty_result() {
        let mut controller = ready_controller();
        let request = controller.begin_fetch().unwrap();
        assert!(controller.settle(request.id, Ok(Vec::new())));

        assert_eq!(
            controller.status().error_message(),
            Some("No recommendations received")
        );
    }

    #[tokio::test]
    async fn blank_transport_error_uses_fallback_message() {
        let mut controller = ready_controller();
        let source = StubSource::new(Err(RecommendError::transport("")));
        let _ = controller.fetch_recommendations(&source).await;

        assert_eq!(
            controller.status().error_message(),
            Some(TRANSPORT_FALLBACK_MESSAGE)
        );
        assert!(!controller.is_loading());
    }

    #[test]
    fn new_request_clears_previous_error() {
        let mut controller = Controller::new(Catalog::default());
        assert!(controller.begin_fetch().is_err());
        assert!(controller.status().error_message().is_some());

        controller.set_genre("Fantasy");
        controller.set_mood("Curious");
        controller.set_level("Beginner");
        controller.begin_fetch().unwrap();
        assert_eq!(controller.status(), &RequestStatus::Loading);
    }

    #[test]
    fn overlapping_fetch_is_rejected() {
        let mut controller = ready_controller();
        let first = controller.begin_fetch().unwrap();

        assert_eq!(controller.begin_fetch(), Err(RecommendError::Busy));
        assert!(!controller.can_submit());
        assert!(controller.is_loading());

        controller.settle(first.id, Ok(strings(&["A"])));
        assert!(controller.can_submit());
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut controller = ready_controller();
        let first = controller.begin_fetch().unwrap();
        controller.abandon();
        assert!(!controller.is_loading());

        assert!(!controller.settle(first.id, Ok(strings(&["late"]))));
        assert!(controller.history().is_empty());

        let second = controller.begin_fetch().unwrap();
        assert_ne!(first.id, second.id);
        assert!(!controller.settle(first.id, Ok(strings(&["late"]))));
        assert!(controller.is_loading());
    }

    #[test]
    fn clear_history_is_idempotent() {
        let mut controller = ready_controller();
        controller.clear_history();
        assert!(controller.history().is_empty());

        controller.settle_history_for_test(strings(&["A", "B"]));
        controller.clear_history();
        controller.clear_history();
        assert!(controller.history().is_empty());
    }

    impl Controller {
        fn settle_history_for_test(&mut self, items: Vec<String>) {
            let request = self.begin_fetch().unwrap();
            self.settle(request.id, Ok(items));
        }
    }
}
