//! Job controller use case
//!
//! Owns the single [`JobState`] for a session and sequences
//! selection, submission and notification around it.

use tracing::{info, warn};

use crate::domain::job::{
    Effect, ErrorInfo, InvalidStateTransition, JobEvent, JobPhase, JobState, Notification,
};
use crate::domain::upload::SelectedFile;

use super::file_selector::FileSelector;
use super::ports::{Notifier, SubmissionError, Summarizer};

/// How a generate request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The service returned a summary
    Summarized(String),
    /// The submission failed
    Failed(ErrorInfo),
    /// No file was selected; nothing was sent
    Rejected(ErrorInfo),
}

impl GenerateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Summarized(_))
    }
}

/// Callbacks around the submission, for progress display
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct GenerateCallbacks {
    /// Called right before the upload starts
    pub on_submitting: Option<Box<dyn Fn(&SelectedFile) + Send + Sync>>,
    /// Called once the upload has resolved, before notifying
    pub on_resolved: Option<Box<dyn Fn(JobPhase) + Send + Sync>>,
}

/// Session controller: one selected file, one in-flight job, one result.
///
/// `generate` borrows the controller mutably for the whole upload, so no
/// selection or second submission can happen while it is in flight.
pub struct JobController<S, N>
where
    S: Summarizer,
    N: Notifier,
{
    summarizer: S,
    notifier: N,
    selector: FileSelector,
    state: JobState,
}

impl<S, N> JobController<S, N>
where
    S: Summarizer,
    N: Notifier,
{
    /// Create a controller in the initial empty idle state
    pub fn new(summarizer: S, notifier: N) -> Self {
        Self {
            summarizer,
            notifier,
            selector: FileSelector::new(),
            state: JobState::default(),
        }
    }

    /// Get the current state
    pub fn state(&self) -> &JobState {
        &self.state
    }

    /// Get the file selector
    pub fn selector(&self) -> &FileSelector {
        &self.selector
    }

    /// The file currently selected
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.state.selected_file()
    }

    /// The summary currently displayed
    pub fn summary(&self) -> Option<&str> {
        self.state.summary()
    }

    /// Select a file chosen through the picker
    pub fn select_from_picker(&mut self, file: SelectedFile) -> Result<(), InvalidStateTransition> {
        self.ensure_not_submitting("select a file")?;
        let file = self.selector.select_from_picker(file);
        info!(name = file.name(), media_type = file.media_type(), "file picked");
        self.state.apply(JobEvent::Select(file))?;
        Ok(())
    }

    /// Select from a drop. Returns whether the drop was accepted; a rejected
    /// drop leaves the current selection untouched.
    pub fn select_from_drop(
        &mut self,
        files: Vec<SelectedFile>,
    ) -> Result<bool, InvalidStateTransition> {
        self.ensure_not_submitting("select a file")?;
        let Some(file) = self.selector.select_from_drop(files) else {
            return Ok(false);
        };
        info!(name = file.name(), media_type = file.media_type(), "file dropped");
        self.state.apply(JobEvent::Select(file))?;
        Ok(true)
    }

    /// Remove the selection and reset the picker
    pub fn clear(&mut self) -> Result<(), InvalidStateTransition> {
        self.ensure_not_submitting("clear the selection")?;
        self.selector.clear();
        self.state.apply(JobEvent::Clear)?;
        Ok(())
    }

    /// Run the generate action.
    ///
    /// Without a file this raises the validation notification and never
    /// reaches the summarizer. Otherwise the file is submitted once and the
    /// state settles back to idle whatever the outcome.
    pub async fn generate(
        &mut self,
        callbacks: &GenerateCallbacks,
    ) -> Result<GenerateOutcome, InvalidStateTransition> {
        let file = match self.state.apply(JobEvent::Generate)? {
            Some(Effect::Submit(file)) => file,
            other => {
                if let Some(Effect::Notify(notification)) = other {
                    self.notify(&notification).await;
                }
                info!("generate requested without a selected file");
                return Ok(GenerateOutcome::Rejected(SubmissionError::Validation.into()));
            }
        };

        if let Some(ref cb) = callbacks.on_submitting {
            cb(&file);
        }

        info!(name = file.name(), bytes = file.size_bytes(), "submitting file");
        let result = self.summarizer.submit(&file).await.map_err(ErrorInfo::from);

        let effect = self.state.apply(JobEvent::Resolve(result.clone()))?;

        if let Some(ref cb) = callbacks.on_resolved {
            cb(self.state.phase());
        }

        if let Some(Effect::Notify(notification)) = effect {
            self.notify(&notification).await;
        }
        self.state.settle();

        Ok(match result {
            Ok(summary) => {
                info!(chars = summary.chars().count(), "summary received");
                GenerateOutcome::Summarized(summary)
            }
            Err(info) => {
                info!(detail = %info.detail, "submission failed");
                GenerateOutcome::Failed(info)
            }
        })
    }

    fn ensure_not_submitting(&self, action: &str) -> Result<(), InvalidStateTransition> {
        if self.state.is_submitting() {
            return Err(InvalidStateTransition {
                current_phase: JobPhase::Submitting,
                action: action.to_string(),
            });
        }
        Ok(())
    }

    async fn notify(&self, notification: &Notification) {
        if let Err(e) = self
            .notifier
            .notify(
                &notification.title,
                &notification.detail,
                notification.kind.into(),
            )
            .await
        {
            warn!(error = %e, "failed to show notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        NotificationError, NotificationIcon, SubmissionError, SubmissionResult,
    };
    use crate::domain::job::{GENERATION_FAILED_TITLE, NO_FILE_TITLE, SUCCESS_TITLE};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct MockSummarizer {
        result: SubmissionResult,
        calls: Arc<AtomicUsize>,
    }

    impl MockSummarizer {
        fn returning(result: SubmissionResult) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    result,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl Summarizer for MockSummarizer {
        async fn submit(&self, _file: &SelectedFile) -> SubmissionResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    type Sent = Arc<Mutex<Vec<(String, String, NotificationIcon)>>>;

    #[derive(Default)]
    struct MockNotifier {
        sent: Sent,
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn notify(
            &self,
            title: &str,
            message: &str,
            icon: NotificationIcon,
        ) -> Result<(), NotificationError> {
            self.sent
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string(), icon));
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(
            &self,
            _title: &str,
            _message: &str,
            _icon: NotificationIcon,
        ) -> Result<(), NotificationError> {
            Err(NotificationError::SendFailed("no daemon".to_string()))
        }
    }

    fn controller(result: SubmissionResult) -> (JobController<MockSummarizer, MockNotifier>, Arc<AtomicUsize>, Sent) {
        let (summarizer, calls) = MockSummarizer::returning(result);
        let notifier = MockNotifier::default();
        let sent = Arc::clone(&notifier.sent);
        (JobController::new(summarizer, notifier), calls, sent)
    }

    fn mp3(name: &str) -> SelectedFile {
        SelectedFile::new(name, "audio/mpeg", vec![0u8; 2_400_000])
    }

    #[tokio::test]
    async fn generate_success_keeps_file_and_summary() {
        let (mut controller, calls, sent) = controller(Ok("Topic X covered.".to_string()));
        controller.select_from_picker(mp3("lecture.mp3")).unwrap();

        let outcome = controller
            .generate(&GenerateCallbacks::default())
            .await
            .unwrap();

        assert_eq!(outcome, GenerateOutcome::Summarized("Topic X covered.".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(controller.state().is_idle());
        assert_eq!(controller.selected_file().map(|f| f.name()), Some("lecture.mp3"));
        assert_eq!(controller.summary(), Some("Topic X covered."));

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, SUCCESS_TITLE);
        assert_eq!(sent[0].2, NotificationIcon::Success);
    }

    #[tokio::test]
    async fn generate_without_file_never_submits() {
        let (mut controller, calls, sent) = controller(Ok("unused".to_string()));

        let outcome = controller
            .generate(&GenerateCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            GenerateOutcome::Rejected(ErrorInfo::from(SubmissionError::Validation))
        );
        assert!(matches!(outcome, GenerateOutcome::Rejected(ref info) if info.title == NO_FILE_TITLE));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.state(), &JobState::default());

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "Nenhum arquivo selecionado");
        assert_eq!(sent[0].2, NotificationIcon::Error);
    }

    #[tokio::test]
    async fn generate_failure_returns_to_idle_without_summary() {
        let (mut controller, _calls, sent) =
            controller(Err(SubmissionError::Service("model overloaded".to_string())));
        controller.select_from_picker(mp3("talk.m4a")).unwrap();

        let outcome = controller
            .generate(&GenerateCallbacks::default())
            .await
            .unwrap();

        match outcome {
            GenerateOutcome::Failed(info) => {
                assert_eq!(info.title, GENERATION_FAILED_TITLE);
                assert_eq!(info.detail, "model overloaded");
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(controller.state().is_idle());
        assert_eq!(controller.selected_file().map(|f| f.name()), Some("talk.m4a"));
        assert!(controller.summary().is_none());
        assert_eq!(sent.lock().unwrap()[0].1, "model overloaded");
    }

    #[tokio::test]
    async fn selecting_new_file_clears_summary() {
        let (mut controller, _calls, _sent) = controller(Ok("first".to_string()));
        controller.select_from_picker(mp3("a.mp3")).unwrap();
        controller
            .generate(&GenerateCallbacks::default())
            .await
            .unwrap();
        assert_eq!(controller.summary(), Some("first"));

        controller.select_from_picker(mp3("b.mp3")).unwrap();
        assert!(controller.summary().is_none());
    }

    #[tokio::test]
    async fn rejected_drop_keeps_selection() {
        let (mut controller, _calls, _sent) = controller(Ok("s".to_string()));
        controller.select_from_picker(mp3("lecture.mp3")).unwrap();

        let pdf = SelectedFile::new("slides.pdf", "application/pdf", vec![1]);
        assert!(!controller.select_from_drop(vec![pdf]).unwrap());
        assert_eq!(controller.selected_file().map(|f| f.name()), Some("lecture.mp3"));

        assert!(controller.select_from_drop(vec![mp3("other.mp3")]).unwrap());
        assert_eq!(controller.selected_file().map(|f| f.name()), Some("other.mp3"));
    }

    #[tokio::test]
    async fn clear_twice_is_silent() {
        let (mut controller, _calls, sent) = controller(Ok("s".to_string()));
        controller.clear().unwrap();
        controller.clear().unwrap();
        assert_eq!(controller.state(), &JobState::default());
        assert!(sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_resets_picker() {
        let (mut controller, _calls, _sent) = controller(Ok("s".to_string()));
        controller.select_from_picker(mp3("lecture.mp3")).unwrap();
        assert!(!controller.selector().picker_would_change("lecture.mp3"));

        controller.clear().unwrap();
        assert!(controller.selected_file().is_none());
        assert!(controller.selector().picker_would_change("lecture.mp3"));
    }

    #[tokio::test]
    async fn callbacks_fire_around_submission() {
        let (mut controller, _calls, _sent) = controller(Ok("s".to_string()));
        controller.select_from_picker(mp3("lecture.mp3")).unwrap();

        let events = Arc::new(Mutex::new(Vec::new()));
        let on_submit = Arc::clone(&events);
        let on_resolve = Arc::clone(&events);
        let callbacks = GenerateCallbacks {
            on_submitting: Some(Box::new(move |file: &SelectedFile| {
                on_submit.lock().unwrap().push(format!("submit {}", file.name()));
            })),
            on_resolved: Some(Box::new(move |phase: JobPhase| {
                on_resolve.lock().unwrap().push(format!("resolved {}", phase));
            })),
        };

        controller.generate(&callbacks).await.unwrap();
        assert_eq!(
            events.lock().unwrap().as_slice(),
            ["submit lecture.mp3".to_string(), "resolved succeeded".to_string()]
        );
    }

    #[tokio::test]
    async fn notifier_failure_is_not_fatal() {
        let (summarizer, _calls) = MockSummarizer::returning(Ok("fine".to_string()));
        let mut controller = JobController::new(summarizer, FailingNotifier);
        controller.select_from_picker(mp3("lecture.mp3")).unwrap();

        let outcome = controller
            .generate(&GenerateCallbacks::default())
            .await
            .unwrap();
        assert!(outcome.is_success());
        assert_eq!(controller.summary(), Some("fine"));
    }
}
