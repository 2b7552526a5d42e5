//! Job lifecycle state machine

use std::fmt;
use std::mem;
use thiserror::Error;

use super::notification::{ErrorInfo, Notification};
use crate::domain::upload::SelectedFile;

/// Coarse job phase, without the data each state carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl JobPhase {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for JobPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an event arrives in a state that cannot accept it
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {current_phase}")]
pub struct InvalidStateTransition {
    pub current_phase: JobPhase,
    pub action: String,
}

/// Inputs to the state machine
#[derive(Debug, Clone)]
pub enum JobEvent {
    /// A file was accepted by the selector
    Select(SelectedFile),
    /// The selection was removed
    Clear,
    /// The user asked for a summary
    Generate,
    /// The in-flight submission finished
    Resolve(Result<String, ErrorInfo>),
}

impl JobEvent {
    fn action(&self) -> &'static str {
        match self {
            Self::Select(_) => "select a file",
            Self::Clear => "clear the selection",
            Self::Generate => "generate a summary",
            Self::Resolve(_) => "resolve a submission",
        }
    }
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a notification
    Notify(Notification),
    /// Upload this file
    Submit(SelectedFile),
}

/// The single live job state.
///
/// State machine:
///   IDLE -> IDLE (select, clear, generate without a file)
///   IDLE(file) -> SUBMITTING (generate)
///   SUBMITTING -> SUCCEEDED | FAILED (resolve)
///   SUCCEEDED -> IDLE(file, summary) (settle)
///   FAILED -> IDLE(file, none) (settle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    Idle {
        file: Option<SelectedFile>,
        last_summary: Option<String>,
    },
    Submitting {
        file: SelectedFile,
    },
    Succeeded {
        file: SelectedFile,
        summary: String,
    },
    Failed {
        file: SelectedFile,
        reason: ErrorInfo,
    },
}

impl Default for JobState {
    fn default() -> Self {
        Self::Idle {
            file: None,
            last_summary: None,
        }
    }
}

impl JobState {
    /// Get the current phase
    pub fn phase(&self) -> JobPhase {
        match self {
            Self::Idle { .. } => JobPhase::Idle,
            Self::Submitting { .. } => JobPhase::Submitting,
            Self::Succeeded { .. } => JobPhase::Succeeded,
            Self::Failed { .. } => JobPhase::Failed,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == JobPhase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == JobPhase::Submitting
    }

    /// The file currently held, if any
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match self {
            Self::Idle { file, .. } => file.as_ref(),
            Self::Submitting { file }
            | Self::Succeeded { file, .. }
            | Self::Failed { file, .. } => Some(file),
        }
    }

    /// The summary that may be displayed, if any
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Idle { last_summary, .. } => last_summary.as_deref(),
            Self::Succeeded { summary, .. } => Some(summary),
            Self::Submitting { .. } | Self::Failed { .. } => None,
        }
    }

    /// Fold a finished job back into idle.
    /// A success keeps its summary visible; a failure leaves none.
    pub fn settle(&mut self) {
        *self = match mem::take(self) {
            Self::Succeeded { file, summary } => Self::Idle {
                file: Some(file),
                last_summary: Some(summary),
            },
            Self::Failed { file, .. } => Self::Idle {
                file: Some(file),
                last_summary: None,
            },
            other => other,
        };
    }

    /// Apply an event. Performs no I/O; any required work is returned as an [`Effect`].
    ///
    /// A finished job is settled before the event is considered. On error the
    /// state is left as it was.
    pub fn apply(&mut self, event: JobEvent) -> Result<Option<Effect>, InvalidStateTransition> {
        self.settle();
        let action = event.action();

        let (next, outcome) = match (mem::take(self), event) {
            (Self::Idle { .. }, JobEvent::Select(file)) => (
                Self::Idle {
                    file: Some(file),
                    last_summary: None,
                },
                Ok(None),
            ),
            (Self::Idle { last_summary, .. }, JobEvent::Clear) => (
                Self::Idle {
                    file: None,
                    last_summary,
                },
                Ok(None),
            ),
            (
                Self::Idle {
                    file: None,
                    last_summary,
                },
                JobEvent::Generate,
            ) => (
                Self::Idle {
                    file: None,
                    last_summary,
                },
                Ok(Some(Effect::Notify(ErrorInfo::no_file_selected().into()))),
            ),
            (Self::Idle { file: Some(file), .. }, JobEvent::Generate) => (
                Self::Submitting { file: file.clone() },
                Ok(Some(Effect::Submit(file))),
            ),
            (Self::Submitting { file }, JobEvent::Resolve(Ok(summary))) => (
                Self::Succeeded { file, summary },
                Ok(Some(Effect::Notify(Notification::summary_ready()))),
            ),
            (Self::Submitting { file }, JobEvent::Resolve(Err(reason))) => {
                let notification = Notification::from(reason.clone());
                (
                    Self::Failed { file, reason },
                    Ok(Some(Effect::Notify(notification))),
                )
            }
            (state, _) => {
                let current_phase = state.phase();
                (
                    state,
                    Err(InvalidStateTransition {
                        current_phase,
                        action: action.to_string(),
                    }),
                )
            }
        };

        *self = next;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::{NotificationKind, NO_FILE_TITLE};

    fn lecture() -> SelectedFile {
        SelectedFile::new("lecture.mp3", "audio/mpeg", vec![0u8; 64])
    }

    fn notes() -> SelectedFile {
        SelectedFile::new("notes.wav", "audio/wav", vec![1u8; 32])
    }

    fn succeeded_with(summary: &str) -> JobState {
        let mut state = JobState::default();
        state.apply(JobEvent::Select(lecture())).unwrap();
        state.apply(JobEvent::Generate).unwrap();
        state
            .apply(JobEvent::Resolve(Ok(summary.to_string())))
            .unwrap();
        state.settle();
        state
    }

    #[test]
    fn initial_state_is_empty_idle() {
        let state = JobState::default();
        assert!(state.is_idle());
        assert!(state.selected_file().is_none());
        assert!(state.summary().is_none());
    }

    #[test]
    fn select_from_idle_holds_file() {
        let mut state = JobState::default();
        let effect = state.apply(JobEvent::Select(lecture())).unwrap();
        assert!(effect.is_none());
        assert_eq!(state.selected_file(), Some(&lecture()));
    }

    #[test]
    fn select_clears_previous_summary() {
        let mut state = succeeded_with("Topic X covered.");
        assert_eq!(state.summary(), Some("Topic X covered."));

        state.apply(JobEvent::Select(notes())).unwrap();
        assert!(state.summary().is_none());
        assert_eq!(state.selected_file(), Some(&notes()));
    }

    #[test]
    fn generate_without_file_notifies_and_stays_idle() {
        let mut state = JobState::default();
        let effect = state.apply(JobEvent::Generate).unwrap();

        match effect {
            Some(Effect::Notify(n)) => {
                assert_eq!(n.kind, NotificationKind::Error);
                assert_eq!(n.title, NO_FILE_TITLE);
            }
            other => panic!("expected validation notification, got {:?}", other),
        }
        assert_eq!(state, JobState::default());
    }

    #[test]
    fn generate_with_file_requests_submission() {
        let mut state = JobState::default();
        state.apply(JobEvent::Select(lecture())).unwrap();

        let effect = state.apply(JobEvent::Generate).unwrap();
        assert_eq!(effect, Some(Effect::Submit(lecture())));
        assert!(state.is_submitting());
        assert!(state.summary().is_none());
    }

    #[test]
    fn success_settles_to_idle_with_summary() {
        let mut state = JobState::default();
        state.apply(JobEvent::Select(lecture())).unwrap();
        state.apply(JobEvent::Generate).unwrap();

        let effect = state
            .apply(JobEvent::Resolve(Ok("Topic X covered.".to_string())))
            .unwrap();
        assert_eq!(effect, Some(Effect::Notify(Notification::summary_ready())));
        assert_eq!(state.phase(), JobPhase::Succeeded);

        state.settle();
        assert_eq!(
            state,
            JobState::Idle {
                file: Some(lecture()),
                last_summary: Some("Topic X covered.".to_string()),
            }
        );
    }

    #[test]
    fn failure_settles_to_idle_without_summary() {
        let mut state = JobState::default();
        state.apply(JobEvent::Select(notes())).unwrap();
        state.apply(JobEvent::Generate).unwrap();

        let reason = ErrorInfo::generation_failed("model overloaded");
        let effect = state.apply(JobEvent::Resolve(Err(reason.clone()))).unwrap();
        assert_eq!(effect, Some(Effect::Notify(reason.clone().into())));
        assert!(matches!(state, JobState::Failed { reason: ref r, .. } if *r == reason));
        assert!(state.summary().is_none());

        state.settle();
        assert_eq!(
            state,
            JobState::Idle {
                file: Some(notes()),
                last_summary: None,
            }
        );
    }

    #[test]
    fn failed_regeneration_drops_earlier_summary() {
        let mut state = succeeded_with("old summary");
        state.apply(JobEvent::Generate).unwrap();
        state
            .apply(JobEvent::Resolve(Err(ErrorInfo::generation_failed("boom"))))
            .unwrap();
        state.settle();

        assert!(state.summary().is_none());
        assert_eq!(state.selected_file(), Some(&lecture()));
    }

    #[test]
    fn select_while_submitting_is_rejected() {
        let mut state = JobState::default();
        state.apply(JobEvent::Select(lecture())).unwrap();
        state.apply(JobEvent::Generate).unwrap();

        let err = state.apply(JobEvent::Select(notes())).unwrap_err();
        assert_eq!(err.current_phase, JobPhase::Submitting);
        assert!(err.action.contains("select"));
        assert_eq!(state, JobState::Submitting { file: lecture() });
    }

    #[test]
    fn generate_while_submitting_is_rejected() {
        let mut state = JobState::default();
        state.apply(JobEvent::Select(lecture())).unwrap();
        state.apply(JobEvent::Generate).unwrap();

        assert!(state.apply(JobEvent::Generate).is_err());
        assert!(state.apply(JobEvent::Clear).is_err());
        assert!(state.is_submitting());
    }

    #[test]
    fn resolve_while_idle_is_rejected() {
        let mut state = JobState::default();
        let err = state
            .apply(JobEvent::Resolve(Ok("stray".to_string())))
            .unwrap_err();
        assert_eq!(err.current_phase, JobPhase::Idle);
        assert_eq!(state, JobState::default());
    }

    #[test]
    fn clear_on_empty_selection_is_noop() {
        let mut state = JobState::default();
        assert!(state.apply(JobEvent::Clear).unwrap().is_none());
        assert!(state.apply(JobEvent::Clear).unwrap().is_none());
        assert_eq!(state, JobState::default());
    }

    #[test]
    fn clear_keeps_displayed_summary() {
        let mut state = succeeded_with("kept");
        state.apply(JobEvent::Clear).unwrap();
        assert!(state.selected_file().is_none());
        assert_eq!(state.summary(), Some("kept"));
    }

    #[test]
    fn events_after_finish_settle_first() {
        let mut state = JobState::default();
        state.apply(JobEvent::Select(lecture())).unwrap();
        state.apply(JobEvent::Generate).unwrap();
        state
            .apply(JobEvent::Resolve(Ok("done".to_string())))
            .unwrap();

        // Still in Succeeded; the next generate settles and starts over
        let effect = state.apply(JobEvent::Generate).unwrap();
        assert_eq!(effect, Some(Effect::Submit(lecture())));
    }

    #[test]
    fn phase_display() {
        assert_eq!(JobPhase::Idle.to_string(), "idle");
        assert_eq!(JobPhase::Submitting.to_string(), "submitting");
        assert_eq!(JobPhase::Succeeded.to_string(), "succeeded");
        assert_eq!(JobPhase::Failed.to_string(), "failed");
    }

    #[test]
    fn error_display() {
        let err = InvalidStateTransition {
            current_phase: JobPhase::Submitting,
            action: "select a file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("select a file"));
        assert!(msg.contains("submitting"));
    }
}
