//! Job lifecycle domain module

mod notification;
mod state;

pub use notification::{
    ErrorInfo, Notification, NotificationKind, GENERATION_FAILED_TITLE, NO_FILE_DETAIL,
    NO_FILE_TITLE, SUCCESS_DETAIL, SUCCESS_TITLE,
};
pub use state::{Effect, InvalidStateTransition, JobEvent, JobPhase, JobState};
