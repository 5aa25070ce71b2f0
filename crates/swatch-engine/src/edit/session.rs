//! Interactive edit session: locate, preview, then commit or cancel.
//!
//! Transitions are pure: [`SessionState::next`] returns the next state and
//! leaves the current one untouched, so the host can drop a failed step.

use swatch_common::{CanonicalColor, EngineError, SessionId};
use swatch_config::FormatConfig;
use tracing::debug;

use super::patch::{propose, TextPatch};
use crate::document::TextSource;
use crate::scanner::ColorMatch;

/// A picker open on one match.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub id: SessionId,
    pub target: ColorMatch,
    /// Color when the picker opened.
    pub original: CanonicalColor,
    pub current: CanonicalColor,
    pub last_patch: Option<TextPatch>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A match sits under the cursor.
    Located(ColorMatch),
    Previewing(Preview),
    /// Terminal: the host must apply the patch and rescan.
    Committed(TextPatch),
    /// Terminal: nothing was applied.
    Cancelled,
}

/// Input from the host or the picker.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Locate(ColorMatch),
    Open,
    Tick(CanonicalColor),
    Commit,
    Cancel,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Locate(_) => "locate",
            SessionEvent::Open => "open",
            SessionEvent::Tick(_) => "tick",
            SessionEvent::Commit => "commit",
            SessionEvent::Cancel => "cancel",
        }
    }
}

/// Result of one transition.
///
/// `patch` is a preview proposal after a tick and the patch to apply after
/// a commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: SessionState,
    pub patch: Option<TextPatch>,
}

impl Step {
    fn to(state: SessionState) -> Self {
        Step { state, patch: None }
    }
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Located(_) => "located",
            SessionState::Previewing(_) => "previewing",
            SessionState::Committed(_) => "committed",
            SessionState::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Committed(_) | SessionState::Cancelled)
    }

    /// Compute the transition for `event` against the current text.
    pub fn next(
        &self,
        event: SessionEvent,
        source: &impl TextSource,
        cfg: &FormatConfig,
    ) -> Result<Step, EngineError> {
        let invalid = EngineError::InvalidTransition {
            state: self.name(),
            event: event.name(),
        };

        match (self, event) {
            (SessionState::Previewing(preview), SessionEvent::Locate(m)) => {
                if m.span == preview.target.span && m.version == preview.target.version {
                    return Ok(Step::to(self.clone()));
                }
                debug!(
                    "session {} cancelled: new match at {}",
                    preview.id.short(),
                    m.span
                );
                Ok(Step::to(SessionState::Located(m)))
            }
            (_, SessionEvent::Locate(m)) => Ok(Step::to(SessionState::Located(m))),

            (SessionState::Located(m), SessionEvent::Open) => {
                let current = source.version();
                if m.version != current {
                    return Err(EngineError::StaleMatch {
                        expected: m.version,
                        current,
                    });
                }
                let preview = Preview {
                    id: SessionId::new(),
                    target: m.clone(),
                    original: m.color,
                    current: m.color,
                    last_patch: None,
                };
                debug!("session {} opened on {} at {}", preview.id.short(), m.kind, m.span);
                Ok(Step::to(SessionState::Previewing(preview)))
            }

            (SessionState::Previewing(preview), SessionEvent::Tick(color)) => {
                let patch = propose(source, &preview.target, &color, cfg)?;
                let next = Preview {
                    current: color,
                    last_patch: Some(patch.clone()),
                    ..preview.clone()
                };
                Ok(Step {
                    state: SessionState::Previewing(next),
                    patch: Some(patch),
                })
            }

            (SessionState::Previewing(preview), SessionEvent::Commit) => {
                let patch = propose(source, &preview.target, &preview.current, cfg)?;
                debug!(
                    "session {} committed: {:?} at {}",
                    preview.id.short(),
                    patch.replacement,
                    patch.span
                );
                Ok(Step {
                    state: SessionState::Committed(patch.clone()),
                    patch: Some(patch),
                })
            }

            (SessionState::Previewing(preview), SessionEvent::Cancel) => {
                debug!("session {} cancelled", preview.id.short());
                Ok(Step::to(SessionState::Cancelled))
            }
            (SessionState::Located(_), SessionEvent::Cancel) => {
                Ok(Step::to(SessionState::Cancelled))
            }

            _ => Err(invalid),
        }
    }
}

/// Owns the state of one picker and advances it in place.
#[derive(Debug, Clone, Default)]
pub struct PickerSession {
    state: SessionState,
}

impl PickerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply `event`, returning the patch it produced if any.
    ///
    /// On error the state is unchanged.
    pub fn handle(
        &mut self,
        event: SessionEvent,
        source: &impl TextSource,
        cfg: &FormatConfig,
    ) -> Result<Option<TextPatch>, EngineError> {
        let step = self.state.next(event, source, cfg)?;
        self.state = step.state;
        Ok(step.patch)
    }
}
