//! The voice-capture boundary.
//!
//! Audio capture is an external capability: the journal only sees an opaque
//! playable-resource locator plus a duration. This module defines the
//! capability contract and a small recorder state machine over it. Capture
//! failures (permission denied, no device) are caught here and degrade to
//! "recording unavailable"; they never propagate into the journal core.

use crate::errors::CaptureError;
use crate::journal::VoiceNote;
use tracing::{debug, warn};

/// Token for an in-progress capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureHandle(pub u64);

/// The external voice-capture capability.
///
/// Two observable transitions: `start` begins a capture, `stop` ends it and
/// yields the recorded resource. `release` frees a captured resource that
/// was never attached to an entry (cancel-on-discard).
pub trait VoiceCapture {
    /// Begins a capture session.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::Unavailable` when the device cannot be
    /// acquired (e.g. permission denied).
    fn start(&mut self) -> Result<CaptureHandle, CaptureError>;

    /// Ends the capture session and returns the recorded note.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::NotRecording` if the handle does not match an
    /// active session.
    fn stop(&mut self, handle: CaptureHandle) -> Result<VoiceNote, CaptureError>;

    /// Releases the underlying resource of a discarded, unsaved recording.
    fn release(&mut self, resource: &str);
}

#[derive(Debug)]
enum RecorderState {
    Idle,
    Recording(CaptureHandle),
    Captured(VoiceNote),
}

/// A recording session driven by the presentation layer.
///
/// States: Idle, Recording, Captured. A failed start leaves the recorder
/// Idle and usable; the recording UI simply does not transition. Discarding
/// a captured note releases its resource before returning to Idle.
pub struct Recorder<C: VoiceCapture> {
    capture: C,
    state: RecorderState,
}

impl<C: VoiceCapture> Recorder<C> {
    /// Creates an idle recorder over the given capture capability.
    pub fn new(capture: C) -> Self {
        Recorder {
            capture,
            state: RecorderState::Idle,
        }
    }

    /// Whether a capture is currently running.
    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording(_))
    }

    /// Whether a finished recording is waiting to be saved or discarded.
    pub fn has_capture(&self) -> bool {
        matches!(self.state, RecorderState::Captured(_))
    }

    /// Starts recording. A no-op unless the recorder is idle.
    ///
    /// Failure to acquire the capture device is logged and swallowed: the
    /// recorder stays idle.
    pub fn start(&mut self) {
        if !matches!(self.state, RecorderState::Idle) {
            return;
        }
        match self.capture.start() {
            Ok(handle) => {
                debug!("Voice capture started");
                self.state = RecorderState::Recording(handle);
            }
            Err(e) => {
                warn!("Recording unavailable: {}", e);
            }
        }
    }

    /// Stops the running capture, keeping the note for saving or discarding.
    ///
    /// A no-op unless recording. A failed stop is logged and drops the
    /// session, returning the recorder to idle.
    pub fn stop(&mut self) {
        let handle = match std::mem::replace(&mut self.state, RecorderState::Idle) {
            RecorderState::Recording(handle) => handle,
            other => {
                self.state = other;
                return;
            }
        };
        match self.capture.stop(handle) {
            Ok(note) => {
                debug!("Voice capture stopped after {}s", note.duration_secs);
                self.state = RecorderState::Captured(note);
            }
            Err(e) => {
                warn!("Could not finish recording: {}", e);
            }
        }
    }

    /// Hands over the captured note for attaching to an entry.
    ///
    /// Returns `None` when nothing has been captured. The recorder returns
    /// to idle either way; ownership of the resource passes to the caller.
    pub fn take_note(&mut self) -> Option<VoiceNote> {
        match std::mem::replace(&mut self.state, RecorderState::Idle) {
            RecorderState::Captured(note) => Some(note),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Discards whatever the session holds and releases its resource.
    ///
    /// A recording in progress is stopped first so its resource can be
    /// released too.
    pub fn discard(&mut self) {
        if self.is_recording() {
            self.stop();
        }
        if let RecorderState::Captured(note) = std::mem::replace(&mut self.state, RecorderState::Idle)
        {
            debug!("Discarding unsaved recording");
            self.capture.release(&note.resource);
        }
    }
}
