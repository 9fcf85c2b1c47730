//! Pre-join meeting setup.
//!
//! [`MeetingSetup`] keeps the camera and microphone toggles for a call and
//! pushes them to the video session whenever they change.

use async_trait::async_trait;
use hireloop_core::HireloopResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Kind of a local media device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Camera,
    Microphone,
    Speaker,
}

/// A local media device reported by the video session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDevice {
    pub id: String,
    pub label: String,
    pub kind: DeviceKind,
}

/// Video-call session as exposed by the calling SDK.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallSession: Send + Sync {
    async fn enable_camera(&self) -> HireloopResult<()>;
    async fn disable_camera(&self) -> HireloopResult<()>;
    async fn enable_microphone(&self) -> HireloopResult<()>;
    async fn disable_microphone(&self) -> HireloopResult<()>;
    async fn join(&self) -> HireloopResult<()>;
    async fn leave(&self) -> HireloopResult<()>;
    async fn list_devices(&self) -> HireloopResult<Vec<MediaDevice>>;
}

/// Toggle state for the setup screen. Camera starts off, microphone on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceToggles {
    pub camera_enabled: bool,
    pub microphone_enabled: bool,
}

impl Default for DeviceToggles {
    fn default() -> Self {
        Self {
            camera_enabled: false,
            microphone_enabled: true,
        }
    }
}

/// Setup controller for a single call.
pub struct MeetingSetup<S: CallSession> {
    session: S,
    toggles: DeviceToggles,
    completed: bool,
}

impl<S: CallSession> MeetingSetup<S> {
    /// Wraps a session and applies the default toggles to it.
    pub async fn new(session: S) -> HireloopResult<Self> {
        let setup = Self {
            session,
            toggles: DeviceToggles::default(),
            completed: false,
        };
        setup.apply_camera(setup.toggles.camera_enabled).await?;
        setup.apply_microphone(setup.toggles.microphone_enabled).await?;
        Ok(setup)
    }

    #[must_use]
    pub const fn toggles(&self) -> DeviceToggles {
        self.toggles
    }

    /// Whether the call has been joined from this setup.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// Switches the camera. The stored toggle changes only if the session accepts it.
    pub async fn set_camera(&mut self, enabled: bool) -> HireloopResult<()> {
        self.apply_camera(enabled).await?;
        self.toggles.camera_enabled = enabled;
        Ok(())
    }

    pub async fn set_microphone(&mut self, enabled: bool) -> HireloopResult<()> {
        self.apply_microphone(enabled).await?;
        self.toggles.microphone_enabled = enabled;
        Ok(())
    }

    pub async fn toggle_camera(&mut self) -> HireloopResult<()> {
        self.set_camera(!self.toggles.camera_enabled).await
    }

    pub async fn toggle_microphone(&mut self) -> HireloopResult<()> {
        self.set_microphone(!self.toggles.microphone_enabled).await
    }

    /// Devices available for the preview.
    pub async fn devices(&self) -> HireloopResult<Vec<MediaDevice>> {
        self.session.list_devices().await
    }

    /// Joins the call. Setup is marked complete only once the join succeeds.
    pub async fn join(&mut self) -> HireloopResult<()> {
        self.session.join().await?;
        self.completed = true;
        info!(
            "Joined call (camera: {}, microphone: {})",
            self.toggles.camera_enabled, self.toggles.microphone_enabled
        );
        Ok(())
    }

    /// Leaves the call and hands the session back.
    pub async fn leave(self) -> HireloopResult<S> {
        self.session.leave().await?;
        Ok(self.session)
    }

    async fn apply_camera(&self, enabled: bool) -> HireloopResult<()> {
        debug!("Camera -> {}", enabled);
        if enabled {
            self.session.enable_camera().await
        } else {
            self.session.disable_camera().await
        }
    }

    async fn apply_microphone(&self, enabled: bool) -> HireloopResult<()> {
        debug!("Microphone -> {}", enabled);
        if enabled {
            self.session.enable_microphone().await
        } else {
            self.session.disable_microphone().await
        }
    }
}

impl<S: CallSession> fmt::Debug for MeetingSetup<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeetingSetup")
            .field("toggles", &self.toggles)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}
