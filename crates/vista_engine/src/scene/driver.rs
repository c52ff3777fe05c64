//! Scene lifecycle driver
//!
//! Owns the `Running -> TornDown` state machine for a mounted backdrop.
//! Frame scheduling is explicit: the driver holds at most one pending
//! [`FrameTicket`] and cancels it on teardown, so no callback can fire
//! against released resources. Teardown consumes the driver, which makes
//! post-teardown `on_frame`/`on_resize` calls unrepresentable; the `Drop`
//! path shares the same idempotent shutdown.

use crate::input::PointerSample;
use crate::render::{RenderSurface, Viewport};
use crate::scene::{BackdropScene, SceneError};

/// Identifier for one scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameTicket(u64);

impl FrameTicket {
    /// Create a ticket with the given id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The ticket id
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host-side frame scheduling hook
///
/// `request_frame` registers interest in the next display refresh and
/// returns a ticket; `cancel_frame` withdraws a ticket that has not fired
/// yet. A ticket fires at most once, and never after cancellation.
pub trait FrameScheduler {
    /// Schedule one frame callback
    fn request_frame(&mut self) -> FrameTicket;

    /// Cancel a pending frame callback
    fn cancel_frame(&mut self, ticket: FrameTicket);
}

/// Trivial scheduler for hosts that drive the loop themselves
///
/// Hands out monotonically increasing tickets and treats every ticket as
/// firing on the host's next loop iteration; cancellation simply drops it.
pub struct TickScheduler {
    next: u64,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler {
    /// Create a scheduler starting at ticket zero
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl FrameScheduler for TickScheduler {
    fn request_frame(&mut self) -> FrameTicket {
        let ticket = FrameTicket::new(self.next);
        self.next += 1;
        ticket
    }

    fn cancel_frame(&mut self, ticket: FrameTicket) {
        log::trace!("frame ticket {} cancelled", ticket.id());
    }
}

/// Driver owning one mounted backdrop scene
///
/// Constructed in the running state; consumed by [`SceneDriver::teardown`].
pub struct SceneDriver<S: RenderSurface, F: FrameScheduler> {
    scene: BackdropScene,
    surface: S,
    scheduler: F,
    pending: Option<FrameTicket>,
    torn_down: bool,
}

impl<S: RenderSurface, F: FrameScheduler> SceneDriver<S, F> {
    /// Mount a backdrop scene onto the given surface
    ///
    /// Requests the first frame ticket immediately. The surface is expected
    /// to match `viewport`; a host that cannot produce a surface at all
    /// reports that before ever reaching this call.
    pub fn initialize(viewport: Viewport, surface: S, mut scheduler: F) -> Result<Self, SceneError> {
        log::info!(
            "mounting backdrop scene at {}x{}",
            viewport.width,
            viewport.height
        );

        let scene = BackdropScene::new(viewport.aspect());
        let pending = Some(scheduler.request_frame());

        Ok(Self {
            scene,
            surface,
            scheduler,
            pending,
            torn_down: false,
        })
    }

    /// Run one frame callback
    ///
    /// Consumes the pending ticket, advances the scene, presents the frame,
    /// and schedules the next ticket. `elapsed_secs` is total time since
    /// mount; `pointer` is the latest sample from the host's input stream.
    pub fn on_frame(
        &mut self,
        elapsed_secs: f32,
        pointer: PointerSample,
    ) -> Result<(), SceneError> {
        let ticket = self.pending.take().ok_or(SceneError::FrameNotScheduled)?;
        log::trace!("frame ticket {} firing at t={:.3}s", ticket.id(), elapsed_secs);

        self.scene.advance(elapsed_secs, pointer);
        self.surface.present(&self.scene.frame_packet())?;

        self.pending = Some(self.scheduler.request_frame());
        Ok(())
    }

    /// Handle a viewport resize
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.scene
            .camera_mut()
            .set_aspect_ratio(Viewport::new(width, height).aspect());
    }

    /// The scene being driven
    pub fn scene(&self) -> &BackdropScene {
        &self.scene
    }

    /// The surface frames are presented to
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The frame ticket currently awaiting its callback, if any
    pub fn pending_ticket(&self) -> Option<FrameTicket> {
        self.pending
    }

    /// Unmount the scene
    ///
    /// Cancels the pending frame ticket and releases the surface. Taking
    /// `self` by value retires the handle, so no further frame or resize
    /// call can be made against the torn-down scene.
    pub fn teardown(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        if let Some(ticket) = self.pending.take() {
            self.scheduler.cancel_frame(ticket);
        }
        self.surface.release();
        log::info!("backdrop scene torn down");
    }
}

impl<S: RenderSurface, F: FrameScheduler> Drop for SceneDriver<S, F> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
