// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use loupe_event_state::PointerInput;
use loupe_event_state::drag::{DragOutcome, DragState};
use loupe_view::{ViewTransform, ViewportDebugInfo, ViewportState, ZoomError, ZoomFactor};

use crate::seams::{Container, RenderSink};

/// Largest zoom accepted by a new controller.
pub const DEFAULT_MAX_ZOOM: ZoomFactor = match ZoomFactor::new(16) {
    Some(zoom) => zoom,
    None => ZoomFactor::ONE,
};

/// Interactive controller for one preview image.
///
/// `PreviewController` is the single owner of the [`ViewportState`] and the
/// [`DragState`]. It routes pointer input through the drag state machine,
/// applies zoom requests (deferring them until the image has loaded), and
/// notifies its [`RenderSink`] after every change.
///
/// The container is queried through [`Container::client_size`] on every
/// operation that clamps, so layout changes are picked up without any
/// explicit notification; call [`PreviewController::refresh`] to re-clamp
/// immediately after one.
#[derive(Debug)]
pub struct PreviewController<C, S> {
    container: C,
    sink: S,
    viewport: ViewportState,
    drag: DragState,
    selected_zoom: ZoomFactor,
    pending_zoom: Option<ZoomFactor>,
    min_zoom: ZoomFactor,
    max_zoom: ZoomFactor,
}

impl<C: Container, S: RenderSink> PreviewController<C, S> {
    /// Creates a controller with no image, zoom `1`, and zoom limits
    /// `1..=`[`DEFAULT_MAX_ZOOM`].
    #[must_use]
    pub fn new(container: C, sink: S) -> Self {
        Self {
            container,
            sink,
            viewport: ViewportState::new(),
            drag: DragState::default(),
            selected_zoom: ZoomFactor::ONE,
            pending_zoom: None,
            min_zoom: ZoomFactor::ONE,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Returns the viewport state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Returns the drag state machine.
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The zoom most recently selected, whether or not it has been applied yet.
    #[must_use]
    pub fn selected_zoom(&self) -> ZoomFactor {
        self.selected_zoom
    }

    /// The zoom waiting for the image to finish loading, if any.
    #[must_use]
    pub fn pending_zoom(&self) -> Option<ZoomFactor> {
        self.pending_zoom
    }

    /// Returns the accepted zoom range as `(min, max)`.
    #[must_use]
    pub fn zoom_limits(&self) -> (ZoomFactor, ZoomFactor) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the accepted zoom range.
    ///
    /// The provided range is normalized so that `min <= max`. The current
    /// zoom is left alone; the limits only gate later requests.
    pub fn set_zoom_limits(&mut self, min: ZoomFactor, max: ZoomFactor) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_zoom = min;
        self.max_zoom = max;
    }

    /// Returns the container.
    #[must_use]
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Returns the render sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the render sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the controller, returning the container and the sink.
    pub fn into_parts(self) -> (C, S) {
        (self.container, self.sink)
    }

    /// Handles a raw zoom value, such as a slider position.
    ///
    /// Rejects values that are not whole numbers within the zoom limits,
    /// keeping the previous zoom. Otherwise behaves like
    /// [`PreviewController::select_zoom`].
    pub fn request_zoom(&mut self, raw: f64) -> Result<(), ZoomError> {
        let zoom = ZoomFactor::try_from(raw)
            .inspect_err(|err| tracing::debug!(raw, %err, "zoom request rejected"))?;
        self.select_zoom(zoom)
    }

    /// Selects a new zoom factor.
    ///
    /// If the image is loaded the zoom is applied immediately and the image
    /// recentered; otherwise it is held until [`PreviewController::image_loaded`],
    /// replacing any zoom already waiting.
    pub fn select_zoom(&mut self, zoom: ZoomFactor) -> Result<(), ZoomError> {
        if zoom < self.min_zoom || zoom > self.max_zoom {
            let err = ZoomError::OutOfRange {
                requested: zoom,
                min: self.min_zoom,
                max: self.max_zoom,
            };
            tracing::debug!(%err, "zoom request rejected");
            return Err(err);
        }
        self.selected_zoom = zoom;
        if self.viewport.is_ready() {
            self.pending_zoom = None;
            self.apply_zoom(zoom);
        } else {
            tracing::debug!(%zoom, "image not loaded, deferring zoom");
            self.pending_zoom = Some(zoom);
        }
        Ok(())
    }

    /// Starts showing a new image whose natural size is not known yet.
    ///
    /// Ends any drag and zeroes the offset. The currently selected zoom is
    /// queued and applied once [`PreviewController::image_loaded`] is called.
    /// If that never happens (a broken image), the preview stays inert but
    /// every other operation keeps working.
    pub fn replace_image(&mut self) {
        self.end_drag();
        self.viewport.reset();
        self.pending_zoom = Some(self.selected_zoom);
        tracing::debug!(zoom = %self.selected_zoom, "image replaced");
    }

    /// Reports that the current image has finished loading.
    ///
    /// Applies the pending zoom (or re-applies the current one) and recenters.
    pub fn image_loaded(&mut self, natural: Size) {
        tracing::debug!(?natural, "image loaded");
        self.viewport.set_natural_size(Some(natural));
        let zoom = self.pending_zoom.take().unwrap_or(self.viewport.zoom());
        self.apply_zoom(zoom);
    }

    /// Re-reconciles the offset with the live container size.
    ///
    /// Hosts call this after the container is resized or becomes visible.
    /// Returns `None` while the image is not loaded.
    pub fn refresh(&mut self) -> Option<ViewTransform> {
        let container = self.container.client_size();
        let transform = self.viewport.recenter_or_clamp_if_smaller(container)?;
        self.sink.apply_transform(transform);
        Some(transform)
    }

    /// Returns everything to its initial state: no image, zoom `1`, offset
    /// `(0, 0)`, no drag and nothing pending.
    ///
    /// The sink is told to show the identity transform.
    pub fn reset(&mut self) {
        self.end_drag();
        self.pending_zoom = None;
        self.selected_zoom = ZoomFactor::ONE;
        self.viewport.reset();
        self.sink.apply_transform(self.viewport.transform());
        tracing::debug!("preview reset");
    }

    /// Feeds one pointer or touch event to the drag state machine.
    ///
    /// Moves during a drag are clamped through the viewport and forwarded to
    /// the sink. Use [`DragOutcome::is_consumed`] on the result to decide
    /// whether to suppress the platform's default handling of the event.
    pub fn handle_input(&mut self, input: PointerInput<'_>) -> DragOutcome {
        let outcome = self
            .drag
            .handle(input, self.viewport.offset(), self.viewport.is_ready());
        match outcome {
            DragOutcome::Started => self.sink.set_dragging(true),
            DragOutcome::Moved(requested) => {
                let container = self.container.client_size();
                if let Some(transform) = self.viewport.set_position(container, requested) {
                    self.sink.apply_transform(transform);
                }
            }
            DragOutcome::Ended => self.sink.set_dragging(false),
            DragOutcome::Ignored => {}
        }
        outcome
    }

    /// Snapshot of the viewport against the live container size.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        self.viewport.debug_info(self.container.client_size())
    }

    fn apply_zoom(&mut self, zoom: ZoomFactor) {
        self.viewport.set_zoom(zoom);
        self.refresh();
    }

    fn end_drag(&mut self) {
        if self.drag.end() {
            self.sink.set_dragging(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use loupe_event_state::PointerInput;
    use loupe_view::{ViewTransform, ZoomError, ZoomFactor};

    use super::PreviewController;
    use crate::seams::RenderSink;

    #[derive(Debug, Default)]
    struct LastTransform {
        last: Option<ViewTransform>,
        applied: usize,
        dragging: bool,
    }

    impl RenderSink for LastTransform {
        fn apply_transform(&mut self, transform: ViewTransform) {
            self.last = Some(transform);
            self.applied += 1;
        }

        fn set_dragging(&mut self, dragging: bool) {
            self.dragging = dragging;
        }
    }

    fn zoom(factor: u32) -> ZoomFactor {
        ZoomFactor::new(factor).unwrap()
    }

    fn loaded(container: Size, natural: Size) -> PreviewController<Size, LastTransform> {
        let mut preview = PreviewController::new(container, LastTransform::default());
        preview.replace_image();
        preview.image_loaded(natural);
        preview
    }

    #[test]
    fn zoom_before_load_is_deferred() {
        let mut preview = PreviewController::new(Size::new(500.0, 500.0), LastTransform::default());
        preview.request_zoom(2.0).unwrap();

        assert_eq!(preview.pending_zoom(), Some(zoom(2)));
        assert_eq!(preview.viewport().zoom(), ZoomFactor::ONE);
        assert_eq!(preview.sink().applied, 0);

        preview.image_loaded(Size::new(100.0, 100.0));
        assert_eq!(preview.pending_zoom(), None);
        assert_eq!(preview.viewport().zoom(), zoom(2));
        // 200px image centered in a 500px container.
        assert_eq!(preview.viewport().offset(), Vec2::new(150.0, 150.0));
        assert_eq!(preview.sink().applied, 1);
    }

    #[test]
    fn latest_deferred_zoom_wins() {
        let mut preview = PreviewController::new(Size::new(500.0, 500.0), LastTransform::default());
        preview.replace_image();
        preview.request_zoom(2.0).unwrap();
        preview.request_zoom(5.0).unwrap();
        preview.request_zoom(3.0).unwrap();

        preview.image_loaded(Size::new(100.0, 100.0));
        assert_eq!(preview.viewport().zoom(), zoom(3));
        assert_eq!(preview.sink().applied, 1);
    }

    #[test]
    fn invalid_zoom_keeps_previous() {
        let mut preview = loaded(Size::new(500.0, 500.0), Size::new(100.0, 100.0));
        preview.request_zoom(2.0).unwrap();

        assert_eq!(preview.request_zoom(0.0), Err(ZoomError::NotPositive));
        assert_eq!(preview.request_zoom(2.5), Err(ZoomError::NotInteger));
        assert_eq!(
            preview.request_zoom(40.0),
            Err(ZoomError::OutOfRange {
                requested: zoom(40),
                min: ZoomFactor::ONE,
                max: super::DEFAULT_MAX_ZOOM,
            })
        );
        assert_eq!(preview.viewport().zoom(), zoom(2));
        assert_eq!(preview.selected_zoom(), zoom(2));
    }

    #[test]
    fn zoom_limits_are_normalized() {
        let mut preview = PreviewController::new(Size::ZERO, ());
        preview.set_zoom_limits(zoom(8), zoom(2));
        assert_eq!(preview.zoom_limits(), (zoom(2), zoom(8)));
        assert!(preview.request_zoom(1.0).is_err());
        assert!(preview.request_zoom(8.0).is_ok());
    }

    #[test]
    fn drag_moves_image_and_toggles_dragging() {
        let mut preview = loaded(Size::new(200.0, 200.0), Size::new(400.0, 400.0));

        let down = preview.handle_input(PointerInput::MouseDown(Point::new(100.0, 100.0)));
        assert!(down.is_consumed());
        assert!(preview.sink().dragging);

        preview.handle_input(PointerInput::MouseMove(Point::new(70.0, 80.0)));
        assert_eq!(preview.viewport().offset(), Vec2::new(-30.0, -20.0));
        assert_eq!(preview.sink().last.unwrap().offset, Vec2::new(-30.0, -20.0));

        preview.handle_input(PointerInput::MouseUp);
        assert!(!preview.sink().dragging);
        assert!(!preview.is_dragging());
    }

    #[test]
    fn replace_image_ends_drag_and_waits_for_load() {
        let mut preview = loaded(Size::new(200.0, 200.0), Size::new(400.0, 400.0));
        preview.handle_input(PointerInput::MouseDown(Point::ORIGIN));
        assert!(preview.sink().dragging);

        preview.replace_image();
        assert!(!preview.is_dragging());
        assert!(!preview.sink().dragging);
        assert!(!preview.viewport().is_ready());

        let down = preview.handle_input(PointerInput::MouseDown(Point::ORIGIN));
        assert!(!down.is_consumed());
    }

    #[test]
    fn reset_restores_identity() {
        let mut preview = loaded(Size::new(200.0, 200.0), Size::new(400.0, 400.0));
        preview.request_zoom(3.0).unwrap();
        preview.handle_input(PointerInput::MouseDown(Point::ORIGIN));

        preview.reset();
        assert_eq!(preview.selected_zoom(), ZoomFactor::ONE);
        assert_eq!(preview.pending_zoom(), None);
        assert!(!preview.is_dragging());
        assert_eq!(preview.sink().last, Some(ViewTransform::IDENTITY));
    }

    #[test]
    fn refresh_before_load_does_nothing() {
        let mut preview = PreviewController::new(Size::new(10.0, 10.0), LastTransform::default());
        assert_eq!(preview.refresh(), None);
        assert_eq!(preview.sink().applied, 0);
    }
}
