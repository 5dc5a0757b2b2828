//! Watchface context
//!
//! The watchface owns its collaborators and all of its state:
//! - Samples the clock and lays out the labels on every minute tick
//! - Sweeps the minute label to its new place
//! - Slides the date banner into view on a tap
//! - Recolors the background by hour on color hardware
//!
//! The host delivers callbacks sequentially; nothing here blocks.

use chrono::NaiveDateTime;

use super::events::{Axis, Event};
use super::machine::Lifecycle;
use crate::animation::reveal::{banner_frame, resting_frame};
use crate::animation::{AnimationId, DateReveal, Progress, SweepAnimator, Timeline};
use crate::clock::{self, ClockSample};
use crate::config::FaceConfig;
use crate::geometry::{Angle, Rect, Size};
use crate::layout::{self, FaceLayout, HOUR_LAYER_FRAME, MINUTE_LAYER_FRAME};
use crate::palette;
use crate::traits::{
    AnimationScheduler, DisplayError, FontId, LabelStyle, LayerId, TextAlignment, TextMeasure,
    WindowService,
};

/// Hour digits, large font
const HOUR_STYLE: LabelStyle = LabelStyle::new(FontId::Large, TextAlignment::Left);

/// Minute digits, small font
const MINUTE_STYLE: LabelStyle = LabelStyle::new(FontId::Small, TextAlignment::Left);

/// Date banner, small font
const DATE_STYLE: LabelStyle = LabelStyle::new(FontId::Small, TextAlignment::Center);

/// Watchface state and collaborators
pub struct Watchface<W, T, S> {
    /// Window and layer tree
    window: W,
    /// Text measurement
    text: T,
    /// Animation engine
    scheduler: S,
    /// Display options
    config: FaceConfig,
    /// Load/unload state
    lifecycle: Lifecycle,
    /// Root bounds captured at load
    bounds: Rect,
    /// Sample taken on the last refresh
    sample: Option<ClockSample>,
    /// Layout computed on the last refresh
    layout: Option<FaceLayout>,
    /// Minute label sweep
    sweep: SweepAnimator,
    /// Date banner reveal
    reveal: DateReveal,
}

impl<W, T, S> Watchface<W, T, S>
where
    W: WindowService,
    T: TextMeasure,
    S: AnimationScheduler,
{
    /// Create a watchface; nothing is drawn until [`load`](Self::load)
    pub fn new(window: W, text: T, scheduler: S, config: FaceConfig) -> Self {
        let bounds = window.bounds();
        Self {
            window,
            text,
            scheduler,
            config,
            lifecycle: Lifecycle::Created,
            bounds,
            sample: None,
            layout: None,
            sweep: SweepAnimator::new(),
            reveal: DateReveal::new(),
        }
    }

    /// Dispatch a host event to its handler
    pub fn handle(&mut self, event: Event) -> Result<(), DisplayError> {
        match event {
            Event::Load(now) => self.load(now),
            Event::Unload => {
                self.unload();
                Ok(())
            }
            Event::MinuteTick(now) => self.on_minute_tick(now),
            Event::Tap { axis, direction } => {
                self.on_tap(axis, direction);
                Ok(())
            }
            Event::AnimationFrame { id, progress } => self.on_animation_frame(id, progress),
        }
    }

    /// Set up the layers and show the time at `now`
    ///
    /// The minute label is placed directly; no sweep runs on load.
    pub fn load(&mut self, now: NaiveDateTime) -> Result<(), DisplayError> {
        if self.lifecycle != Lifecycle::Created {
            debug!("load ignored in {:?}", self.lifecycle);
            return Ok(());
        }

        self.bounds = self.window.bounds();

        self.window.set_style(LayerId::Hour, HOUR_STYLE)?;
        self.window.set_frame(LayerId::Hour, HOUR_LAYER_FRAME)?;
        self.window.set_style(LayerId::Minute, MINUTE_STYLE)?;
        self.window.set_frame(LayerId::Minute, MINUTE_LAYER_FRAME)?;
        self.window.set_style(LayerId::Date, DATE_STYLE)?;
        self.window.set_frame(LayerId::Date, banner_frame(self.bounds))?;
        self.window.set_frame(LayerId::Root, resting_frame(self.bounds))?;

        self.lifecycle = self.lifecycle.transition(Event::Load(now));
        info!("watchface loaded");

        let (angle, size) = self.resample(now);
        self.sweep.place(angle, size);
        self.push()
    }

    /// Show the new minute and sweep the minute label to it
    pub fn on_minute_tick(&mut self, now: NaiveDateTime) -> Result<(), DisplayError> {
        if !self.lifecycle.accepts_input() {
            return Ok(());
        }

        let (angle, size) = self.resample(now);
        self.sweep.start(angle, size, &mut self.scheduler);
        self.push()
    }

    /// Reveal the date banner
    ///
    /// Every tap queues its own reveal, whatever the banner is doing.
    pub fn on_tap(&mut self, axis: Axis, direction: i32) {
        if !self.lifecycle.accepts_input() {
            return;
        }

        debug!("tap on {:?} axis ({})", axis, direction);
        self.reveal.trigger(self.bounds, &mut self.scheduler);
    }

    /// Apply one animation frame
    ///
    /// Frames for animations no animator owns any more are dropped.
    pub fn on_animation_frame(
        &mut self,
        id: AnimationId,
        progress: Progress,
    ) -> Result<(), DisplayError> {
        if !self.lifecycle.accepts_input() {
            return Ok(());
        }

        if let Some(frame) = self.sweep.on_frame(id, progress, self.bounds) {
            self.window.set_frame(LayerId::Minute, frame)?;
        } else if let Some(frame) = self.reveal.on_frame(id, progress) {
            self.window.set_frame(LayerId::Root, frame)?;
        } else {
            trace!("stale frame for animation {}", id.raw());
        }
        Ok(())
    }

    /// Cancel every animation in flight and stop handling events
    pub fn unload(&mut self) {
        if self.lifecycle == Lifecycle::Unloaded {
            return;
        }

        self.sweep.cancel(&mut self.scheduler);
        self.reveal.cancel_all(&mut self.scheduler);
        self.lifecycle = self.lifecycle.transition(Event::Unload);
        info!("watchface unloaded");
    }

    /// Sample the clock and lay out the labels for `now`
    ///
    /// Only face state changes here; nothing reaches the window until
    /// [`push`](Self::push). Returns the minute angle and label size for the
    /// sweep.
    fn resample(&mut self, now: NaiveDateTime) -> (Angle, Size) {
        let sample = clock::sample(&now, self.config.use_24h, &self.text);
        let placed = layout::layout(&sample, self.bounds);

        let result = (sample.minute_angle, sample.minute_label_size);
        self.sample = Some(sample);
        self.layout = Some(placed);
        result
    }

    /// Write the last sample and layout to the window
    ///
    /// Every write is absolute, so a push after a failed one brings the
    /// window fully back in line with the face.
    fn push(&mut self) -> Result<(), DisplayError> {
        let (Some(sample), Some(placed)) = (self.sample.as_ref(), self.layout.as_ref()) else {
            return Ok(());
        };

        self.window.set_text(LayerId::Hour, &sample.hour_text)?;
        self.window.set_text(LayerId::Minute, &sample.minute_text)?;
        self.window.set_text(LayerId::Date, &sample.date_text)?;

        self.window.set_frame(LayerId::Hour, placed.hour)?;
        self.window.set_frame(LayerId::Minute, placed.minute)?;

        let background = palette::background(sample.hour_of_day, self.config.capabilities);
        self.window.set_background_color(background)
    }
}

impl<W, T, S> Watchface<W, T, S> {
    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Display options
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Sample from the last refresh
    pub fn sample(&self) -> Option<&ClockSample> {
        self.sample.as_ref()
    }

    /// Layout from the last refresh
    pub fn layout(&self) -> Option<&FaceLayout> {
        self.layout.as_ref()
    }

    /// Minute sweep animator
    pub fn sweep(&self) -> &SweepAnimator {
        &self.sweep
    }

    /// Date reveal animator
    pub fn reveal(&self) -> &DateReveal {
        &self.reveal
    }

    /// Window the face draws into
    pub fn window(&self) -> &W {
        &self.window
    }

    /// Mutable window access, for hosts that render or flush it
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Text measurer used for label sizes
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Animation engine
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable animation engine access, for hosts that drive it
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<W, T> Watchface<W, T, Timeline>
where
    W: WindowService,
    T: TextMeasure,
{
    /// Advance the software timeline to `now_ms` and apply the frames due
    ///
    /// Returns the number of frames delivered.
    pub fn advance_to(&mut self, now_ms: u32) -> Result<usize, DisplayError> {
        let frames = self.scheduler.advance(now_ms);
        for frame in frames.iter() {
            self.on_animation_frame(frame.id, frame.progress)?;
        }
        Ok(frames.len())
    }
}
