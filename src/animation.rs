//! Animation port.
//!
//! Views never talk to an animation engine. They describe entrance
//! animations as [`Registration`]s and hand them to an [`AnimationPort`]:
//!
//! ```text
//! register(element, from-state, to-state, timing, scroll-trigger?)
//! ```
//!
//! Two ports ship with the crate:
//!
//! - [`NoopPort`] drops every registration. Views rendered for tests or for
//!   a reduced-motion build use it.
//! - [`Timeline`] records registrations in order and serializes them to the
//!   JSON document embedded in the page. The browser runtime
//!   (`static/motion.js`) reads that document and plays the animations.
//!
//! ## Scroll Triggers
//!
//! A trigger gates playback on an element reaching a point of the viewport.
//! The start position uses the usual two-edge notation:
//!
//! ```text
//! "top bottom-=100"
//!  │   │      └─ offset: 100 units above the viewport edge
//!  │   └─ viewport edge
//!  └─ element edge
//! ```
//!
//! The animation plays once, the first time the element edge crosses the
//! viewport line. [`TriggerStart::is_reached`] is that rule; the runtime
//! evaluates the same comparison against the element's resting box, so a
//! card's from-state translate never delays its trigger.
//!
//! Registrations without a trigger play at mount after their delay,
//! independently of every triggered registration.

use crate::config::AnimationConfig;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TriggerError {
    #[error("trigger start must be \"<element-edge> <viewport-edge>\", got {0:?}")]
    Shape(String),
    #[error("unknown edge {0:?} (expected top, center or bottom)")]
    Edge(String),
    #[error("invalid offset {0:?}")]
    Offset(String),
}

/// DOM id of an animated element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual properties at one end of an animation.
///
/// Unset properties are left alone by the runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AnimState {
    /// Vertical offset from the resting position, in CSS pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl AnimState {
    pub fn opacity(opacity: f32) -> Self {
        Self {
            y: None,
            opacity: Some(opacity),
        }
    }

    pub fn with_y(self, y: f32) -> Self {
        Self { y: Some(y), ..self }
    }
}

/// Duration and start delay, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timing {
    pub duration: f32,
    pub delay: f32,
}

impl Timing {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
        }
    }

    pub fn with_delay(self, delay: f32) -> Self {
        Self { delay, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    /// Position of the edge as a fraction of the extent it belongs to.
    fn fraction(self) -> f32 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        }
    }
}

impl FromStr for Edge {
    type Err = TriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "center" => Ok(Edge::Center),
            "bottom" => Ok(Edge::Bottom),
            other => Err(TriggerError::Edge(other.to_string())),
        }
    }
}

/// Where a scroll trigger fires: when `element_edge` of the trigger element
/// reaches `viewport_edge` shifted by `offset` (negative = up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriggerStart {
    pub element_edge: Edge,
    pub viewport_edge: Edge,
    pub offset: f32,
}

impl TriggerStart {
    /// Distance of the trigger line from the top of the viewport.
    pub fn viewport_line(&self, viewport_height: f32) -> f32 {
        self.viewport_edge.fraction() * viewport_height + self.offset
    }

    /// Whether an element at `element_top` (relative to the viewport top)
    /// with the given height has reached the trigger line.
    ///
    /// `element_top` is the resting position, without any from-state
    /// translate applied to the element.
    pub fn is_reached(&self, element_top: f32, element_height: f32, viewport_height: f32) -> bool {
        let edge = element_top + self.element_edge.fraction() * element_height;
        edge <= self.viewport_line(viewport_height)
    }
}

impl FromStr for TriggerStart {
    type Err = TriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [element, viewport] = parts.as_slice() else {
            return Err(TriggerError::Shape(s.to_string()));
        };

        let (viewport_name, offset) = match viewport.find(['-', '+']) {
            Some(pos) => {
                let (name, rest) = viewport.split_at(pos);
                let sign = if rest.starts_with('-') { -1.0 } else { 1.0 };
                let amount = rest[1..]
                    .strip_prefix('=')
                    .and_then(|n| n.parse::<f32>().ok())
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| TriggerError::Offset(rest.to_string()))?;
                (name, sign * amount)
            }
            None => (*viewport, 0.0),
        };

        Ok(Self {
            element_edge: element.parse()?,
            viewport_edge: viewport_name.parse()?,
            offset,
        })
    }
}

impl fmt::Display for TriggerStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element_edge.name(), self.viewport_edge.name())?;
        if self.offset < 0.0 {
            write!(f, "-={}", -self.offset)
        } else if self.offset > 0.0 {
            write!(f, "+={}", self.offset)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollTrigger {
    pub trigger: ElementId,
    pub start: TriggerStart,
}

/// One entrance animation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub element: ElementId,
    pub from: AnimState,
    pub to: AnimState,
    #[serde(flatten)]
    pub timing: Timing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<ScrollTrigger>,
}

impl Registration {
    pub fn new(element: ElementId, from: AnimState, to: AnimState, timing: Timing) -> Self {
        Self {
            element,
            from,
            to,
            timing,
            trigger: None,
        }
    }

    pub fn on_scroll(self, trigger: ScrollTrigger) -> Self {
        Self {
            trigger: Some(trigger),
            ..self
        }
    }
}

/// Sink for entrance animations.
pub trait AnimationPort {
    fn register(&mut self, registration: Registration);
}

/// Port that ignores every registration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPort;

impl AnimationPort for NoopPort {
    fn register(&mut self, _registration: Registration) {}
}

/// Ordered record of registrations, serialized into the page.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Timeline {
    registrations: Vec<Registration>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Registration targeting the given element, if any.
    pub fn find(&self, element: &str) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|r| r.element.as_str() == element)
    }

    /// JSON document read by the browser runtime.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl AnimationPort for Timeline {
    fn register(&mut self, registration: Registration) {
        self.registrations.push(registration);
    }
}

/// Scroll-triggered rise-and-fade of the `index`-th card of a section.
///
/// The card starts `card_offset` below its resting place and transparent,
/// waits `stagger * (index + 1)` seconds once triggered, and plays when its
/// top edge rises `trigger_offset` above the viewport bottom.
pub fn card_entrance(element: ElementId, index: usize, motion: &AnimationConfig) -> Registration {
    Registration::new(
        element.clone(),
        AnimState::opacity(0.0).with_y(motion.card_offset),
        AnimState::opacity(1.0).with_y(0.0),
        Timing::new(motion.card_duration).with_delay(motion.stagger * (index as f32 + 1.0)),
    )
    .on_scroll(ScrollTrigger {
        trigger: element,
        start: TriggerStart {
            element_edge: Edge::Top,
            viewport_edge: Edge::Bottom,
            offset: -motion.trigger_offset,
        },
    })
}
