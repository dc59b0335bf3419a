//! Cosmetic run-status progression.
//!
//! Pipelines don't actually execute; this is the little progress
//! readout a frontend shows while pretending they do. The state
//! machine is tick-driven so it has no timers of its own: the driver
//! calls [`RunStatus::tick`] once per [`TICK_INTERVAL`], and waits
//! [`COMPLETION_HOLD`] after completion before the tick that returns
//! the status to idle.

use std::time::Duration;

/// How long a driver waits between ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long the completed state stays visible before returning to idle
pub const COMPLETION_HOLD: Duration = Duration::from_millis(500);

/// How much progress one tick adds
pub const STEP: u8 = 30;

/// Where a simulated run currently is.
///
/// Progress runs 0, 30, 60, 90, 100, holds, then returns to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
	/// No run in progress, nothing to display
	#[default]
	Idle,

	/// A run is in progress
	Running { percent: u8 },

	/// A run was stopped mid-way; the percentage stays visible
	/// until the run is resumed or reset
	Paused { percent: u8 },
}

impl RunStatus {
	pub fn new() -> Self {
		Self::Idle
	}

	/// Start a run, or resume a paused one.
	/// A no-op while a run is already in progress.
	pub fn start(&mut self) {
		match *self {
			Self::Idle => *self = Self::Running { percent: 0 },
			Self::Paused { percent } => *self = Self::Running { percent },
			Self::Running { .. } => {}
		}
	}

	/// Pause a run, keeping its percentage visible.
	/// A no-op unless a run is in progress.
	pub fn stop(&mut self) {
		if let Self::Running { percent } = *self {
			*self = Self::Paused { percent };
		}
	}

	/// Back to idle, whatever was happening
	pub fn reset(&mut self) {
		*self = Self::Idle;
	}

	/// Advance one tick.
	///
	/// Progress moves only while running: one [`STEP`] per tick,
	/// capped at 100. The tick after reaching 100 returns to idle;
	/// drivers wait [`COMPLETION_HOLD`] before issuing it.
	pub fn tick(&mut self) {
		if let Self::Running { percent } = *self {
			if percent >= 100 {
				*self = Self::Idle;
			} else {
				*self = Self::Running {
					percent: percent.saturating_add(STEP).min(100),
				};
			}
		}
	}

	/// The percentage to display, if any
	pub fn percent(&self) -> Option<u8> {
		match self {
			Self::Idle => None,
			Self::Running { percent } | Self::Paused { percent } => Some(*percent),
		}
	}

	pub fn is_running(&self) -> bool {
		matches!(self, Self::Running { .. })
	}
}
