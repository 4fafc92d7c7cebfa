use std::time::Duration;

use log::trace;

/// Default autoplay period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1500);

/// Whether autoplay is advancing the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
	/// Cursor only moves on explicit commands.
	#[default]
	Paused,
	/// Cursor advances on every timer tick.
	Playing,
}

/// Cursor over a precomputed snapshot sequence plus a play/pause flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback {
	cursor: usize,
	len: usize,
	state: PlayState,
}

impl Playback {
	/// Starts paused at the first of `len` snapshots. `len` is clamped to at least one.
	pub fn new(len: usize) -> Self {
		Self {
			cursor: 0,
			len: len.max(1),
			state: PlayState::Paused,
		}
	}

	/// Index of the displayed snapshot.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Number of snapshots being played.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Always false; a playback covers at least one snapshot.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Current play state.
	pub fn state(&self) -> PlayState {
		self.state
	}

	/// True while autoplay is running.
	pub fn is_playing(&self) -> bool {
		self.state == PlayState::Playing
	}

	/// True once the cursor sits on the last snapshot.
	pub fn is_at_end(&self) -> bool {
		self.cursor + 1 >= self.len
	}

	/// True when [`step`](Self::step) would move the cursor.
	pub fn can_step(&self) -> bool {
		!self.is_at_end()
	}

	/// Begins autoplay unless already on the last snapshot.
	pub fn play(&mut self) {
		if self.is_at_end() {
			self.state = PlayState::Paused;
			return;
		}
		trace!("play at step {}", self.cursor);
		self.state = PlayState::Playing;
	}

	/// Stops autoplay, leaving the cursor where it is.
	pub fn pause(&mut self) {
		trace!("pause at step {}", self.cursor);
		self.state = PlayState::Paused;
	}

	/// Play/pause button behavior.
	pub fn toggle(&mut self) {
		if self.is_playing() {
			self.pause();
		} else {
			self.play();
		}
	}

	/// Advances one snapshot; no-op on the last one. Reaching the last
	/// snapshot always leaves the playback paused.
	pub fn step(&mut self) {
		if self.can_step() {
			self.cursor += 1;
		}
		if self.is_at_end() && self.is_playing() {
			trace!("reached last step {}", self.cursor);
			self.state = PlayState::Paused;
		}
	}

	/// Back to the first snapshot, paused.
	pub fn reset(&mut self) {
		trace!("reset from step {}", self.cursor);
		self.cursor = 0;
		self.state = PlayState::Paused;
	}

	/// Timer callback. Returns whether the cursor moved.
	pub fn tick(&mut self) -> bool {
		if !self.is_playing() {
			return false;
		}
		let moved = self.can_step();
		self.step();
		moved
	}
}
