use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Shared slot for the self-rescheduling animation-frame callback.
///
/// The callback holds a clone of its own slot, so the two keep each other
/// alive until the slot is retired.
pub struct FrameSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for FrameSlot<T> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl<T> Default for FrameSlot<T> {
	fn default() -> Self {
		Self(Rc::new(RefCell::new(None)))
	}
}

impl<T> FrameSlot<T> {
	pub fn is_armed(&self) -> bool {
		self.0.borrow().is_some()
	}

	pub fn arm(&self, value: T) {
		*self.0.borrow_mut() = Some(value);
	}

	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
		self.0.borrow().as_ref().map(f)
	}
}

impl<T: 'static> FrameSlot<T> {
	/// Empties the slot once the returned future runs. A callback cannot drop
	/// itself while executing, so it spawns this instead.
	pub fn retire(&self) -> impl Future<Output = ()> + 'static {
		let slot = self.0.clone();
		async move {
			let retired = slot.borrow_mut().take();
			drop(retired);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::rc::Weak;

	use futures::executor::block_on;

	use super::*;

	struct Looping {
		_slot: FrameSlot<Looping>,
		_canvas: Rc<()>,
	}

	fn armed() -> (FrameSlot<Looping>, Weak<()>) {
		let slot = FrameSlot::default();
		let canvas = Rc::new(());
		let weak = Rc::downgrade(&canvas);
		slot.arm(Looping {
			_slot: slot.clone(),
			_canvas: canvas,
		});
		(slot, weak)
	}

	#[test]
	fn self_referencing_callback_outlives_its_owner() {
		let (slot, canvas) = armed();
		drop(slot);
		assert!(canvas.upgrade().is_some());
	}

	#[test]
	fn retiring_releases_callback_and_captures() {
		let (slot, canvas) = armed();
		let retire = slot.retire();
		assert!(slot.is_armed());
		drop(slot);

		block_on(retire);
		assert!(canvas.upgrade().is_none());
	}

	#[test]
	fn retired_slot_can_be_rearmed() {
		let slot = FrameSlot::default();
		slot.arm(1);
		block_on(slot.retire());
		assert!(!slot.is_armed());
		assert_eq!(slot.with(|n| *n), None);

		slot.arm(2);
		assert_eq!(slot.with(|n| *n), Some(2));
	}
}
