//! Clock abstraction used for rate limiting.

/// A monotonic millisecond counter.
///
/// `embedded-hal` only abstracts delays, not a readable clock, so the
/// driver takes this small trait instead. The counter may wrap; elapsed
/// time is computed with wrapping subtraction, so any free-running 32-bit
/// millisecond timer (an Arduino-style `millis()`, a SysTick-derived
/// counter, ...) is a valid implementation.
pub trait MillisClock {
    /// Current counter value in milliseconds.
    fn now_ms(&mut self) -> u32;
}

impl<T: MillisClock> MillisClock for &mut T {
    fn now_ms(&mut self) -> u32 {
        T::now_ms(self)
    }
}
