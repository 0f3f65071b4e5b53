//! Repeating wave timer
//!
//! A background thread pushes [`WaveTick`]s into a lock-free ring buffer once per
//! period; the UI thread drains them between frames. The thread is stopped and
//! joined on [`WaveTimer::retune`] and on drop, so a timer never outlives its owner.

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};
#[cfg(feature = "rtrb")]
use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

/// One firing of the wave timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveTick {
    /// 1-based count of ticks produced by this timer
    pub sequence: u64,
}

/// Anything that can report ticks that fired since it was last asked
pub trait TickSource {
    /// Number of ticks pending; consumes them
    fn pending_ticks(&mut self) -> usize;
}

#[cfg(feature = "rtrb")]
impl TickSource for Consumer<WaveTick> {
    fn pending_ticks(&mut self) -> usize {
        let mut count = 0;
        while self.pop().is_ok() {
            count += 1;
        }
        count
    }
}

/// Ring buffer capacity; ticks beyond this are dropped until the UI catches up
#[cfg(feature = "rtrb")]
pub const DEFAULT_CAPACITY: usize = 16;

#[cfg(feature = "rtrb")]
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Owned handle to a running timer thread
#[cfg(feature = "rtrb")]
pub struct WaveTimer {
    period: Duration,
    capacity: usize,
    ticks: Consumer<WaveTick>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

#[cfg(feature = "rtrb")]
impl WaveTimer {
    /// Start a timer firing every `period`
    pub fn spawn(period: Duration) -> io::Result<Self> {
        Self::with_capacity(period, DEFAULT_CAPACITY)
    }

    /// Start a timer with a custom tick buffer size
    pub fn with_capacity(period: Duration, capacity: usize) -> io::Result<Self> {
        let period = period.max(MIN_PERIOD);
        let (producer, ticks) = RingBuffer::<WaveTick>::new(capacity.max(1));
        let stop = Arc::new(AtomicBool::new(false));

        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("wave-timer".into())
            .spawn(move || run(period, producer, thread_stop))?;

        log::debug!("wave timer started, period {}ms", period.as_millis());

        Ok(Self {
            period,
            capacity,
            ticks,
            stop,
            handle: Some(handle),
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the timer thread is still alive
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Tear down the running thread and start a fresh one with a new period.
    /// Ticks still buffered from the old timer are discarded.
    pub fn retune(&mut self, period: Duration) -> io::Result<()> {
        self.stop();
        *self = Self::with_capacity(period, self.capacity)?;
        Ok(())
    }

    /// Stop and join the timer thread. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                log::warn!("wave timer thread panicked");
            }
            log::debug!("wave timer stopped");
        }
    }
}

#[cfg(feature = "rtrb")]
impl TickSource for WaveTimer {
    fn pending_ticks(&mut self) -> usize {
        self.ticks.pending_ticks()
    }
}

#[cfg(feature = "rtrb")]
impl Drop for WaveTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer thread body: deadline-scheduled so sleep jitter does not accumulate
#[cfg(feature = "rtrb")]
fn run(period: Duration, mut producer: Producer<WaveTick>, stop: Arc<AtomicBool>) {
    let mut deadline = Instant::now() + period;
    let mut sequence = 0u64;

    while !stop.load(Ordering::Acquire) {
        let now = Instant::now();
        if now < deadline {
            // Woken early by unpark on stop, or spuriously; the loop re-checks both
            thread::park_timeout(deadline - now);
            continue;
        }

        sequence += 1;
        if producer.push(WaveTick { sequence }).is_err() {
            log::trace!("wave tick {} dropped, buffer full", sequence);
        }

        deadline += period;
        if deadline <= now {
            // Fell more than a period behind (suspended process); resync instead of bursting
            deadline = now + period;
        }
    }
}
