pub mod clock;
pub mod progress;
pub mod streak;
pub mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use progress::{CompletionOutcome, ProgressEngine, ProgressSummary};
