//! Chant composition: syllable segments plus a cadence finish
//!
//! ```
//! use higi_studio::chant::{compose, CadenceMode, EchoCount};
//!
//! assert_eq!(compose(EchoCount::new(2), CadenceMode::Calm), "Hihi~");
//! assert_eq!(compose(EchoCount::new(4), CadenceMode::Excited), "Hihigihi!");
//! assert_eq!(compose(EchoCount::new(6), CadenceMode::Chaotic), "HIHIGIHIGIHI!!!");
//! ```

pub mod cadence;
pub mod echo;

pub use cadence::CadenceMode;
pub use echo::EchoCount;

/// Leading segment, always first
const HEAD: &str = "Hi";
/// Segment at even positions after the head
const EVEN: &str = "gi";
/// Segment at odd positions
const ODD: &str = "hi";

/// Build the uncadenced syllable string
///
/// Segment 0 is "Hi"; segment i > 0 is "gi" when i is even, "hi" when odd.
pub fn base(echo_count: EchoCount) -> String {
    let count = echo_count.get();
    let mut out = String::with_capacity(count * 2);
    for index in 0..count {
        let segment = match index {
            0 => HEAD,
            i if i % 2 == 0 => EVEN,
            _ => ODD,
        };
        out.push_str(segment);
    }
    out
}

/// Number of "!" appended by the excited cadence: round(n / 3) clamped to 1..=3
pub fn emphasis(echo_count: EchoCount) -> usize {
    let scaled = (echo_count.get() as f64 / 3.0).round() as usize;
    scaled.clamp(1, 3)
}

/// Compose the full chant for an echo count and cadence
pub fn compose(echo_count: EchoCount, cadence: CadenceMode) -> String {
    let base = base(echo_count);
    match cadence {
        CadenceMode::Calm => base + "~",
        CadenceMode::Excited => base + &"!".repeat(emphasis(echo_count)),
        CadenceMode::Chaotic => base.to_uppercase() + "!!!",
    }
}
