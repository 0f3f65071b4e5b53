pub mod chant; // Syllable composition and cadences
pub mod error;
pub mod session; // Per-session state and events
pub mod theme;
pub mod timer; // Background wave timer
pub mod wave; // Tempo and the three-state caption cycle

pub use chant::{compose, CadenceMode, EchoCount};
pub use session::{Session, SessionEvent, Update};
pub use theme::ThemeKey;
pub use wave::{TempoBpm, WaveCycler, WaveIndex};
