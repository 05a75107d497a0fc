//! Port definitions — traits the services are generic over.
//!
//! Randomness and time are the only inputs a handler does not receive from
//! the request, so they are injected here and substituted in tests.

pub mod clock;
pub mod random;

pub use clock::Clock;
pub use random::RandomSource;
