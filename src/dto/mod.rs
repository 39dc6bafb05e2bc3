/// Liveness payloads.
pub mod health;
/// High score request and response bodies.
pub mod highscore;
