//! End-to-end checks of the engine against the real resolver and the
//! process-spawning ping probe.

mod check;
