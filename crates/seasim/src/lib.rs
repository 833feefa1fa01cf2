//! Engine-agnostic simulation core of the sea scene.
//!
//! Everything here is plain data advanced by [`Simulation::tick`]. The Bevy app
//! only feeds it input and time and mirrors its state onto entities.

pub mod camera;
pub mod celestial;
pub mod clock;
pub mod color;
pub mod config;
pub mod environment;
pub mod error;
pub mod flocking;
pub mod input;
pub mod params;
pub mod particles;
pub mod simulation;
pub mod surface;
pub mod vehicle;
pub mod weather;

pub use config::{SeafarerConfig, SimulationTuning};
pub use error::SimError;
pub use input::InputState;
pub use params::ParameterStore;
pub use simulation::{FrameReport, Simulation};
