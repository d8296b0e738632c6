//=========================================================================
// Aetheric Scenes: Library Root
//
// A bounded scene stack driven one frame at a time, plus the winit host
// that runs it.
//
// Layout:
// - `core`: scene stack, input state, render surface, resources and the
//   frame driver. Platform independent, usable headless.
// - `logging`: env_logger setup for binaries.
// - `platform` / `engine`: winit host and the builder that wires it up,
//   kept private behind `Engine` / `EngineBuilder`.
//
// Typical usage:
// ```no_run
// use aetheric_scenes::prelude::*;
//
// EngineBuilder::<MyScene>::new()
//     .build()
//     .run(|stack| stack.push(Base::new()))?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod logging;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
