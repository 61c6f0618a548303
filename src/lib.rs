//! optibench is a library for laying out optical experiments on a
//! breadboard: a board with a regular grid of mounting holes, beams that
//! grow across it one segment at a time, and components placed at the
//! bends.
//!
//! ```
//! use optibench::{Beam, Breadboard, Pattern};
//!
//! let board = Breadboard::new(254.0, 203.2, Pattern::Imperial1In)?;
//! let mut beam = Beam::new(&board).with_wavelength(493.5);
//! beam.begin(25.4, 25.4)?;
//! beam.move_to(127.0, 25.4)?;
//! beam.move_by(0.0, 25.4)?;
//! assert_eq!(beam.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod beam;
pub mod board;
pub mod component;
pub mod error;
pub mod geometry;

pub use beam::point::{BeamPoint, PointId};
pub use beam::spectrum::{wavelength_to_color, Color};
pub use beam::{Beam, LineStyle};
pub use board::{BoardBounds, Breadboard, Pattern};
pub use component::{Component, KinematicMount};
pub use error::{BeamError, BoardError};
pub use geometry::site::Site;
