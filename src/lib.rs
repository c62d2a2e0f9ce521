#![warn(missing_docs)]

//! # `huarong`
//!
//! The movement engine for [Huarong Dao](https://en.wikipedia.org/wiki/Klotski) (Klotski), the sliding-block
//! puzzle where a 2×2 block has to be walked out of a 5×4 box past 1×1, 1×2 and 2×1 blocks.
//! Begin by building a level with a [`LevelBuilder`], or hand a list of [`Tile`]s straight to [`Engine::new`].
//! Then feed the engine one [`advance()`](crate::Engine::advance) call per drag step reported by your input layer.
//!
//! # Internals
//! Tiles are stamped onto a 5×4 occupancy grid, each covered cell holding the [id](TileKind::id) of its tile.
//! A tile may step in a direction when the cells just past its leading edge are empty; see [`Footprint`].
//!
//! A drag gesture is not a single move but a stream of one-cell steps, and the user may reverse direction halfway.
//! The engine treats one drag as a depth-first walk over the anchor positions the tile can reach:
//! 1. The first time the tile stands on a position, every legal unvisited neighbor joins the frontier.
//! 2. Each step moves the tile into a neighboring frontier cell, remembering where it came from.
//! 3. With no frontier cell next to it, the tile retraces the last remembered step.
//!
//! Switching to another tile, or exhausting every reachable cell, starts a fresh walk.
//!
//! Any configuration can be reduced to a [`signature`](Board::signature), a `u64`. Among boards holding a goal
//! tile, two signatures are equal exactly when the cells and goal anchor are.

pub use board::Board;
pub use builder::{BuilderInvalidReason, LevelBuilder};
pub use drag::DragSession;
pub use engine::{Advance, CompletionSink, Engine, EngineError, Motion, GOAL};
pub use footprint::{Direction, Footprint};
pub use location::{Location, Position, COLS, ROWS};
pub use tile::{tiles_from_raw, Tile, TileId, TileKind};

pub mod board;
pub mod builder;
pub(crate) mod drag;
pub(crate) mod engine;
pub(crate) mod footprint;
pub(crate) mod location;
pub(crate) mod tile;
#[cfg(feature = "wasm")]
pub mod wasm;
