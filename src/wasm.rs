//! Browser entry points, enabled by the `wasm` feature.

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::engine::{Engine, EngineError};
use crate::tile::tiles_from_raw;

impl From<EngineError> for JsValue {
    fn from(value: EngineError) -> Self {
        JsError::new(&value.to_string()).into()
    }
}

/// An [`Engine`] driven from JavaScript.
#[wasm_bindgen]
pub struct JsPuzzle {
    inner: Engine,
    on_complete: Option<Function>,
}

#[wasm_bindgen]
impl JsPuzzle {
    /// Load a level from parallel arrays of raw tile kinds and linear positions.
    /// Throws if the arrays differ in length or a kind is unknown.
    #[wasm_bindgen(constructor)]
    pub fn new(kinds: &[u8], positions: &[u32]) -> Result<JsPuzzle, JsValue> {
        Ok(Self {
            inner: Engine::new(tiles_from_raw(kinds, positions)?),
            on_complete: None,
        })
    }

    /// Called with no arguments whenever an advance leaves the goal tile on the exit.
    ///
    /// An exception thrown by the callback is rethrown from [`advance`](Self::advance), after the step is applied.
    pub fn set_on_complete(&mut self, callback: Option<Function>) {
        self.on_complete = callback;
    }

    /// Drag tile `id` one step. Returns whether it moved.
    pub fn advance(&mut self, id: u32) -> Result<bool, JsValue> {
        let callback = self.on_complete.clone();
        let mut thrown = None;
        let mut sink = || {
            if let Some(callback) = &callback {
                if let Err(error) = callback.call0(&JsValue::NULL) {
                    thrown = Some(error);
                }
            }
        };

        let advance = self.inner.advance_notify(id as usize, &mut sink)?;
        match thrown {
            Some(error) => Err(error),
            None => Ok(advance.from != advance.to),
        }
    }

    /// Current anchor of every tile, in tile id order.
    pub fn positions(&self) -> Vec<u32> {
        self.inner.tiles()
            .iter()
            .map(|tile| tile.position as u32)
            .collect()
    }

    /// Row-major cell values.
    pub fn cells(&self) -> Vec<u8> {
        self.inner.board().rows().concat()
    }

    /// See [`Board::signature`](crate::Board::signature).
    pub fn signature(&self) -> u64 {
        self.inner.signature()
    }

    /// Whether the goal tile sits on the exit.
    pub fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }

    /// Row-by-row dump of the board.
    pub fn dump(&self) -> String {
        self.inner.board().to_string()
    }
}
