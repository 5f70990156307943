use wasm_bindgen::prelude::*;

pub mod board;
pub mod game;
pub mod history;
pub mod session;
pub mod types;
pub mod validator;

use crate::game::GameState;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Checkers session exported to JavaScript.
#[wasm_bindgen]
pub struct CheckersGame {
    inner: GameState,
}

#[wasm_bindgen]
impl CheckersGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: GameState::new(),
        }
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(
        &mut self,
        player: char,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> bool {
        self.inner
            .apply_move(player, from_row, from_col, to_row, to_col)
    }

    /// Same as `applyMove`, but throws the rejection reason.
    #[wasm_bindgen(js_name = tryApplyMove)]
    pub fn try_apply_move(
        &mut self,
        player: char,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<String, String> {
        self.inner
            .try_apply_move(player, from_row, from_col, to_row, to_col)
            .map(|record| record.to_string())
            .map_err(|rejection| rejection.to_string())
    }

    #[wasm_bindgen(js_name = mostRecentMove)]
    pub fn most_recent_move(&self) -> Option<String> {
        self.inner.most_recent_by_priority().map(str::to_string)
    }

    #[wasm_bindgen(js_name = redScore)]
    pub fn red_score(&self) -> u32 {
        self.inner.red_score()
    }

    #[wasm_bindgen(js_name = blackScore)]
    pub fn black_score(&self) -> u32 {
        self.inner.black_score()
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_snapshot())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new()
    }
}
