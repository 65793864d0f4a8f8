use phrs::{Card, CompareResult, Hand, Outcome};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct Classification {
    cards: Vec<Card>,
    outcome: Outcome,
}

fn js_err(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Classifies a five-card hand string, returning the sorted cards and the
/// outcome as a JS object.
#[wasm_bindgen]
pub fn classify(hand: &str) -> Result<JsValue, JsValue> {
    let hand: Hand = hand.parse().map_err(js_err)?;
    let classification = Classification {
        cards: hand.cards().to_vec(),
        outcome: hand.outcome(),
    };
    serde_wasm_bindgen::to_value(&classification).map_err(js_err)
}

/// Compares two five-card hand strings, returning `"win"`, `"loss"`, or
/// `"tie"` for the first hand.
#[wasm_bindgen]
pub fn compare(first: &str, second: &str) -> Result<String, JsValue> {
    let first: Hand = first.parse().map_err(js_err)?;
    let second: Hand = second.parse().map_err(js_err)?;

    let result = match first.compare_with(&second) {
        CompareResult::Win => "win",
        CompareResult::Loss => "loss",
        CompareResult::Tie => "tie",
    };
    Ok(result.to_string())
}
