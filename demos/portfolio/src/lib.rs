use wasm_bindgen::prelude::*;
use orbit_engine::*;

mod game;
mod orbit;
mod profile;
mod theme;
use game::PortfolioBackdrop;

#[cfg(feature = "vectors")]
orbit_web::export_game!(PortfolioBackdrop, "portfolio", vectors);
#[cfg(not(feature = "vectors"))]
orbit_web::export_game!(PortfolioBackdrop, "portfolio");

/// Current portfolio content as JSON. Empty before init and after shutdown.
#[wasm_bindgen]
pub fn portfolio_profile_json() -> String {
    with_runner(|r| r.game().profile_json()).unwrap_or_default()
}

/// Replace the portfolio content. Returns false (keeping the old content)
/// when the JSON does not parse or no backdrop is running.
#[wasm_bindgen]
pub fn portfolio_load_profile(json: &str) -> bool {
    with_runner(|r| r.game_mut().load_profile(json)).unwrap_or(false)
}
