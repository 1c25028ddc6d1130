pub mod runner;

pub use runner::GameRunner;

/// Fresh RNG seed from the browser: `Math.random` mixed with the wall clock.
pub fn entropy_seed() -> u64 {
    let random = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let now = js_sys::Date::now() as u64;
    (random << 32) ^ now
}

/// Generate all `#[wasm_bindgen]` exports for a backdrop.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper returning `None` before init / after shutdown
/// - All wasm-bindgen exports (lifecycle, frame tick, input, buffer accessors)
///
/// Every export is inert while no runner is installed, so a host that keeps
/// calling after teardown gets null pointers and zero counts.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orbit_engine::*;
///
/// mod game;
/// use game::MyBackdrop;
///
/// orbit_web::export_game!(MyBackdrop, "my-backdrop");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The struct type that implements `orbit_engine::Game`
/// - `$game_name`: A string literal used in lifecycle log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let mut runner = $crate::GameRunner::new(game, $crate::entropy_seed());
            runner.init();

            let previous = RUNNER.with(|cell| cell.borrow_mut().replace(runner));
            if let Some(mut old) = previous {
                old.shutdown();
            }
            log::info!("{}: initialized", $game_name);
        }

        /// Tear down: stops frames and star spawning and releases all handles.
        #[wasm_bindgen]
        pub fn game_shutdown() {
            let runner = RUNNER.with(|cell| cell.borrow_mut().take());
            if let Some(mut runner) = runner {
                runner.shutdown();
                log::info!("{}: shut down", $game_name);
            }
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn game_container_rect(left: f32, top: f32, width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::ContainerRect { left, top, width, height }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_animation_end(id: u32) {
            with_runner(|r| r.push_input(InputEvent::AnimationEnd { id }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_sdf_instances_ptr() -> *const f32 {
            with_runner(|r| r.sdf_instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_sdf_instance_count() -> u32 {
            with_runner(|r| r.sdf_instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_stars_ptr() -> *const f32 {
            with_runner(|r| r.stars_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_star_count() -> u32 {
            with_runner(|r| r.star_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height()).unwrap_or(0.0)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_sdf_instances() -> u32 {
            with_runner(|r| r.max_sdf_instances()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_stars() -> u32 {
            with_runner(|r| r.max_stars()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }
    };

    // Variant with vectors feature
    ($game_type:ty, $game_name:literal, vectors) => {
        $crate::export_game!($game_type, $game_name);

        // ---- Vector accessors (only when vectors feature is enabled) ----

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vector_vertices_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertex_count() -> u32 {
            with_runner(|r| r.vector_vertex_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_vector_vertices() -> u32 {
            with_runner(|r| r.max_vector_vertices()).unwrap_or(0)
        }
    };
}
