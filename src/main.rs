//! Multiball Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use multiball_pong::platform::web;
    use multiball_pong::renderer::{Canvas2dTarget, Color, GpuRenderer, ShapeBatch};
    use multiball_pong::{Game, GameConfig, RendererKind, RunLoop, StartupError};

    /// Where frames are painted
    enum Backend {
        Canvas(Canvas2dTarget),
        Gpu {
            batch: ShapeBatch,
            renderer: GpuRenderer,
        },
    }

    /// Everything the frame callback and the key listeners share
    struct App {
        game: Game,
        run_loop: RunLoop,
        backend: Backend,
    }

    impl App {
        /// One animation frame; returns whether to schedule the next one
        fn frame(&mut self, time: f64) -> bool {
            match &mut self.backend {
                Backend::Canvas(target) => self.run_loop.frame(time, &mut self.game, target),
                Backend::Gpu { batch, renderer } => {
                    if !self.run_loop.frame(time, &mut self.game, batch) {
                        return false;
                    }
                    match renderer.render(batch) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            renderer.resize(renderer.size.0, renderer.size.1);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory, stopping");
                            self.run_loop.stop();
                            return false;
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                    true
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Multiball Pong starting...");

        match start().await {
            Ok(()) => log::info!("Multiball Pong running!"),
            Err(e) => log::error!("Startup failed: {e}"),
        }
    }

    async fn start() -> Result<(), StartupError> {
        let config = GameConfig::load();
        let canvas = web::find_canvas(&config.canvas_id)?;
        let seed = config.seed.unwrap_or_else(web::clock_seed);

        log::info!("Renderer: {}", config.renderer.as_str());
        let backend = match config.renderer {
            RendererKind::Canvas2d => Backend::Canvas(Canvas2dTarget::new(
                &canvas,
                config.arena_width,
                config.arena_height,
            )?),
            RendererKind::WebGpu => init_gpu(&canvas, &config).await?,
        };

        let run_loop = RunLoop::new(&config);
        let game = Game::new(config, seed)?;
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            run_loop,
            backend,
        }));

        setup_input_handlers(app.clone())?;

        app.borrow_mut().run_loop.start();
        request_animation_frame(app);

        Ok(())
    }

    async fn init_gpu(
        canvas: &HtmlCanvasElement,
        config: &GameConfig,
    ) -> Result<Backend, StartupError> {
        let width = config.arena_width as u32;
        let height = config.arena_height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| StartupError::NoAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let arena = (config.arena_width, config.arena_height);
        let renderer = GpuRenderer::new(surface, &adapter, width, height, arena).await?;

        Ok(Backend::Gpu {
            batch: ShapeBatch::new(config.arena_width, config.arena_height, Color::BLACK),
            renderer,
        })
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), StartupError> {
        let window = web::window()?;

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if web::is_game_key(&key) {
                    event.prevent_default();
                }
                log::trace!("keydown {}", key);
                app.borrow_mut().game.key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                log::trace!("keyup {}", key);
                app.borrow_mut().game.key_up(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, game loop halted");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_going = app.borrow_mut().frame(time);
        if keep_going {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use multiball_pong::platform::HeadlessDriver;
    use multiball_pong::renderer::DrawList;
    use multiball_pong::sim::keys;
    use multiball_pong::{ConfigError, Game, GameConfig, RunLoop};

    const REFRESH_HZ: f64 = 60.0;
    /// Ten seconds of play at 60 Hz
    const FRAMES: u64 = 600;
    /// Frames per paddle sweep direction
    const SWEEP_FRAMES: u64 = 120;

    /// Run a headless session, config path taken from the first argument
    pub fn run() -> Result<(), ConfigError> {
        let config = match std::env::args().nth(1) {
            Some(path) => {
                log::info!("Loading config from {}", path);
                GameConfig::load_path(Path::new(&path))?
            }
            None => GameConfig::default(),
        };
        log::debug!("Effective config:\n{}", config.to_json()?);
        let seed = config.seed.unwrap_or_else(clock_seed);

        let mut run_loop = RunLoop::new(&config);
        let mut target = DrawList::new(config.arena_width, config.arena_height);
        let mut game = Game::new(config, seed)?;
        log::info!("Game initialized with seed: {}", seed);

        run_loop.start();
        let mut driver = HeadlessDriver::new(REFRESH_HZ);
        let frames = driver.run(&mut run_loop, &mut game, &mut target, FRAMES, |frame, game, _| {
            // Sweep the player paddle up, then down
            match frame % (2 * SWEEP_FRAMES) {
                0 => {
                    game.key_up(keys::ARROW_DOWN);
                    game.key_down(keys::ARROW_UP);
                }
                SWEEP_FRAMES => {
                    game.key_up(keys::ARROW_UP);
                    game.key_down(keys::ARROW_DOWN);
                }
                _ => {}
            }
        });
        run_loop.stop();

        log::info!(
            "{} frames, {} ticks, {:.1} s simulated",
            frames,
            game.ticks,
            driver.now_ms() / 1000.0
        );
        for (i, ball) in game.balls.iter().enumerate() {
            log::info!(
                "ball {} {}: pos ({:.1}, {:.1}) vel ({:.1}, {:.1}) r {:.1}",
                i,
                ball.color.css(),
                ball.pos.x,
                ball.pos.y,
                ball.vel.x,
                ball.vel.y,
                ball.radius
            );
        }
        log::info!("player paddle y {:.1}, ai paddle y {:.1}", game.player.y, game.ai.y);
        log::info!("last frame: {} draw calls", target.last_frame().len());

        Ok(())
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Multiball Pong (native, headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
