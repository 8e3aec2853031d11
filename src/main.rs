use cloud_hangman::audio::open_sounds;
use cloud_hangman::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use cloud_hangman::gui::{ScreenStyle, render_frame};
use cloud_hangman::input::InputSystem;
use cloud_hangman::presentation::{Presentation, load_background};
use cloud_hangman::{Catalog, Game, GameConfig, GameError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context =
        sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;

    let window = video_subsystem
        .window(&config.title, SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    // Mouse events arrive in logical coordinates even if the window is scaled
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let background = load_background(&texture_creator, &config.background_path);
    let mut presentation = Presentation::new(canvas, background);

    let mut sounds = open_sounds(&sdl_context, &config.sounds_dir);
    let mut event_pump = sdl_context.event_pump()?;

    let catalog = Catalog::load(&config.categories_path);
    let mut game = Game::new(catalog, &config, StdRng::from_entropy());
    let mut input = InputSystem::new();
    let style = ScreenStyle::default();
    let frame = config.frame_duration();

    log::info!(
        "Started with {} categories over {} pages",
        game.catalog().len(),
        game.pages().page_count()
    );

    'running: loop {
        input.update_context(game.phase());

        for action in input.poll_events(&mut event_pump) {
            for cue in game.handle(action) {
                sounds.play(cue);
            }
        }
        if game.quit_requested() {
            break 'running;
        }

        render_frame(&mut presentation, &game, &style)?;

        std::thread::sleep(frame);
    }

    log::info!(
        "Final score: {}/{}",
        game.session().score(),
        game.session().games_played()
    );

    Ok(())
}
