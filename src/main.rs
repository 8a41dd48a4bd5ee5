// What you SEE:
// • A limb-darkened star on a speckled sky.
// • A dark planet (object.bmp) sliding across it, left to right, forever.
// • Under the star, a light curve: the dip in brightness while the planet passes.
// Closing the window quits.

mod config;
mod draw;
mod error;
mod render;
mod silhouette;
mod star;
mod transit;
mod types;

use config::TransitConfig;
use draw::Drawer;
use error::Error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use transit::TransitState;
use types::Silhouette;

fn main() -> Result<(), Error> {
    init_tracing();
    let cfg = TransitConfig::default();

    /* --- The planet ---
       Visual: nothing yet; a missing bitmap stops us before any window opens. */
    let silhouette = Silhouette::load(&cfg.silhouette_path)?;

    /* --- Background + baseline brightness (once) ---
       Visual: the star field is the same on every run. */
    let mut rng = StdRng::seed_from_u64(cfg.star_field_seed);
    let (w, h) = cfg.canvas_size();
    let title = cfg.window_title.clone();
    let mut state = TransitState::new(cfg, silhouette, &mut rng);

    /* --- Window ---
       Visual: window opens at the background's size. */
    let mut drawer = Drawer::new(&title, w, h)?;

    /* ------------------------------ Main loop ------------------------------ */
    render::run(&mut state, &mut drawer)?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
