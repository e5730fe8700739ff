use std::time::Duration;

use clap::Parser;
use log::info;
use rubiks_cube::{adjacency::ADJACENCY, view::FacingMode, CubeModel, Move};
use window::{run, Settings};

mod camera;
mod core;
mod scene;
mod sticker;
mod texture;
mod window;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Whether to run fullscreen or not
    #[clap(short, long)]
    fullscreen: bool,

    /// Window width in logical pixels
    #[clap(long, default_value_t = 800)]
    width: u32,

    /// Window height in logical pixels
    #[clap(long, default_value_t = 600)]
    height: u32,

    /// Minimum time between frames, in milliseconds
    #[clap(long, default_value_t = 10)]
    frame_interval_ms: u64,

    /// Orbit the camera around the cube at this many degrees per second
    #[clap(long, default_value_t = 0.0)]
    spin: f32,

    /// Always light the top, front and left faces instead of the ones facing the camera
    #[clap(long)]
    fixed_facing: bool,

    /// Log the average frame time every 100 frames
    #[clap(long)]
    fps: bool,

    /// Quarter turn to apply before the first frame, as FACE[:DIRECTION]; repeatable
    #[clap(short, long = "turn", value_name = "FACE[:DIRECTION]")]
    turns: Vec<Move>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    ADJACENCY.validate()?;

    let mut model = CubeModel::new();
    for &mv in &cli.turns {
        info!("startup turn: {}", mv);
        model.apply_move(mv);
    }

    let settings = Settings {
        fullscreen: cli.fullscreen,
        width: cli.width,
        height: cli.height,
        frame_interval: Duration::from_millis(cli.frame_interval_ms),
        spin: cli.spin,
        facing: if cli.fixed_facing {
            FacingMode::Fixed
        } else {
            FacingMode::Camera
        },
        fps: cli.fps,
    };
    run(settings, model)
}
