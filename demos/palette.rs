//! Prints a smoothstep gradient between two colors as packed render colors.
//!
//! ```sh
//! cargo run --example palette -- '#ff000000' '#ffff8000' 8
//! ```

use std::env;
use std::process::ExitCode;

use log::{error, info};
use vizmath::ColorRgba;
use vizmath::math::interpolate;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [start, end, steps] = args.as_slice() else {
        error!("usage: palette <#AARRGGBB> <#AARRGGBB> <steps>");
        return ExitCode::FAILURE;
    };
    let (start, end) = match (start.parse::<ColorRgba>(), end.parse::<ColorRgba>()) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => {
            error!("invalid color: {e}");
            return ExitCode::FAILURE;
        }
    };
    let steps = match steps.parse::<usize>() {
        Ok(steps) if steps >= 2 => steps,
        _ => {
            error!("steps must be a number >= 2, got {steps}");
            return ExitCode::FAILURE;
        }
    };

    info!("Blending {start} to {end} in {steps} steps");
    for i in 0..steps {
        let t = i as f32 / (steps - 1) as f32;
        let color = ColorRgba::lerp(&start, &end, interpolate(0.0, 1.0, t, false));
        println!("{color}");
    }
    ExitCode::SUCCESS
}
