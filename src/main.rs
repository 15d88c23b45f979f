use std::path::PathBuf;

use clap::Parser;
use eightd::io::{decode_audio_file, write_wav};
use eightd::{EffectConfig, process};

/// Convert an audio file to 8D audio (rotating stereo effect).
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input audio file (wav, mp3, flac, ogg, ...).
    input: PathBuf,

    /// Output WAV file path.
    #[arg(short, long)]
    output: PathBuf,

    /// Panning oscillation frequency in Hz, in (0, 2].
    #[arg(long, default_value_t = EffectConfig::default().pan_speed)]
    pan_speed: f32,

    /// Panning depth, in [0, 1].
    #[arg(long, default_value_t = EffectConfig::default().depth)]
    depth: f32,

    /// Echo delay in milliseconds, in (0, 100].
    #[arg(long, default_value_t = EffectConfig::default().reverb_delay_ms)]
    reverb_delay_ms: f32,

    /// Echo decay factor, in [0, 1].
    #[arg(long, default_value_t = EffectConfig::default().reverb_decay)]
    reverb_decay: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = EffectConfig {
        pan_speed: args.pan_speed,
        depth: args.depth,
        reverb_delay_ms: args.reverb_delay_ms,
        reverb_decay: args.reverb_decay,
    }
    .validate()?;

    let input = decode_audio_file(&args.input)?;
    log::info!(
        "decoded {}: {} frames at {} Hz ({} channel(s))",
        args.input.display(),
        input.frames(),
        input.sample_rate,
        input.channels
    );

    let output = process(input, &config)?;
    write_wav(&args.output, &output)?;
    log::info!(
        "wrote {} ({:.2} s stereo)",
        args.output.display(),
        output.duration_sec()
    );

    Ok(())
}
