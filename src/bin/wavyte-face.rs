use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde_json::json;
use wavyte_face::{
    FaceConfig, FaceController, InMemoryUniforms, MoodId, ShapeId, TransitionTime, lookup,
};

#[derive(Parser, Debug)]
#[command(name = "wavyte-face", version)]
struct Cli {
    /// Log transition activity to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shape catalog as JSON.
    Shapes,
    /// Print the mood preset table as JSON.
    Presets,
    /// Run an expression change and print the uniforms of every frame as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Face configuration JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mood to switch to.
    #[arg(long)]
    mood: Option<MoodId>,

    /// Manual left eye shape (applied after `--mood`).
    #[arg(long)]
    left: Option<ShapeId>,

    /// Manual right eye shape (applied after `--mood`).
    #[arg(long)]
    right: Option<ShapeId>,

    /// Manual mouth shape (applied after `--mood`).
    #[arg(long)]
    mouth: Option<ShapeId>,

    /// Transition duration in seconds. Uses the configured default when omitted.
    #[arg(long)]
    duration: Option<f64>,

    /// Ticks per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to print.
    #[arg(long, default_value_t = 20)]
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Shapes => cmd_shapes(),
        Command::Presets => cmd_presets(),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_shapes() -> anyhow::Result<()> {
    let catalog: serde_json::Map<String, serde_json::Value> = ShapeId::ALL
        .into_iter()
        .map(|id| -> serde_json::Result<_> {
            Ok((id.to_string(), serde_json::to_value(lookup(id))?))
        })
        .collect::<serde_json::Result<_>>()?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    let table: serde_json::Map<String, serde_json::Value> = MoodId::ALL
        .into_iter()
        .filter_map(|m| m.preset().map(|p| (m, p)))
        .map(|(m, p)| -> serde_json::Result<_> { Ok((m.to_string(), serde_json::to_value(p)?)) })
        .collect::<serde_json::Result<_>>()?;
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let config = match &args.config {
        Some(path) => FaceConfig::from_path(path)
            .with_context(|| format!("load face config '{}'", path.display()))?,
        None => FaceConfig::default(),
    };

    let mut face = FaceController::with_sink(config, InMemoryUniforms::new())?;
    face.set_active(true);

    let time = TransitionTime::from(args.duration);
    if let Some(mood) = args.mood {
        face.set_mood(mood, time)?;
    }
    if let Some(shape) = args.left {
        face.set_left_eye(shape, time)?;
    }
    if let Some(shape) = args.right {
        face.set_right_eye(shape, time)?;
    }
    if let Some(shape) = args.mouth {
        face.set_mouth(shape, time)?;
    }

    let dt = 1.0 / f64::from(args.fps);
    for frame in 0..args.frames {
        if frame > 0 {
            face.tick(dt);
        }
        let uniforms = face
            .sink()
            .map(|u| serde_json::to_value(u.values()))
            .transpose()?
            .unwrap_or(serde_json::Value::Null);
        let line = json!({
            "frame": frame,
            "t": f64::from(frame) * dt,
            "mood": face.mood(),
            "phase": face.phase(),
            "shapes": face.shapes(),
            "uniforms": uniforms,
        });
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}
