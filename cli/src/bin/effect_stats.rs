use std::path::PathBuf;

use clap::Parser;
use effect_cli::{dice_for, init_tracing, Library};
use effect_engine::summary::simulate;

#[derive(Parser)]
#[command(name = "effect-stats")]
#[command(about = "Monte Carlo summary of one effect against one target")]
struct Args {
    /// Effect id, or a file holding one effect
    #[arg(long)]
    effect: String,
    /// Source entity id, or a file holding one entity
    #[arg(long)]
    source: String,
    /// Target entity id, or a file holding one entity
    #[arg(long)]
    target: String,
    /// Number of resolutions
    #[arg(long, default_value_t = 1000)]
    samples: u32,
    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Extra effects file (JSON or YAML)
    #[arg(long)]
    effects: Option<PathBuf>,
    /// Extra entities file (JSON or YAML)
    #[arg(long)]
    entities: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(false);

    let lib = Library::load(args.effects.as_deref(), args.entities.as_deref())?;
    let effect = lib.effect_arg(&args.effect)?;
    let source = lib.entity_arg(&args.source)?;
    let target = lib.entity_arg(&args.target)?;

    let mut dice = dice_for(Some(args.seed));
    let summary = simulate(&effect, &source, &target, &mut dice, args.samples);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
