use std::path::PathBuf;

use clap::{Parser, Subcommand};
use effect_cli::{dice_for, init_tracing, Library};
use effect_engine::apply::applied;
use effect_engine::{ability_mod, resolve_effect, roll_dice, DiceSpec};

#[derive(Subcommand)]
enum Cmd {
    /// Roll a dice expression such as 2d6
    Roll {
        dice: DiceSpec,
        /// RNG seed for determinism
        #[arg(long)]
        seed: Option<u64>,
        /// Number of rolls
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Print the modifier for an ability score
    Modifier {
        #[arg(allow_negative_numbers = true)]
        score: i32,
    },
    /// Resolve one effect from a source against a target
    Resolve {
        /// Effect id, or a file holding one effect
        #[arg(long)]
        effect: String,
        /// Source entity id, or a file holding one entity
        #[arg(long)]
        source: String,
        /// Target entity id, or a file holding one entity
        #[arg(long)]
        target: String,
        /// RNG seed for determinism
        #[arg(long)]
        seed: Option<u64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Also print the target's HP after applying the result
        #[arg(long)]
        apply: bool,
    },
    /// List effect and entity ids
    List,
}

#[derive(Parser)]
#[command(name = "effect-cli")]
#[command(about = "Combat effect resolution harness")]
struct Cli {
    /// Extra effects file (JSON or YAML), overlaid on the built-ins
    #[arg(long, global = true)]
    effects: Option<PathBuf>,
    /// Extra entities file (JSON or YAML), overlaid on the built-ins
    #[arg(long, global = true)]
    entities: Option<PathBuf>,
    /// Debug-level engine logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Cmd::Roll { dice, seed, times } => {
            let mut rng = dice_for(seed);
            for _ in 0..times {
                println!("{}", roll_dice(&mut rng, dice.count, dice.sides));
            }
        }
        Cmd::Modifier { score } => {
            println!("{:+}", ability_mod(score));
        }
        Cmd::Resolve {
            effect,
            source,
            target,
            seed,
            json,
            apply,
        } => {
            let lib = Library::load(cli.effects.as_deref(), cli.entities.as_deref())?;
            let effect = lib.effect_arg(&effect)?;
            let source = lib.entity_arg(&source)?;
            let target = lib.entity_arg(&target)?;
            let mut rng = dice_for(seed);

            let result = resolve_effect(&effect, &source, &target, &mut rng);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result);
            }

            if apply {
                match &target.stats {
                    Some(stats) => {
                        let (_, report) = applied(stats, &result);
                        println!(
                            "[HP][{}] {} → {}",
                            target.name, report.hp_before, report.hp_after
                        );
                        if report.dropped {
                            println!("[STATE][{}] drops to 0 HP", target.name);
                        }
                    }
                    None => println!("[HP][{}] has no stats", target.name),
                }
            }
        }
        Cmd::List => {
            let lib = Library::load(cli.effects.as_deref(), cli.entities.as_deref())?;
            println!("effects:");
            for (id, effect) in &lib.effects {
                println!("  {:<16} {:?}", id, effect.effect_type());
            }
            println!("entities:");
            for (id, entity) in &lib.entities {
                println!("  {:<16} {}", id, entity.name);
            }
        }
    }
    Ok(())
}
