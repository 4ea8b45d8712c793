use clap::Args;
use colored::Colorize;
use skein_dice::{Die, EngineConfig, Pool, RngFaces, ThemeRegistry, aggregate};

/// Options shaping the pool before it is rolled.
#[derive(Args)]
pub struct RollArgs {
    /// RNG seed for a reproducible roll (default: OS entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Dice theme (starwars, genesys)
    #[arg(short, long, default_value = "starwars")]
    pub theme: String,

    /// Upgrade this many Ability dice to Proficiency
    #[arg(long, default_value = "0")]
    pub upgrade_ability: u32,

    /// Upgrade this many Difficulty dice to Challenge
    #[arg(long, default_value = "0")]
    pub upgrade_difficulty: u32,

    /// Downgrade this many Proficiency dice to Ability
    #[arg(long, default_value = "0")]
    pub downgrade_proficiency: u32,

    /// Downgrade this many Challenge dice to Difficulty
    #[arg(long, default_value = "0")]
    pub downgrade_challenge: u32,

    /// Add this many Boost dice
    #[arg(long, default_value = "0")]
    pub boost: u32,

    /// Add this many Setback dice
    #[arg(long, default_value = "0")]
    pub setback: u32,
}

pub fn run(expr: &str, args: &RollArgs) -> Result<(), String> {
    let registry = ThemeRegistry::builtin();
    let config = EngineConfig::default().with_theme(&args.theme);
    let theme = registry.load_or_default(&config.theme);

    let pool = Pool::parse(expr)
        .map_err(|e| e.to_string())?
        .add(Die::Boost, args.boost)
        .add(Die::Setback, args.setback)
        .upgrade(Die::Ability, args.upgrade_ability)
        .upgrade(Die::Difficulty, args.upgrade_difficulty)
        .downgrade(Die::Proficiency, args.downgrade_proficiency)
        .downgrade(Die::Challenge, args.downgrade_challenge);

    let mut source = match args.seed {
        Some(seed) => RngFaces::seeded(seed),
        None => RngFaces::from_os(),
    };
    let result = pool.roll(&mut source);

    println!("{} [{}]", format!("Rolling {pool}").bold(), theme.name);
    if result.is_empty() {
        println!("  (empty pool)");
    }
    for face_roll in &result.faces {
        let symbols = face_roll.symbols().map_err(|e| e.to_string())?;
        println!(
            "  {:<11} face {:>2}: {}",
            face_roll.die.to_string(),
            face_roll.face,
            symbols
        );
    }

    let net = aggregate(&result).map_err(|e| e.to_string())?;
    let summary = net.to_string();
    if net.force_only {
        println!("{}", format!("Force: {summary}").cyan().bold());
    } else if net.is_success() {
        println!("{}", format!("Success: {summary}").green().bold());
    } else {
        println!("{}", format!("Failure: {summary}").red().bold());
    }

    Ok(())
}
