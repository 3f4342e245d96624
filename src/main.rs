use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use taskseed::calendar::past_weekdays;
use taskseed::db::Database;
use taskseed::seeder::{render_report, seed_user_data, summarize};

/// Fixed seed keeps demo runs reproducible.
const RNG_SEED: u64 = 42;

/// How far back to seed, in weeks of weekdays ending yesterday.
const SEED_WEEKS: i64 = 2;

#[derive(Debug, Parser)]
#[command(name = "taskseed")]
#[command(about = "Populate a user's tasks with two weeks of sample sessions")]
struct Cli {
    /// Email of the user to seed
    #[arg(long)]
    email: String,

    /// Postgres URL (default: DATABASE_URL from .env or the environment)
    #[arg(long, env = "DATABASE_URL")]
    db: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so DATABASE_URL can satisfy --db;
    // existing variables win.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let db = Database::connect(&cli.db)
        .await
        .context("failed to connect to the database")?;

    let Some(user_id) = db
        .find_user_id(&cli.email)
        .await
        .context("user lookup failed")?
    else {
        println!("No user found with email: {}", cli.email);
        return Ok(());
    };

    let mut data = db
        .load_user_data(&user_id)
        .await
        .context("failed to load the task document")?;

    let days = past_weekdays(SEED_WEEKS);
    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    seed_user_data(&mut rng, &mut data, &days);

    db.save_user_data(&user_id, &data)
        .await
        .context("failed to save the task document")?;

    print!("{}", render_report(&cli.email, &days, &summarize(&data)));
    Ok(())
}
