//! The `quizkit sample` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use quizkit_core::sampler::try_sample_with_rng;
use quizkit_loader::config::load_config_from;

pub fn execute(
    pool_path: PathBuf,
    count: Option<i64>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let count = match count {
        Some(n) => n,
        None => load_config_from(config_path.as_deref())?.default_question_count as i64,
    };

    let content = std::fs::read_to_string(&pool_path)
        .with_context(|| format!("failed to read question pool: {}", pool_path.display()))?;
    let pool: Vec<serde_json::Value> = serde_json::from_str(&content).with_context(|| {
        format!(
            "question pool must be a JSON array: {}",
            pool_path.display()
        )
    })?;

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let questions = try_sample_with_rng(&pool, count, &mut *rng)?;

    tracing::info!(
        pool = pool.len(),
        drawn = questions.len(),
        "sampled questions"
    );
    println!("{}", serde_json::to_string_pretty(&questions)?);

    Ok(())
}
