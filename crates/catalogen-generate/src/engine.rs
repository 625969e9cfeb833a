use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::GenerationError;
use crate::generators;
use crate::output::{OUTPUT_FILE_NAME, write_catalog};
use crate::ratings::RatingPool;

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory the output file is written into.
    pub out_dir: PathBuf,
    /// Fixed RNG seed; `None` draws from OS entropy. Not exposed on the
    /// CLI, pinned by tests for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub records_requested: u64,
    pub records_written: u64,
    pub bytes_written: u64,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub path: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for producing the product catalog test file.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate `count` records and write them, header first, to
    /// `custom_test.txt` under the configured out-dir.
    ///
    /// The rating pool is seeded once here and only reshuffled per record,
    /// so every record's ratings are a permutation of one multiset.
    pub fn run(&self, count: u64) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let path = self.options.out_dir.join(OUTPUT_FILE_NAME);

        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let mut pool = RatingPool::seed(&mut rng);

        info!(
            records = count,
            path = %path.display(),
            rating_pool = ?pool.values(),
            "generation started"
        );

        let mut lines = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let record = generators::record(&mut pool, &mut rng);
            lines.push(record.to_string());
        }

        let bytes_written = write_catalog(&path, &lines)?;

        let report = GenerationReport {
            records_requested: count,
            records_written: lines.len() as u64,
            bytes_written,
        };

        info!(
            records_written = report.records_written,
            bytes_written = report.bytes_written,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generation finished"
        );

        Ok(GenerationResult { path, report })
    }
}
