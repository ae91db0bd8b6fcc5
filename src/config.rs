use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV file holding the course catalogue
    pub csv_path: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// MySQL URL for the job and school_course tables.
    /// If None, the job-based endpoint is disabled.
    pub database_url: Option<String>,
    /// Multiplier applied to raw cosine similarity before clamping to 1.0
    pub boost_factor: f32,
    /// Fixed seed for the random-sample selection. Unset means OS entropy.
    pub sample_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("./data/courses.csv"),
            bind_addr: "127.0.0.1:5000".to_string(),
            database_url: None,
            boost_factor: 1.5,
            sample_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("COURSE_RECOMMEND_CSV_PATH") {
            config.csv_path = PathBuf::from(path);
        }
        if let Ok(addr) = std::env::var("COURSE_RECOMMEND_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("COURSE_RECOMMEND_DATABASE_URL") {
            config.database_url = Some(url);
        }
        if let Ok(val) = std::env::var("COURSE_RECOMMEND_BOOST_FACTOR") {
            if let Ok(v) = val.parse() {
                config.boost_factor = v;
            }
        }
        if let Ok(val) = std::env::var("COURSE_RECOMMEND_SAMPLE_SEED") {
            if let Ok(v) = val.parse() {
                config.sample_seed = Some(v);
            }
        }

        config
    }
}
