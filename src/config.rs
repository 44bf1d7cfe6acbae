use crate::search::engine::DEFAULT_NEIGHBORS;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "project-recommender",
    about = "Recommends catalog projects matching a user's preferences"
)]
pub struct Config {
    /// CSV file holding the project catalog
    #[arg(long, env = "CATALOG_PATH", default_value = "final.csv")]
    pub catalog: PathBuf,

    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Number of projects returned per recommendation
    #[arg(
        long,
        env = "N_NEIGHBORS",
        default_value_t = DEFAULT_NEIGHBORS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub neighbors: usize,

    /// Log at DEBUG instead of INFO
    #[arg(long, env = "RECOMMENDER_DEBUG")]
    pub debug: bool,
}

impl Config {
    pub fn log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
