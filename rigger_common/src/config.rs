//! Configuration loading for the Rigger crates.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::from_reader;
use std::{fs::File, io::BufReader};

/// Load a JSON configuration file and deserialize it into `T`.
pub fn load_config<T: DeserializeOwned>(path: &str) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = from_reader(reader)?;
    Ok(config)
}
