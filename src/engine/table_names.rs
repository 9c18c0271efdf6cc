use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use uuid::Uuid;

use crate::{engine::NameStrategy, Error, Result};

const ALPHABETIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

static TABLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("table name pattern is valid"));

/// Source of ephemeral table identifiers.
///
/// Implementations must be safe to share between concurrent calls. Names are
/// interpolated into SQL text unquoted, so they are checked with
/// [`validate_table_name`] before use.
pub trait TableNameSource: Send + Sync {
    fn next_name(&self) -> String;
}

pub fn validate_table_name(name: &str) -> Result<()> {
    if TABLE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidTableName(name.to_string()))
    }
}

#[derive(Debug)]
pub struct TableNames {
    pub strategy: NameStrategy,
    pub length: usize,
    counter: AtomicU64,
}

impl TableNames {
    pub fn new(strategy: NameStrategy, length: usize) -> Self {
        Self {
            strategy,
            length: length.max(1),
            counter: AtomicU64::new(0),
        }
    }

    fn alphabetic(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| ALPHABETIC[rng.gen_range(0..ALPHABETIC.len())] as char)
            .collect()
    }
}

impl TableNameSource for TableNames {
    fn next_name(&self) -> String {
        match self.strategy {
            NameStrategy::Alphabetic => self.alphabetic(),
            NameStrategy::Uuid => format!("t_{}", Uuid::new_v4().simple()),
            NameStrategy::Sequential => {
                let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
                format!("t_{id}")
            }
        }
    }
}
