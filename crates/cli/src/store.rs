use axt_storage::{DatabaseStorage, StorageError};
use clap::Subcommand;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum StoreAction {
    /// Prints the value under KEY as JSON.
    Get { key: String },
    /// Stores VALUE under KEY. VALUE is read as JSON when it parses, otherwise
    /// as a plain string.
    Set { key: String, value: String },
    Remove { key: String },
    /// Lists every key with its position.
    Keys,
    Clear,
}

pub fn parse_value(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}

pub async fn run(path: PathBuf, action: StoreAction) -> Result<(), StorageError> {
    let mut storage = DatabaseStorage::open(path).await?;

    match action {
        StoreAction::Get { key } => match storage.get_item::<Value>(&key)? {
            Some(value) => println!("{value}"),
            None => missing(&key),
        },
        StoreAction::Set { key, value } => storage.set_item(key, &parse_value(value)).await?,
        StoreAction::Remove { key } => {
            if storage.remove_item(&key).await?.is_none() {
                missing(&key);
            }
        }
        StoreAction::Keys => {
            for (index, key) in storage.entries().keys().enumerate() {
                println!("{:>4} {key}", index.bright_blue());
            }
        }
        StoreAction::Clear => storage.clear().await?,
    }

    Ok(())
}

fn missing(key: &str) {
    eprintln!(
        "[{:18}] Nothing stored under {}",
        "WARN/Storage".bright_yellow(),
        key.bright_blue().bold()
    );
}
