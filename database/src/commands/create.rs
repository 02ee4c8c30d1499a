use std::error::Error;
use std::process::Command;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Database names are interpolated into SQL, so only plain identifiers pass
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn psql(conn_string: &str, sql: &str) -> Result<std::process::Output, Box<dyn Error>> {
    Command::new("psql")
        .arg(conn_string)
        .arg("-tA")
        .arg("-c")
        .arg(sql)
        .output()
        .map_err(|e| {
            error!("Failed to execute psql command: {}", e);
            Box::new(e) as Box<dyn Error>
        })
}

/// Execute the create command
pub async fn execute(name: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    // Use provided name or default from config
    let db_name = name.unwrap_or_else(|| config.name.clone());
    if !is_valid_name(&db_name) {
        error!("Invalid database name: {}", db_name);
        return Err(format!("Invalid database name: {}", db_name).into());
    }

    info!("Creating database: {}", db_name);
    let conn_string = config.server_url();

    let check = psql(
        &conn_string,
        &format!("SELECT 1 FROM pg_database WHERE datname = '{}'", db_name),
    )?;
    if !check.status.success() {
        let error_msg = String::from_utf8_lossy(&check.stderr);
        error!("Failed to check if database exists: {}", error_msg);
        return Err(format!("Failed to check if database exists: {}", error_msg).into());
    }
    if String::from_utf8_lossy(&check.stdout).trim() == "1" {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    let create = psql(&conn_string, &format!("CREATE DATABASE {}", db_name))?;
    if create.status.success() {
        info!("Database '{}' created successfully", db_name);
        Ok(())
    } else {
        let error_msg = String::from_utf8_lossy(&create.stderr);
        error!("Failed to create database: {}", error_msg);
        Err(format!("Failed to create database: {}", error_msg).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_name_validation() {
        assert!(is_valid_name("asset_compass"));
        assert!(is_valid_name("_scratch2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("2fast"));
        assert!(!is_valid_name("compass; DROP DATABASE prod"));
        assert!(!is_valid_name("asset-compass"));
    }
}
