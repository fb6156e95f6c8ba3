//! Roster configuration loading functionality.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

use super::types::{SeedLeave, SeedShift, SeedUser};

/// A parsed roster configuration.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::RosterConfig;
/// use roster_engine::store::InMemoryStore;
///
/// let config = RosterConfig::load("./config/roster.yaml").unwrap();
/// let store = InMemoryStore::from_config(&config);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Seeded users.
    pub users: Vec<SeedUser>,
    /// Seeded shifts.
    #[serde(default)]
    pub shifts: Vec<SeedShift>,
    /// Seeded leave records.
    #[serde(default)]
    pub leaves: Vec<SeedLeave>,
}

impl RosterConfig {
    /// Loads a roster configuration from a YAML file.
    ///
    /// Returns an error if the file is missing, contains invalid YAML, or
    /// references users that are not seeded.
    pub fn load<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ScheduleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RosterConfig =
            serde_yaml::from_str(&content).map_err(|e| ScheduleError::ConfigParse {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config.validate(&path_str)?;
        Ok(config)
    }

    /// Validates internal references of the configuration.
    fn validate(&self, path: &str) -> ScheduleResult<()> {
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(ScheduleError::ConfigParse {
                    path: path.to_string(),
                    message: format!("duplicate user id {}", user.id),
                });
            }
        }

        for shift in &self.shifts {
            if !user_ids.contains(&shift.user_id) {
                return Err(ScheduleError::ConfigParse {
                    path: path.to_string(),
                    message: format!(
                        "shift {} references unknown user {}",
                        shift.id, shift.user_id
                    ),
                });
            }
        }

        for leave in &self.leaves {
            if !user_ids.contains(&leave.user_id) {
                return Err(ScheduleError::ConfigParse {
                    path: path.to_string(),
                    message: format!(
                        "leave {} references unknown user {}",
                        leave.id, leave.user_id
                    ),
                });
            }
        }

        Ok(())
    }
}
