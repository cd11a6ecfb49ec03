//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.taskdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::timetable::{DayTypeRules, Timetable, TimetableError, Timetables};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TaskdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timetable: TimetableConfig,
    #[serde(default)]
    pub checklist: ChecklistConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub plan_year: Option<i32>,
    pub board_rows: Option<usize>,
    pub data_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimetableConfig {
    pub weekday: Option<String>,
    pub weekend: Option<String>,
    pub intervention: Option<String>,
    pub weekend_days: Option<Vec<String>>,
    pub intervention_days: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChecklistConfig {
    pub subjects: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PLAN_YEAR: i32 = 2024;
pub const DEFAULT_BOARD_ROWS: usize = 10;

pub const DEFAULT_SUBJECTS: &[&str] = &[
    "Physics", "Maths", "Eng Lit", "Eng Lang", "Geography", "Biology", "Chemistry", "Spanish",
    "FMaths", "Computing",
];

pub const DEFAULT_WEEKDAY_TIMETABLE: &str = "t-0630-Wake up for school.--t-1500-lunch/games.--t-1600-Start to code/HW.--t-1800-Start study.--t-2100-Have dinner.--t-2300-Sleep.";
pub const DEFAULT_WEEKEND_TIMETABLE: &str = "t-0900-Get up, have breakfast.--t-1100-Study time.--t-1500-Start playing.--t-1600-Study again.--t-1800-Code.--t-2000-Study again.--t-2100-Have dinner.--t-2300-Sleep.";
pub const DEFAULT_INTERVENTION_TIMETABLE: &str = "t-0630-Wake up for school.--t-1630-lunch/games.--t-1730-Start to code/HW.--t-1830-Start study.--t-2100-Have dinner.--t-2300-Sleep.";

const DEFAULT_WEEKEND_DAYS: &[&str] = &["Saturday", "Sunday"];
const DEFAULT_INTERVENTION_DAYS: &[&str] = &["Wednesday"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub plan_year: i32,
    pub board_rows: usize,
    pub subjects: Vec<String>,
    pub data_file: PathBuf,
    pub timetables: Timetables,
    pub rules: DayTypeRules,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Timetable(TimetableError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Timetable(e) => write!(f, "timetable config error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<TimetableError> for ConfigError {
    fn from(e: TimetableError) -> Self {
        ConfigError::Timetable(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.taskdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskdeck").join("config.toml"))
}

/// Default snapshot location, `~/.taskdeck/data.json`.
fn default_data_file() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".taskdeck").join("data.json"))
        .unwrap_or_else(|| PathBuf::from("taskdeck-data.json"))
}

/// Load config from `~/.taskdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TaskdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TaskdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TaskdeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TaskdeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TaskdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Taskdeck Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults, then this file, then env vars, then CLI flags.

# [general]
# plan_year = 2024                   # Year the calendar covers
# board_rows = 10                    # Rows on the task/notes board
# data_file = "/path/to/data.json"   # Or set TASKDECK_DATA_FILE env var

# [timetable]
# Notation: t-HHMM-Label, entries joined with "--", ascending by time.
# weekday = "t-0630-Wake up for school.--t-1500-lunch/games.--t-2300-Sleep."
# weekend = "t-0900-Get up, have breakfast.--t-2300-Sleep."
# intervention = "t-0630-Wake up for school.--t-2300-Sleep."
# weekend_days = ["Saturday", "Sunday"]
# intervention_days = ["Wednesday"]

# [checklist]
# subjects = ["Physics", "Maths", "Computing"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI. The timetable notations are parsed here so malformed
/// notation is a startup error rather than a runtime one.
pub fn resolve(
    config: &TaskdeckConfig,
    cli_data_file: Option<PathBuf>,
) -> Result<ResolvedConfig, ConfigError> {
    // Data file: CLI → env → config → default
    let data_file = cli_data_file
        .or_else(|| std::env::var("TASKDECK_DATA_FILE").ok().map(PathBuf::from))
        .or_else(|| config.general.data_file.clone().map(PathBuf::from))
        .unwrap_or_else(default_data_file);

    // Plan year: env → config → default
    let plan_year = std::env::var("TASKDECK_PLAN_YEAR")
        .ok()
        .and_then(|v| v.parse().ok())
        .or(config.general.plan_year)
        .unwrap_or(DEFAULT_PLAN_YEAR);

    let subjects = config
        .checklist
        .subjects
        .clone()
        .unwrap_or_else(|| DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect());

    let timetables = Timetables {
        weekday: Timetable::parse(
            config
                .timetable
                .weekday
                .as_deref()
                .unwrap_or(DEFAULT_WEEKDAY_TIMETABLE),
        )?,
        weekend: Timetable::parse(
            config
                .timetable
                .weekend
                .as_deref()
                .unwrap_or(DEFAULT_WEEKEND_TIMETABLE),
        )?,
        intervention: Timetable::parse(
            config
                .timetable
                .intervention
                .as_deref()
                .unwrap_or(DEFAULT_INTERVENTION_TIMETABLE),
        )?,
    };

    let weekend_days = config
        .timetable
        .weekend_days
        .clone()
        .unwrap_or_else(|| DEFAULT_WEEKEND_DAYS.iter().map(|s| s.to_string()).collect());
    let intervention_days = config.timetable.intervention_days.clone().unwrap_or_else(|| {
        DEFAULT_INTERVENTION_DAYS
            .iter()
            .map(|s| s.to_string())
            .collect()
    });
    let rules = DayTypeRules::from_names(&weekend_days, &intervention_days)?;

    Ok(ResolvedConfig {
        plan_year,
        board_rows: config.general.board_rows.unwrap_or(DEFAULT_BOARD_ROWS),
        subjects,
        data_file,
        timetables,
        rules,
    })
}
