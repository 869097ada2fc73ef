use serde::{Deserialize, Serialize};

pub const DEFAULT_JRE_PATH: &str = "/path/to/default/jre";

/// Title value the console client has always received for untitled machines
pub const MISSING_TITLE: &str = "None";

/// Connection parameters for one remote machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineProfile {
    pub name: String,
    pub host: String,
    pub user: String,
    pub password: String,
    pub title: Option<String>,
}

impl MachineProfile {
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            user: user.into(),
            password: password.into(),
            title,
        }
    }

    /// Window title passed to the console client
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_TITLE)
    }
}

/// Settings shared by every console launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    pub jre_path: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            jre_path: DEFAULT_JRE_PATH.to_string(),
        }
    }
}

/// On-disk layout of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(rename = "vconsole_config")]
    pub settings: ConsoleSettings,
    #[serde(rename = "machine_config")]
    pub profiles: Vec<MachineProfile>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            settings: ConsoleSettings::default(),
            profiles: vec![MachineProfile::new(
                "DefaultMachine",
                "127.0.0.1",
                "admin",
                "admin",
                Some("DefaultTitle".to_string()),
            )],
        }
    }
}
