use crate::domain::entities::{ConfigDocument, ConsoleSettings, MachineProfile};
use crate::domain::errors::StoreError;
use tracing::{debug, error, info, warn};

/// Persistence seam for the configuration document
#[cfg_attr(test, mockall::automock)]
pub trait ConfigRepository {
    /// Returns `Ok(None)` when no configuration has been saved yet
    fn read(&self) -> Result<Option<ConfigDocument>, StoreError>;

    /// Replaces the stored configuration entirely
    fn write(&self, document: &ConfigDocument) -> Result<(), StoreError>;
}

/// Settings and machine profiles, kept in memory and mirrored to the repository
/// after every change
pub struct ConfigurationStore {
    repository: Box<dyn ConfigRepository>,
    document: ConfigDocument,
}

impl ConfigurationStore {
    /// Loads the stored configuration, creating and persisting the default one if none exists
    pub fn load(repository: Box<dyn ConfigRepository>) -> Result<Self, StoreError> {
        let document = match repository.read()? {
            Some(document) => {
                info!(
                    profiles = document.profiles.len(),
                    "Configuration loaded successfully"
                );
                document
            }
            None => {
                warn!("Configuration file not found, creating a default configuration file");
                let document = ConfigDocument::default();
                repository.write(&document)?;
                info!("Default configuration file created");
                document
            }
        };

        Ok(Self {
            repository,
            document,
        })
    }

    pub fn save(&self) -> Result<(), StoreError> {
        self.repository.write(&self.document)?;
        debug!(profiles = self.document.profiles.len(), "Configuration saved");
        Ok(())
    }

    /// Appends a profile; names are not checked for uniqueness
    pub fn add_profile(&mut self, profile: MachineProfile) -> Result<(), StoreError> {
        info!(name = %profile.name, host = %profile.host, "Adding machine");
        self.document.profiles.push(profile);
        self.save()
    }

    /// Removes the first profile named `name`
    pub fn remove_profile(&mut self, name: &str) -> Result<MachineProfile, StoreError> {
        let Some(index) = self.document.profiles.iter().position(|p| p.name == name) else {
            error!("No machine found with name {}", name);
            return Err(StoreError::ProfileNotFound(name.to_string()));
        };

        let removed = self.document.profiles.remove(index);
        self.save()?;
        info!("Machine {} removed successfully", name);
        Ok(removed)
    }

    pub fn find_profile(&self, name: &str) -> Option<&MachineProfile> {
        self.document.profiles.iter().find(|p| p.name == name)
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.document.settings
    }

    pub fn profiles(&self) -> &[MachineProfile] {
        &self.document.profiles
    }
}
