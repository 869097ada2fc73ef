use crate::application::builders::command_builder::ConsoleCommandBuilder;
use crate::application::store::ConfigurationStore;
use crate::domain::errors::StoreError;
use crate::domain::value_objects::ConsoleCommand;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

/// Trait for process runners to enable mocking and dependency inversion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs the command to completion and returns its exit code, if it had one
    async fn run(&self, command: &ConsoleCommand) -> Result<Option<i32>>;
}

/// Application service that opens remote console sessions for stored machines
pub struct ConsoleLauncher {
    runner: Box<dyn ProcessRunner>,
}

impl ConsoleLauncher {
    pub fn new(runner: Box<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    /// Builds the console command for the named machine without running it
    pub fn command_for(&self, store: &ConfigurationStore, name: &str) -> Result<ConsoleCommand> {
        let Some(profile) = store.find_profile(name) else {
            error!("No machine found with name {}", name);
            return Err(StoreError::ProfileNotFound(name.to_string()).into());
        };

        ConsoleCommandBuilder::new()
            .settings(store.settings())
            .profile(profile)
            .build()
    }

    /// Opens the console for the named machine and waits until the client exits
    pub async fn launch(&self, store: &ConfigurationStore, name: &str) -> Result<()> {
        let command = self.command_for(store, name)?;

        info!(machine = name, program = %command.program, "Starting console");
        let exit_code = self.runner.run(&command).await?;
        info!(machine = name, ?exit_code, "Console exited");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::MockConfigRepository;
    use crate::domain::entities::{ConfigDocument, ConsoleSettings, MachineProfile};

    fn store() -> ConfigurationStore {
        let mut repository = MockConfigRepository::new();
        repository.expect_read().returning(|| {
            Ok(Some(ConfigDocument {
                settings: ConsoleSettings {
                    jre_path: "/opt/jre/bin/java".to_string(),
                },
                profiles: vec![MachineProfile::new(
                    "srv1",
                    "10.0.0.1",
                    "admin",
                    "secret",
                    Some("Srv1".to_string()),
                )],
            }))
        });
        ConfigurationStore::load(Box::new(repository)).unwrap()
    }

    #[tokio::test]
    async fn launch_runs_the_client_with_profile_arguments() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|command| {
                command.program == "/opt/jre/bin/java"
                    && [
                        "ip=10.0.0.1",
                        "user=admin",
                        "passwd=secret",
                        "title=Srv1",
                        "-cp",
                        "avctKVM.jar",
                        "-Djava.library.path=./lib",
                        "-Duser.language=zh",
                        "com.avocent.idrac.kvm.Main",
                        "vm=1",
                        "kmport=5900",
                        "vport=5900",
                        "apcp=1",
                        "reconnect=2",
                        "chat=1",
                        "F1=0",
                        "custom=0",
                        "scaling=15",
                        "minwinheight=100",
                        "minwinwidth=100",
                        "videoborder=0",
                        "version=2",
                    ]
                    .iter()
                    .all(|arg| command.has_arg(arg))
            })
            .times(1)
            .returning(|_| Ok(Some(0)));
        let launcher = ConsoleLauncher::new(Box::new(runner));

        launcher.launch(&store(), "srv1").await.unwrap();
    }

    #[tokio::test]
    async fn launch_ignores_the_client_exit_code() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().times(1).returning(|_| Ok(Some(3)));
        let launcher = ConsoleLauncher::new(Box::new(runner));

        assert!(launcher.launch(&store(), "srv1").await.is_ok());
    }

    #[tokio::test]
    async fn launch_unknown_machine_does_not_spawn() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().never();
        let launcher = ConsoleLauncher::new(Box::new(runner));

        let err = launcher.launch(&store(), "missing").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::ProfileNotFound(name)) if name == "missing"
        ));
    }

    #[tokio::test]
    async fn spawn_failure_is_reported() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .returning(|_| Err(anyhow::anyhow!("No such file or directory")));
        let launcher = ConsoleLauncher::new(Box::new(runner));

        assert!(launcher.launch(&store(), "srv1").await.is_err());
    }

    #[test]
    fn command_for_renders_without_spawning() {
        let launcher = ConsoleLauncher::new(Box::new(MockProcessRunner::new()));

        let command = launcher.command_for(&store(), "srv1").unwrap();

        assert!(command.to_string().starts_with(
            "/opt/jre/bin/java -cp avctKVM.jar -Djava.library.path=./lib -Duser.language=zh"
        ));
    }
}
