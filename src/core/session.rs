use crate::core::catalog::Catalog;
use crate::core::selection::SelectionStore;
use crate::core::transfer;
use crate::domain::model::{CharacterId, ImportPolicy, Team, Theme};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{Result, TeamError};
use crate::utils::validation::{has_extension, validate_file_name};

/// Session-level settings taken from the active configuration.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub export_file_name: String,
    pub import_policy: ImportPolicy,
    pub theme: Theme,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            export_file_name: transfer::EXPORT_FILE_NAME.to_string(),
            import_policy: ImportPolicy::default(),
            theme: Theme::default(),
        }
    }
}

impl SessionSettings {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            export_file_name: config.export_file_name().to_string(),
            import_policy: config.import_policy(),
            theme: config.theme(),
        }
    }
}

/// Single owner of all UI state: the catalog, the current team and the theme.
///
/// Imports hold `&mut self` across the file read, so two imports can never
/// overlap; each one commits in the order it completes.
pub struct TeamSession<S: Storage> {
    catalog: Catalog,
    store: SelectionStore,
    theme: Theme,
    storage: S,
    settings: SessionSettings,
}

impl<S: Storage> TeamSession<S> {
    pub fn new(catalog: Catalog, storage: S, settings: SessionSettings) -> Self {
        Self {
            catalog,
            store: SelectionStore::new(),
            theme: settings.theme,
            storage,
            settings,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn team(&self) -> &Team {
        self.store.team()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn toggle(&mut self, id: CharacterId) -> Result<&Team> {
        let character = self.catalog.lookup(id)?;
        Ok(self.store.toggle(character))
    }

    pub fn remove(&mut self, id: CharacterId) -> &Team {
        self.store.remove(id)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        tracing::debug!("Theme switched to {}", self.theme);
        self.theme
    }

    pub fn export_document(&self) -> Result<String> {
        transfer::export(self.store.team())
    }

    /// Writes the current team under `file_name` (or the configured export
    /// name) and returns where it landed.
    pub async fn export(&self, file_name: Option<&str>) -> Result<String> {
        let file_name = file_name.unwrap_or(self.settings.export_file_name.as_str());
        validate_file_name("export", file_name).map_err(|e| TeamError::InvalidFileName {
            name: file_name.to_string(),
            reason: match e {
                TeamError::InvalidConfigValueError { reason, .. } => reason,
                other => other.to_string(),
            },
        })?;

        let document = self.export_document()?;
        let written = self.storage.write_file(file_name, document.as_bytes()).await?;
        tracing::info!(
            "Exported {} team members to {}",
            self.store.team().len(),
            written
        );
        Ok(written)
    }

    /// Replaces the team with the one decoded from `raw`. On any error the
    /// current team is left as it was.
    pub fn import_bytes(&mut self, raw: &[u8]) -> Result<&Team> {
        let members = transfer::import(raw)?;
        self.store.replace(members, self.settings.import_policy)
    }

    pub async fn import_file(&mut self, path: &str) -> Result<&Team> {
        if !has_extension(path, transfer::TRANSFER_EXTENSION) {
            tracing::warn!(
                "{} does not have a .{} extension, reading it anyway",
                path,
                transfer::TRANSFER_EXTENSION
            );
        }

        let raw = self.storage.read_file(path).await?;
        let team = self.import_bytes(&raw)?;
        tracing::info!("Imported {} team members from {}", team.len(), path);
        Ok(team)
    }
}
