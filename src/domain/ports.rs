use crate::domain::model::{ImportPolicy, Theme};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// `None` selects the built-in catalog.
    fn catalog_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn export_file_name(&self) -> &str;
    fn import_policy(&self) -> ImportPolicy;
    fn theme(&self) -> Theme;
}
