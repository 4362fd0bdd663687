use crate::domain::model::{ColorStandard, OutOfRangePolicy, Save, Workspace};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence boundary for the workspace document. The engine never talks
/// to storage itself; callers load a workspace, compute, and discard.
pub trait WorkspaceStore: Send + Sync {
    fn load_workspace(&self) -> impl std::future::Future<Output = Result<Workspace>> + Send;
    fn store_workspace(
        &self,
        workspace: &Workspace,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Write an opaque artifact (e.g. an export bundle) next to the
    /// workspace.
    fn write_artifact(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn write_save(&self, save: &Save) -> Result<String>;
    async fn read_save(&self, name: &str) -> Result<Save>;
    async fn list_saves(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn cable_filter(&self) -> Option<&str>;
    fn color_standard(&self) -> ColorStandard;
    fn range_policy(&self) -> OutOfRangePolicy;
}
