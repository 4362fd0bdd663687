//! Session handling: named workspace snapshots and the export bundle.

use std::io::Write;

use zip::write::{FileOptions, ZipWriter};

use crate::domain::model::{Save, Workspace};
use crate::domain::ports::{SessionStore, WorkspaceStore};
use crate::utils::error::{Result, SpliceError};

/// Snapshot the current workspace under `name`, stamped with the current
/// time. Returns the path the save landed at, relative to the store base.
pub async fn snapshot<S>(store: &S, name: &str) -> Result<String>
where
    S: WorkspaceStore + SessionStore,
{
    let workspace = store.load_workspace().await?;
    let save = Save::new(name, workspace);
    store.write_save(&save).await
}

/// Restore a named snapshot as the active workspace.
pub async fn restore<S>(store: &S, name: &str) -> Result<()>
where
    S: WorkspaceStore + SessionStore,
{
    let save = store.read_save(name).await?;
    store.store_workspace(&save.data).await
}

/// Write a portable bundle: the workspace document plus CSV summaries of
/// cables and splices, zipped into a single artifact.
pub async fn export_bundle<S: WorkspaceStore>(
    store: &S,
    workspace: &Workspace,
    filename: &str,
) -> Result<String> {
    tracing::debug!(
        "Bundling {} cables, {} splices",
        workspace.cables.len(),
        workspace.splices.len()
    );

    let zip_data = {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        zip.start_file::<_, ()>("workspace.json", FileOptions::default())?;
        let json_data = serde_json::to_string_pretty(workspace)?;
        zip.write_all(json_data.as_bytes())?;

        zip.start_file::<_, ()>("cables.csv", FileOptions::default())?;
        zip.write_all(&cables_csv(workspace)?)?;

        zip.start_file::<_, ()>("splices.csv", FileOptions::default())?;
        zip.write_all(&splices_csv(workspace)?)?;

        let cursor = zip.finish()?;
        cursor.into_inner()
    };

    store.write_artifact(filename, &zip_data).await?;
    Ok(filename.to_string())
}

fn cables_csv(workspace: &Workspace) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "name", "type", "fiberCount", "ribbonSize"])?;
    for cable in &workspace.cables {
        writer.write_record([
            cable.id.clone(),
            cable.name.clone(),
            cable.cable_type.to_string(),
            cable.fiber_count.to_string(),
            cable.ribbon_size.to_string(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| SpliceError::IoError(e.into_error()))
}

fn splices_csv(workspace: &Workspace) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "sourceCableId",
        "sourceFibers",
        "destinationCableId",
        "destinationFibers",
        "pon",
    ])?;
    for splice in &workspace.splices {
        writer.write_record([
            splice.id.clone(),
            splice.source_cable_id.clone(),
            format!("{}-{}", splice.source_start_fiber, splice.source_end_fiber),
            splice.destination_cable_id.clone(),
            format!(
                "{}-{}",
                splice.destination_start_fiber, splice.destination_end_fiber
            ),
            splice.pon_label().unwrap_or_default(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| SpliceError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Cable, CableType, Splice};

    fn workspace() -> Workspace {
        Workspace {
            cables: vec![Cable {
                id: "c1".to_string(),
                name: "Feeder".to_string(),
                cable_type: CableType::Fiber,
                fiber_count: 24,
                ribbon_size: 12,
            }],
            splices: vec![Splice {
                id: "s1".to_string(),
                source_cable_id: "c1".to_string(),
                destination_cable_id: "c1".to_string(),
                source_start_fiber: 1,
                source_end_fiber: 4,
                destination_start_fiber: 13,
                destination_end_fiber: 16,
                pon_start: Some(1),
                pon_end: Some(32),
            }],
            circuits: vec![],
        }
    }

    #[test]
    fn test_cables_csv_has_header_and_rows() {
        let data = cables_csv(&workspace()).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.trim_end().split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "id,name,type,fiberCount,ribbonSize");
        assert_eq!(lines[1], "c1,Feeder,fiber,24,12");
    }

    #[test]
    fn test_splices_csv_carries_ranges_and_pon() {
        let data = splices_csv(&workspace()).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.trim_end().split('\n').collect();
        assert_eq!(lines.len(), 2);
        // The pon label contains a comma, so csv quotes the field.
        assert_eq!(lines[1], "s1,c1,1-4,c1,13-16,\"pon,1-32\"");
    }
}
