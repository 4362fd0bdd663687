pub mod colors;
pub mod groups;
pub mod highlight;
pub mod view;

pub use crate::domain::model::{
    Cable, CableType, ColorPair, ColorStandard, FiberColor, OutOfRangePolicy, Position,
    PositionColor, Splice, Workspace,
};
pub use crate::domain::ports::{ConfigProvider, SessionStore, WorkspaceStore};
pub use crate::utils::error::Result;
