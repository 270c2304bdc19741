//! Shared domain types for the poster wall generator and its viewing runtime.
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | `model`     | `Card`, `LayoutSettings`, `WallConfig`, `EmbeddedWall`      |
//! | `storage`   | `Storage` facet store, memory and file backends, key names  |
//! | `reconcile` | Merge of persisted order/custom data with embedded cards    |
//! | `runtime`   | `WallRuntime`, the explicit state object behind a wall page |
//! | `error`     | `StorageError`, `WallError`                                 |

pub mod error;
pub mod model;
pub mod reconcile;
pub mod runtime;
pub mod storage;

pub use error::{StorageError, WallError};
pub use model::{
    Card, CustomData, EmbeddedWall, LayoutField, LayoutSettings, WallConfig, WallSnapshot,
};
pub use runtime::{Effect, ResetState, WallAction, WallRuntime};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageKeys};
