//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module     | Commands handled                       |
//! |------------|----------------------------------------|
//! | `generate` | `Generate`                             |
//! | `wall`     | `Show`, `Edit`, `Open`, `Snapshot`     |
//! | `config`   | `Config`                               |

pub mod config;
pub mod generate;
pub mod wall;

pub use config::cmd_config;
pub use generate::cmd_generate;
pub use wall::{cmd_edit, cmd_open, cmd_show, cmd_snapshot};
