//! Poster wall generator and headless wall host.
//!
//! | Module        | Purpose                                              |
//! |---------------|------------------------------------------------------|
//! | `wall_config` | `poster-wall.toml` loading and file/env/CLI layering  |
//! | `scan`        | Folder enumeration into cards                        |
//! | `render`      | Page documents, payload extraction, snapshots        |
//! | `generate`    | Scan + render + write `poster-wall.html`             |
//! | `session`     | Loading a generated wall as a runtime                |
//! | `navigate`    | Carrying out navigation effects                      |
//! | `state_dir`   | Per-folder file locations                            |
//! | `ui`          | Terminal output helpers                              |
//!
//! The runtime itself lives in `poster_wall_common`.

pub mod errors;
pub mod generate;
pub mod navigate;
pub mod render;
pub mod scan;
pub mod session;
pub mod state_dir;
pub mod ui;
pub mod util;
pub mod wall_config;
