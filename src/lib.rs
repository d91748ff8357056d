//! Workspace tooling package. The library lives in `crates/sealane-lib`.
