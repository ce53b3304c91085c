pub mod files;
pub mod snapshot;

pub use files::{
    atomic_write, ensure_buddy_dir, get_buddy_dir, init_local_buddy, snapshot_file,
};
pub use snapshot::{load_snapshot, save_snapshot};
