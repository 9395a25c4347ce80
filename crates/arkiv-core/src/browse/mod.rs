//! Folder browsing.
//!
//! This module provides the read side of the core: the [`Browser`] service
//! that builds [`FolderView`] listings and [`TreeEntry`] directory trees,
//! and the snapshot types they are made of ([`FileEntry`], [`Breadcrumb`],
//! [`Subfolder`]).

pub mod browser;
pub mod entry;
pub mod view;

pub use browser::{relative_path, Browser, ROOT_LABEL};
pub use entry::FileEntry;
pub use view::{Breadcrumb, FolderView, Subfolder, TreeEntry};
