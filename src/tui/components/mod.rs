//! # TUI Components
//!
//! Components follow two patterns, mirroring the split between app data and
//! presentation state:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Pager`: pagination bar with Previous/Next affordances
//! - `PostDetail`: read-only view of the selected post
//!
//! ### Stateful Components (persistent state + transient wrapper)
//!
//! - `PostList`: the clickable title list. `PostListState` lives in
//!   `TuiState` across frames; `PostList` is created each frame with
//!   borrowed state and the current page's posts as props.
//!
//! Each component file contains its state types, rendering logic, event
//! handling, and tests.

pub mod detail;
pub mod pager;
pub mod post_list;

pub use detail::PostDetail;
pub use pager::Pager;
pub use post_list::{ListEvent, PostList, PostListState};
