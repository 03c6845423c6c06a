//! In-memory models of the browser client's local state. Everything here is
//! pure and single-threaded: the server never persists it, and there is no
//! cross-tab synchronization.

#![allow(dead_code)]

pub mod feed;
pub mod view;

pub use feed::{Comment, Feed, Post};
pub use view::{Screen, Session, View, ViewRouter};
