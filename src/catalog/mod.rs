//! In-memory catalog: products, blog posts, and the display-only user roster.
//!
//! These collections intentionally live in process memory and reset on
//! restart; only contact messages and site settings are durable. Each
//! collection is an explicit repository guarded by one coarse lock, giving
//! single-writer semantics per collection and nothing more.

mod repo;

pub use repo::{Entity, MemRepo};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub video: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Entity for Product {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Entity for Post {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Entity for User {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
