pub mod books;
pub mod health;
pub mod recommendations;

// Re-export handlers for convenience
pub use books::list_books;
pub use health::health_check;
pub use recommendations::get_recommendations;
