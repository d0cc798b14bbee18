// Learning journey tracker: session logs, tasks, progress toward goals,
// a local summary, and the certificate carousel.

pub mod certificates;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod store;
pub mod summary;
