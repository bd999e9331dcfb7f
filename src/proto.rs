#[allow(clippy::all, missing_docs)]
mod googleapis;

pub mod google;
