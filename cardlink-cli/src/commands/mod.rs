mod build;
mod fetch;
mod sets;

pub(crate) use build::run_build;
pub(crate) use fetch::run_fetch;
pub(crate) use sets::run_sets;
