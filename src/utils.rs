use std::fmt::Display;

use itertools::Itertools;
use log::error;

pub fn print_err(e: &impl Display) {
    error!("{e:#}")
}

pub(crate) fn join<T>(collection: T, sep: &str) -> String
where
    T: IntoIterator,
    T::Item: Display,
{
    collection.into_iter().join(sep)
}

pub(crate) fn unwrap_or_def_verbose<T, E>(result: Result<T, E>) -> T
where
    T: Default,
    E: std::fmt::Display,
{
    result
        .inspect_err(|e| {
            error!("ERROR: {e:#}");
        })
        .unwrap_or_default()
}
